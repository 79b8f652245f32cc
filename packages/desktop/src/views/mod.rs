mod shell;
pub use shell::Shell;

pub use ui::views::DirectoryView as ViewEmployees;
pub use ui::views::IntakeFormView as AddEmployee;

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        ui::views::NotFoundView {
            path: segments.join("/"),
            Link { to: Route::AddEmployee {}, "Back to Add Employee" }
        }
    }
}
