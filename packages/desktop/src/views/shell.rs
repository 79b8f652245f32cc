use dioxus::prelude::*;

use ui::Navbar;

use crate::Route;

#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::AddEmployee {}, "Add Employee" }
            Link { to: Route::ViewEmployees {}, "View Employees" }
        }
        main {
            Outlet::<Route> {}
        }
    }
}
