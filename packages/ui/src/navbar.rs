use dioxus::prelude::*;

use crate::DIRECTORY_CSS;

/// Top bar holding the launcher's route links. Also pulls in the shared stylesheet,
/// so anything rendered under it is styled.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: DIRECTORY_CSS }
        nav {
            class: "navbar",
            span { class: "brand", "Employee Directory" }
            {children}
        }
    }
}
