use dioxus::prelude::*;

/// Fallback for paths neither launcher routes. `children` is where the launcher puts
/// its link back home, since only it knows the route type.
#[component]
pub fn NotFoundView(path: String, children: Element) -> Element {
    rsx! {
        div {
            class: "container",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            {children}
        }
    }
}
