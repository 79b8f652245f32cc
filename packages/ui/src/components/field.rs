use dioxus::prelude::*;
use store::{Department, EmployeeField};

/// Labelled input for one employee field, with its error underneath.
///
/// Department renders as a select over [`Department::ALL`], date of joining as a
/// date picker capped at `max_date`, everything else as a text-like input.
#[component]
pub fn FormField(
    field: EmployeeField,
    value: String,
    #[props(!optional)]
    error: Option<String>,
    /// Prefix for the element id, so two forms on one page don't collide.
    #[props(default)]
    id_prefix: String,
    /// Upper bound for the date picker, `YYYY-MM-DD`.
    max_date: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    let id = format!("{id_prefix}{}", field.key());

    let control = match field {
        EmployeeField::Department => rsx! {
            select {
                id: "{id}",
                name: field.key(),
                value: "{value}",
                onchange: move |evt: FormEvent| on_input.call(evt.value()),
                option { value: "", "Select Department" }
                for department in Department::ALL {
                    option {
                        key: "{department.as_str()}",
                        value: department.as_str(),
                        selected: value == department.as_str(),
                        "{department.label()}"
                    }
                }
            }
        },
        EmployeeField::DateOfJoining => rsx! {
            input {
                id: "{id}",
                name: field.key(),
                r#type: "date",
                max: max_date,
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        },
        _ => rsx! {
            input {
                id: "{id}",
                name: field.key(),
                r#type: if field == EmployeeField::Email { "email" } else { "text" },
                inputmode: if field == EmployeeField::PhoneNumber { "numeric" } else { "text" },
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        },
    };

    rsx! {
        div {
            class: "form-group",
            label { r#for: "{id}", "{field.label()}:" }
            {control}
            if let Some(message) = error {
                p { class: "error", "{message}" }
            }
        }
    }
}
