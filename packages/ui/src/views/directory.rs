//! Employee list with search, delete and update.

use api::EmployeeApi;
use dioxus::prelude::*;
use store::{
    row_name, DirectoryAction, DirectoryEffect, DirectoryState, EditSession, Employee,
    EmployeeField, LoadPhase, NoticeKind, Overlay,
};

use crate::client::use_client;
use crate::components::{Button, ButtonVariant, FormField};
use crate::icons::{FaPenToSquare, FaTrash};
use crate::timer::today;
use crate::views::ModalOverlay;
use crate::Icon;

/// Directory table backed by a snapshot fetched once on mount.
#[component]
pub fn DirectoryView() -> Element {
    let client = use_client();
    let mut state = use_signal(DirectoryState::new);

    // Fetch the list on mount; the resource is dropped with the view.
    let loader_api = client.api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            state.write().apply(DirectoryAction::LoadStarted);
            let action = match api.list_employees().await {
                Ok(employees) => DirectoryAction::Loaded(employees),
                Err(e) => {
                    tracing::error!("Error fetching employees: {e}");
                    DirectoryAction::LoadFailed
                }
            };
            state.write().apply(action);
        }
    });

    let current = state();
    let visible: Vec<Employee> = current.visible().into_iter().cloned().collect();

    let overlay = match current.overlay.clone() {
        Overlay::Closed => rsx! {},
        Overlay::ConfirmDelete { employee_id } => {
            let api = client.api.clone();
            let name = current
                .find(&employee_id)
                .map(Employee::full_name)
                .unwrap_or_default();
            rsx! {
                ModalOverlay {
                    on_close: move |_| {
                        state.write().apply(DirectoryAction::Cancel);
                    },
                    ConfirmDeleteDialog {
                        name,
                        on_confirm: move |_| {
                            let effect = state.write().apply(DirectoryAction::ConfirmDelete);
                            run_effect(state, api.clone(), effect);
                        },
                        on_cancel: move |_| {
                            state.write().apply(DirectoryAction::Cancel);
                        },
                    }
                }
            }
        }
        Overlay::Editing(session) => {
            let api = client.api.clone();
            let failure = current
                .notice
                .clone()
                .filter(|notice| notice.kind == NoticeKind::Error)
                .map(|notice| notice.text);
            rsx! {
                ModalOverlay {
                    on_close: move |_| {
                        state.write().apply(DirectoryAction::Cancel);
                    },
                    EditEmployeeForm {
                        session,
                        failure,
                        on_input: move |(field, value): (EmployeeField, String)| {
                            state.write().apply(DirectoryAction::EditInput { field, value });
                        },
                        on_submit: move |_| {
                            let effect = state
                                .write()
                                .apply(DirectoryAction::SubmitEdit { today: today() });
                            run_effect(state, api.clone(), effect);
                        },
                        on_cancel: move |_| {
                            state.write().apply(DirectoryAction::Cancel);
                        },
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "container",
            h1 { "Employee List" }

            input {
                class: "search",
                r#type: "search",
                placeholder: "Search employees",
                value: "{current.search}",
                oninput: move |evt: FormEvent| {
                    state.write().apply(DirectoryAction::Search(evt.value()));
                },
            }

            if let Some(notice) = current.notice.clone() {
                div {
                    class: match notice.kind {
                        NoticeKind::Success => "response-message success",
                        NoticeKind::Error => "response-message error",
                    },
                    p { "{notice.text}" }
                }
            }

            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone Number" }
                        th { "Department" }
                        th { "Role" }
                        th { "Actions" }
                    }
                }
                tbody {
                    {match current.phase {
                        LoadPhase::Idle | LoadPhase::Loading => rsx! {
                            tr { td { colspan: 6, class: "placeholder", "Loading employees..." } }
                        },
                        LoadPhase::Ready if visible.is_empty() => rsx! {
                            tr { td { colspan: 6, class: "placeholder", "No employees found." } }
                        },
                        _ => rsx! {},
                    }}
                    for employee in visible {
                        EmployeeRow {
                            key: "{employee.employee_id}",
                            employee: employee.clone(),
                            on_edit: move |employee_id: String| {
                                state.write().apply(DirectoryAction::BeginEdit { employee_id });
                            },
                            on_delete: move |employee_id: String| {
                                state.write().apply(DirectoryAction::RequestDelete { employee_id });
                            },
                        }
                    }
                }
            }

            {overlay}
        }
    }
}

/// Send the request a transition asked for and feed the outcome back in.
fn run_effect(mut state: Signal<DirectoryState>, api: EmployeeApi, effect: DirectoryEffect) {
    match effect {
        DirectoryEffect::None => {}
        DirectoryEffect::Delete { employee_id } => {
            spawn(async move {
                let action = match api.delete_employee(&employee_id).await {
                    Ok(()) => DirectoryAction::Deleted { employee_id },
                    Err(e) => {
                        tracing::error!("Error deleting employee {employee_id}: {e}");
                        DirectoryAction::DeleteFailed
                    }
                };
                state.write().apply(action);
            });
        }
        DirectoryEffect::Update {
            employee_id,
            update,
        } => {
            spawn(async move {
                let action = match api.update_employee(&employee_id, &update).await {
                    Ok(()) => DirectoryAction::Updated {
                        employee_id,
                        update,
                    },
                    Err(e) => {
                        tracing::error!("Error updating employee {employee_id}: {e}");
                        DirectoryAction::UpdateFailed
                    }
                };
                state.write().apply(action);
            });
        }
    }
}

#[component]
fn EmployeeRow(
    employee: Employee,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let full_name = employee.full_name();
    let edit_id = employee.employee_id.clone();
    let delete_id = employee.employee_id.clone();

    rsx! {
        tr {
            td { title: "{full_name}", "{row_name(&employee)}" }
            td { "{employee.email}" }
            td { "{employee.phone_number}" }
            td { "{employee.department}" }
            td { "{employee.role}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    title: "Update",
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                    " Update"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}

#[component]
fn ConfirmDeleteDialog(name: String, on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "dialog",
            h2 { "Delete employee" }
            p {
                if name.is_empty() {
                    "Are you sure you want to delete this employee?"
                } else {
                    "Are you sure you want to delete {name}?"
                }
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn EditEmployeeForm(
    session: EditSession,
    #[props(!optional)]
    failure: Option<String>,
    on_input: EventHandler<(EmployeeField, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let max_date = today().format("%Y-%m-%d").to_string();

    rsx! {
        form {
            class: "update-form",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },

            h2 { "Update Employee" }
            p { class: "muted", "Employee ID: {session.employee_id}" }
            if let Some(message) = failure {
                p { class: "error", "{message}" }
            }

            for field in EmployeeField::EDITABLE {
                FormField {
                    key: "{field.key()}",
                    field,
                    id_prefix: "edit-",
                    value: session.draft.get(field).to_string(),
                    error: session.errors.get(field).map(str::to_string),
                    max_date: max_date.clone(),
                    on_input: move |value: String| on_input.call((field, value)),
                }
            }

            div {
                class: "form-actions",
                Button {
                    r#type: "submit",
                    disabled: session.saving,
                    if session.saving { "Saving..." } else { "Update Employee" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
