//! "Add employee" form.

use dioxus::core::Task;
use dioxus::prelude::*;
use store::{EmployeeField, IntakeAction, IntakeEffect, IntakeState};

use crate::client::use_client;
use crate::components::{Button, ButtonVariant, FormField};
use crate::timer::{after, today};

/// Form that validates a new employee locally and submits it to the backend.
///
/// After a successful create the success banner stays up for the configured delay,
/// then the form clears itself. The pending clear is cancelled by a manual reset or a
/// new submission, and dies with the view if it unmounts first.
#[component]
pub fn IntakeFormView() -> Element {
    let client = use_client();
    let mut state = use_signal(IntakeState::new);
    let mut pending_reset = use_signal(|| Option::<Task>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        cancel_pending(pending_reset);

        let effect = state.write().apply(IntakeAction::Submit { today: today() });
        let IntakeEffect::Create(employee) = effect else {
            return;
        };

        let api = client.api.clone();
        let delay = client.config.reset_delay();
        spawn(async move {
            let action = match api.create_employee(&employee).await {
                Ok(()) => IntakeAction::Created,
                Err(e) => {
                    tracing::error!("Error adding employee: {e}");
                    failure_action(&e)
                }
            };

            if state.write().apply(action) == IntakeEffect::ScheduleReset {
                let task = spawn(after(delay, move || {
                    pending_reset.set(None);
                    state.write().apply(IntakeAction::Reset);
                }));
                pending_reset.set(Some(task));
            }
        });
    };

    let handle_reset = move |_| {
        cancel_pending(pending_reset);
        state.write().apply(IntakeAction::Reset);
    };

    let current = state();
    let max_date = today().format("%Y-%m-%d").to_string();

    rsx! {
        div {
            class: "container",
            h1 { "Add Employee" }

            if let Some(message) = current.success.clone() {
                p { class: "success-message", "{message}" }
            }
            if let Some(message) = current.form_error.clone() {
                p { class: "error", "{message}" }
            }

            form {
                onsubmit: handle_submit,
                novalidate: true,

                for field in EmployeeField::ALL {
                    FormField {
                        key: "{field.key()}",
                        field,
                        value: current.draft.get(field).to_string(),
                        error: current.errors.get(field).map(str::to_string),
                        max_date: max_date.clone(),
                        on_input: move |value: String| {
                            state.write().apply(IntakeAction::Input { field, value });
                        },
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: !current.can_submit(),
                        if current.submitting { "Submitting..." } else { "Add Employee" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: current.submitting,
                        onclick: handle_reset,
                        "Reset"
                    }
                }
            }
        }
    }
}

fn cancel_pending(mut pending_reset: Signal<Option<Task>>) {
    if let Some(task) = pending_reset.write().take() {
        task.cancel();
    }
}

/// Map a failed create onto the form: no response at all is "unavailable", anything
/// else is a rejection carrying whatever field messages the body had.
fn failure_action(error: &api::Error) -> IntakeAction {
    match error {
        api::Error::Transport(_) | api::Error::InvalidBaseUrl { .. } => IntakeAction::Unavailable,
        other => IntakeAction::Rejected {
            messages: other.field_messages(),
        },
    }
}
