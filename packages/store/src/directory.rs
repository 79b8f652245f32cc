//! # Directory view state
//!
//! [`DirectoryState`] is the client-side snapshot of the employee list plus the view's
//! small state machine:
//!
//! ```text
//! Idle ──LoadStarted──► Loading ──Loaded──► Ready
//!                              └─LoadFailed─► Failed
//!
//! Ready ──RequestDelete──► ConfirmDelete ──ConfirmDelete──► Ready (+ delete effect)
//!       ──BeginEdit─────► Editing ──SubmitEdit──► (update effect)
//!                                 ──Updated───► Ready
//! any overlay ──Cancel──► Ready
//! ```
//!
//! The snapshot is never re-fetched after mount. Successful deletes and updates are
//! applied locally so the table stays consistent with the last known server state.

use chrono::NaiveDate;

use crate::draft::{apply_input, EmployeeDraft};
use crate::models::{Employee, EmployeeUpdate};
use crate::validation::{EmployeeField, FieldErrors};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch employees. Please try again later.";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete employee. Please try again.";
pub const UPDATED_MESSAGE: &str = "Employee updated successfully.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update employee. Please try again.";

/// Names longer than this are shortened in the table.
pub const NAME_DISPLAY_LIMIT: usize = 10;

/// Where the initial list fetch stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Banner shown above the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.to_string(),
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.to_string(),
        }
    }
}

/// The update overlay's own draft.
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    pub employee_id: String,
    pub draft: EmployeeDraft,
    pub errors: FieldErrors,
    /// An update request is in flight.
    pub saving: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Overlay {
    #[default]
    Closed,
    ConfirmDelete { employee_id: String },
    Editing(EditSession),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryAction {
    LoadStarted,
    Loaded(Vec<Employee>),
    LoadFailed,
    Search(String),
    RequestDelete { employee_id: String },
    ConfirmDelete,
    Deleted { employee_id: String },
    DeleteFailed,
    BeginEdit { employee_id: String },
    EditInput { field: EmployeeField, value: String },
    SubmitEdit { today: NaiveDate },
    Updated { employee_id: String, update: EmployeeUpdate },
    UpdateFailed,
    /// Close whichever overlay is open.
    Cancel,
}

/// Request the view must send after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryEffect {
    None,
    Delete { employee_id: String },
    Update { employee_id: String, update: EmployeeUpdate },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    pub phase: LoadPhase,
    /// Last known server state, in server order.
    pub employees: Vec<Employee>,
    pub search: String,
    pub notice: Option<Notice>,
    pub overlay: Overlay,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records whose full name contains the search text, ignoring case.
    pub fn visible(&self) -> Vec<&Employee> {
        let needle = self.search.trim().to_lowercase();
        self.employees
            .iter()
            .filter(|e| needle.is_empty() || e.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    pub fn apply(&mut self, action: DirectoryAction) -> DirectoryEffect {
        match action {
            DirectoryAction::LoadStarted => {
                self.phase = LoadPhase::Loading;
            }
            DirectoryAction::Loaded(employees) => {
                self.phase = LoadPhase::Ready;
                self.employees = employees;
                self.notice = None;
            }
            DirectoryAction::LoadFailed => {
                self.phase = LoadPhase::Failed;
                self.notice = Some(Notice::error(LOAD_FAILED_MESSAGE));
            }
            DirectoryAction::Search(text) => {
                self.search = text;
            }
            DirectoryAction::RequestDelete { employee_id } => {
                if self.phase == LoadPhase::Ready && self.find(&employee_id).is_some() {
                    self.overlay = Overlay::ConfirmDelete { employee_id };
                }
            }
            DirectoryAction::ConfirmDelete => match std::mem::take(&mut self.overlay) {
                Overlay::ConfirmDelete { employee_id } => {
                    return DirectoryEffect::Delete { employee_id };
                }
                other => self.overlay = other,
            },
            DirectoryAction::Deleted { employee_id } => {
                if let Some(index) = self
                    .employees
                    .iter()
                    .position(|e| e.employee_id == employee_id)
                {
                    self.employees.remove(index);
                }
                self.notice = Some(Notice::success(DELETED_MESSAGE));
            }
            DirectoryAction::DeleteFailed => {
                self.notice = Some(Notice::error(DELETE_FAILED_MESSAGE));
            }
            DirectoryAction::BeginEdit { employee_id } => {
                if self.phase != LoadPhase::Ready {
                    return DirectoryEffect::None;
                }
                if let Some(employee) = self.find(&employee_id) {
                    self.overlay = Overlay::Editing(EditSession {
                        draft: EmployeeDraft::from_employee(employee),
                        employee_id,
                        errors: FieldErrors::new(),
                        saving: false,
                    });
                    self.notice = None;
                }
            }
            DirectoryAction::EditInput { field, value } => {
                if let Overlay::Editing(session) = &mut self.overlay {
                    if field != EmployeeField::EmployeeId {
                        apply_input(&mut session.draft, &mut session.errors, field, value);
                    }
                }
            }
            DirectoryAction::SubmitEdit { today } => {
                if let Overlay::Editing(session) = &mut self.overlay {
                    if session.saving {
                        return DirectoryEffect::None;
                    }
                    match session.draft.to_update(today) {
                        Ok(update) => {
                            session.errors = FieldErrors::new();
                            session.saving = true;
                            return DirectoryEffect::Update {
                                employee_id: session.employee_id.clone(),
                                update,
                            };
                        }
                        Err(errors) => session.errors = errors,
                    }
                }
            }
            DirectoryAction::Updated {
                employee_id,
                update,
            } => {
                if let Some(employee) = self
                    .employees
                    .iter_mut()
                    .find(|e| e.employee_id == employee_id)
                {
                    employee.apply_update(&update);
                }
                self.overlay = Overlay::Closed;
                self.notice = Some(Notice::success(UPDATED_MESSAGE));
            }
            DirectoryAction::UpdateFailed => {
                if let Overlay::Editing(session) = &mut self.overlay {
                    session.saving = false;
                }
                self.notice = Some(Notice::error(UPDATE_FAILED_MESSAGE));
            }
            DirectoryAction::Cancel => {
                self.overlay = Overlay::Closed;
            }
        }
        DirectoryEffect::None
    }
}

/// Text of the Name cell: the first name alone, shortened by [`display_name`].
/// The full name still drives search and the cell's tooltip.
pub fn row_name(employee: &Employee) -> String {
    display_name(&employee.first_name)
}

/// Shorten `name` to [`NAME_DISPLAY_LIMIT`] characters plus `...` for table cells.
pub fn display_name(name: &str) -> String {
    if name.chars().count() > NAME_DISPLAY_LIMIT {
        let head: String = name.chars().take(NAME_DISPLAY_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    fn employee(id: &str, first: &str, last: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone_number: "0123456789".to_string(),
            department: Department::Sales,
            date_of_joining: NaiveDate::from_ymd_opt(2022, 9, 1).unwrap(),
            role: "Associate".to_string(),
        }
    }

    fn loaded() -> DirectoryState {
        let mut state = DirectoryState::new();
        state.apply(DirectoryAction::LoadStarted);
        state.apply(DirectoryAction::Loaded(vec![
            employee("1", "Alan", "Turing"),
            employee("2", "Barbara", "Liskov"),
            employee("3", "Alonzo", "Church"),
        ]));
        state
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_load_phases() {
        let mut state = DirectoryState::new();
        assert_eq!(state.phase, LoadPhase::Idle);

        state.apply(DirectoryAction::LoadStarted);
        assert_eq!(state.phase, LoadPhase::Loading);

        state.apply(DirectoryAction::LoadFailed);
        assert_eq!(state.phase, LoadPhase::Failed);
        assert_eq!(state.notice, Some(Notice::error(LOAD_FAILED_MESSAGE)));

        assert_eq!(loaded().phase, LoadPhase::Ready);
        assert_eq!(loaded().employees.len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut state = loaded();

        state.apply(DirectoryAction::Search("AL".to_string()));
        let ids: Vec<_> = state.visible().iter().map(|e| e.employee_id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);

        state.apply(DirectoryAction::Search("ng Al".to_string()));
        assert!(state.visible().is_empty());

        state.apply(DirectoryAction::Search("liskov".to_string()));
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn test_search_without_match_keeps_snapshot() {
        let mut state = loaded();
        let before = state.employees.clone();

        state.apply(DirectoryAction::Search("zzz".to_string()));

        assert!(state.visible().is_empty());
        assert_eq!(state.employees, before);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = loaded();

        state.apply(DirectoryAction::RequestDelete {
            employee_id: "2".to_string(),
        });
        assert_eq!(
            state.overlay,
            Overlay::ConfirmDelete {
                employee_id: "2".to_string()
            }
        );

        state.apply(DirectoryAction::Cancel);
        assert_eq!(state.overlay, Overlay::Closed);
        assert_eq!(state.employees.len(), 3);

        state.apply(DirectoryAction::RequestDelete {
            employee_id: "2".to_string(),
        });
        let effect = state.apply(DirectoryAction::ConfirmDelete);
        assert_eq!(
            effect,
            DirectoryEffect::Delete {
                employee_id: "2".to_string()
            }
        );
        assert_eq!(state.overlay, Overlay::Closed);
    }

    #[test]
    fn test_request_delete_of_unknown_id_is_ignored() {
        let mut state = loaded();
        state.apply(DirectoryAction::RequestDelete {
            employee_id: "99".to_string(),
        });
        assert_eq!(state.overlay, Overlay::Closed);
        assert_eq!(state.apply(DirectoryAction::ConfirmDelete), DirectoryEffect::None);
    }

    #[test]
    fn test_deleted_removes_exactly_one() {
        let mut state = loaded();
        state.employees.push(employee("2", "Duplicate", "Row"));

        state.apply(DirectoryAction::Deleted {
            employee_id: "2".to_string(),
        });

        let ids: Vec<_> = state.employees.iter().map(|e| e.employee_id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "2"]);
        assert_eq!(state.notice, Some(Notice::success(DELETED_MESSAGE)));
    }

    #[test]
    fn test_delete_failure_leaves_snapshot() {
        let mut state = loaded();
        let before = state.employees.clone();

        state.apply(DirectoryAction::DeleteFailed);

        assert_eq!(state.employees, before);
        assert_eq!(state.notice, Some(Notice::error(DELETE_FAILED_MESSAGE)));
    }

    #[test]
    fn test_edit_flow_patches_in_place() {
        let mut state = loaded();
        state.apply(DirectoryAction::BeginEdit {
            employee_id: "3".to_string(),
        });
        state.apply(DirectoryAction::EditInput {
            field: EmployeeField::Role,
            value: "Professor".to_string(),
        });
        // The identifier cannot be edited.
        state.apply(DirectoryAction::EditInput {
            field: EmployeeField::EmployeeId,
            value: "7".to_string(),
        });

        let effect = state.apply(DirectoryAction::SubmitEdit { today: today() });
        let DirectoryEffect::Update {
            employee_id,
            update,
        } = effect
        else {
            panic!("expected update effect, got {effect:?}");
        };
        assert_eq!(employee_id, "3");
        assert_eq!(update.role, "Professor");

        state.apply(DirectoryAction::Updated {
            employee_id,
            update,
        });

        assert_eq!(state.overlay, Overlay::Closed);
        assert_eq!(state.employees[2].role, "Professor");
        assert_eq!(state.employees[2].employee_id, "3");
        assert_eq!(state.employees[0].role, "Associate");
        assert_eq!(state.notice, Some(Notice::success(UPDATED_MESSAGE)));
    }

    #[test]
    fn test_edit_validation_blocks_request() {
        let mut state = loaded();
        state.apply(DirectoryAction::BeginEdit {
            employee_id: "1".to_string(),
        });
        state.apply(DirectoryAction::EditInput {
            field: EmployeeField::Email,
            value: "alan@bletchley".to_string(),
        });

        assert_eq!(
            state.apply(DirectoryAction::SubmitEdit { today: today() }),
            DirectoryEffect::None
        );
        let Overlay::Editing(session) = &state.overlay else {
            panic!("overlay should stay open");
        };
        assert!(session.errors.get(EmployeeField::Email).is_some());
        assert!(!session.saving);
    }

    #[test]
    fn test_update_failure_keeps_overlay_open() {
        let mut state = loaded();
        state.apply(DirectoryAction::BeginEdit {
            employee_id: "1".to_string(),
        });
        state.apply(DirectoryAction::SubmitEdit { today: today() });

        state.apply(DirectoryAction::UpdateFailed);

        let Overlay::Editing(session) = &state.overlay else {
            panic!("overlay should stay open");
        };
        assert!(!session.saving);
        assert_eq!(state.notice, Some(Notice::error(UPDATE_FAILED_MESSAGE)));
    }

    #[test]
    fn test_confirm_delete_leaves_edit_overlay_alone() {
        let mut state = loaded();
        state.apply(DirectoryAction::BeginEdit {
            employee_id: "1".to_string(),
        });

        assert_eq!(state.apply(DirectoryAction::ConfirmDelete), DirectoryEffect::None);
        assert!(matches!(state.overlay, Overlay::Editing(_)));
    }

    #[test]
    fn test_row_name_uses_first_name_only() {
        let grace = employee("4", "Grace", "Hopper");
        assert_eq!(row_name(&grace), "Grace");
        assert_eq!(grace.full_name(), "Grace Hopper");

        let long = employee("5", "Bartholomew", "Li");
        assert_eq!(row_name(&long), "Bartholome...");
    }

    #[test]
    fn test_display_name_truncation() {
        assert_eq!(display_name("Alan"), "Alan");
        assert_eq!(display_name("Maximilian"), "Maximilian");
        assert_eq!(display_name("Maximiliana"), "Maximilian...");
        assert_eq!(display_name("Żółtkowskiego"), "Żółtkowski...");
    }
}
