//! # Intake form state
//!
//! [`IntakeState`] owns everything the "add employee" form shows: the raw
//! [`EmployeeDraft`], per-field errors, a form-level error, the success banner and
//! the busy flag. The view never patches these fields directly; it feeds
//! [`IntakeAction`]s to [`IntakeState::apply`] and performs whatever
//! [`IntakeEffect`] comes back (send the create request, schedule the reset).
//!
//! ```text
//! Input ──► draft/errors updated
//! Submit ──► invalid: errors shown, no effect
//!        └─► valid:   busy, Effect::Create(employee)
//! Created ──► success banner, Effect::ScheduleReset
//! Rejected / Unavailable ──► messages shown, not busy
//! Reset ──► everything empty (ignored while busy)
//! ```

use chrono::NaiveDate;

use crate::models::{Department, Employee, EmployeeUpdate};
use crate::validation::{
    check_field, is_phone_number, is_phone_prefix, parse_date, EmployeeField, FieldErrors,
    PHONE_INPUT_MESSAGE,
};

pub const CREATED_MESSAGE: &str = "Employee added successfully!";
pub const REJECTED_MESSAGE: &str = "An error occurred";
pub const UNAVAILABLE_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Raw, unvalidated form values exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}

impl EmployeeDraft {
    /// Draft pre-filled from an existing record.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone(),
            department: employee.department.as_str().to_string(),
            date_of_joining: employee.date_of_joining.format("%Y-%m-%d").to_string(),
            role: employee.role.clone(),
        }
    }

    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::Email => &self.email,
            EmployeeField::PhoneNumber => &self.phone_number,
            EmployeeField::Department => &self.department,
            EmployeeField::DateOfJoining => &self.date_of_joining,
            EmployeeField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        let slot = match field {
            EmployeeField::EmployeeId => &mut self.employee_id,
            EmployeeField::FirstName => &mut self.first_name,
            EmployeeField::LastName => &mut self.last_name,
            EmployeeField::Email => &mut self.email,
            EmployeeField::PhoneNumber => &mut self.phone_number,
            EmployeeField::Department => &mut self.department,
            EmployeeField::DateOfJoining => &mut self.date_of_joining,
            EmployeeField::Role => &mut self.role,
        };
        *slot = value;
    }

    /// Run the rules for `fields` and collect every failure.
    pub fn validate(&self, fields: &[EmployeeField], today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for &field in fields {
            if let Some(message) = check_field(field, self.get(field), today) {
                errors.set(field, message);
            }
        }
        errors
    }

    /// Validate all eight fields and build a create payload.
    pub fn to_employee(&self, today: NaiveDate) -> Result<Employee, FieldErrors> {
        let (department, date_of_joining) = self.typed_fields(&EmployeeField::ALL, today)?;
        Ok(Employee {
            employee_id: self.employee_id.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.clone(),
            department,
            date_of_joining,
            role: self.role.trim().to_string(),
        })
    }

    /// Validate the editable fields and build an update payload.
    pub fn to_update(&self, today: NaiveDate) -> Result<EmployeeUpdate, FieldErrors> {
        let (department, date_of_joining) = self.typed_fields(&EmployeeField::EDITABLE, today)?;
        Ok(EmployeeUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.clone(),
            department,
            date_of_joining,
            role: self.role.trim().to_string(),
        })
    }

    fn typed_fields(
        &self,
        fields: &[EmployeeField],
        today: NaiveDate,
    ) -> Result<(Department, NaiveDate), FieldErrors> {
        let errors = self.validate(fields, today);
        let department = self.department.parse::<Department>().ok();
        let date = parse_date(&self.date_of_joining);
        match (errors.is_empty(), department, date) {
            (true, Some(department), Some(date)) => Ok((department, date)),
            _ => Err(errors),
        }
    }
}

/// Store a keystroke in `draft`.
///
/// Phone numbers only ever hold 0 to 10 digits: anything else is refused and flagged,
/// and the phone error is cleared only once all ten digits are present. Every other
/// field takes the value as-is and drops its error.
pub(crate) fn apply_input(
    draft: &mut EmployeeDraft,
    errors: &mut FieldErrors,
    field: EmployeeField,
    value: String,
) {
    if field != EmployeeField::PhoneNumber {
        draft.set(field, value);
        errors.clear(field);
        return;
    }

    if !is_phone_prefix(&value) {
        errors.set(field, PHONE_INPUT_MESSAGE);
        return;
    }
    if is_phone_number(&value) {
        errors.clear(field);
    }
    draft.set(field, value);
}

/// Everything the intake form renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakeState {
    pub draft: EmployeeDraft,
    pub errors: FieldErrors,
    /// Error not tied to a single field (transport failure, server `message`).
    pub form_error: Option<String>,
    pub success: Option<String>,
    /// A create request is in flight.
    pub submitting: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IntakeAction {
    /// A keystroke in one of the inputs.
    Input { field: EmployeeField, value: String },
    /// The submit button was pressed.
    Submit { today: NaiveDate },
    /// The backend answered 201.
    Created,
    /// The backend refused the record. `messages` holds the response body's
    /// key/message pairs, empty when the body was not a mapping.
    Rejected { messages: Vec<(String, String)> },
    /// No response at all.
    Unavailable,
    /// Clear the form. Ignored while a create request is in flight.
    Reset,
}

/// Side effect the view must carry out after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum IntakeEffect {
    None,
    Create(Employee),
    ScheduleReset,
}

impl IntakeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.errors.is_empty()
    }

    pub fn apply(&mut self, action: IntakeAction) -> IntakeEffect {
        match action {
            IntakeAction::Input { field, value } => {
                self.input(field, value);
                IntakeEffect::None
            }
            IntakeAction::Submit { today } => self.submit(today),
            IntakeAction::Created => {
                self.submitting = false;
                self.success = Some(CREATED_MESSAGE.to_string());
                IntakeEffect::ScheduleReset
            }
            IntakeAction::Rejected { messages } => {
                self.submitting = false;
                self.reject(messages);
                IntakeEffect::None
            }
            IntakeAction::Unavailable => {
                self.submitting = false;
                self.form_error = Some(UNAVAILABLE_MESSAGE.to_string());
                IntakeEffect::None
            }
            IntakeAction::Reset => {
                if !self.submitting {
                    *self = Self::default();
                }
                IntakeEffect::None
            }
        }
    }

    fn input(&mut self, field: EmployeeField, value: String) {
        self.form_error = None;
        apply_input(&mut self.draft, &mut self.errors, field, value);
    }

    fn submit(&mut self, today: NaiveDate) -> IntakeEffect {
        if self.submitting {
            return IntakeEffect::None;
        }
        match self.draft.to_employee(today) {
            Ok(employee) => {
                self.errors = FieldErrors::new();
                self.form_error = None;
                self.success = None;
                self.submitting = true;
                IntakeEffect::Create(employee)
            }
            Err(errors) => {
                self.errors = errors;
                IntakeEffect::None
            }
        }
    }

    fn reject(&mut self, messages: Vec<(String, String)>) {
        if messages.is_empty() {
            self.form_error = Some(REJECTED_MESSAGE.to_string());
            return;
        }

        let mut general = Vec::new();
        for (key, message) in messages {
            match EmployeeField::from_key(&key) {
                Some(field) => self.errors.set(field, message),
                None => general.push(message),
            }
        }
        self.form_error = if general.is_empty() {
            None
        } else {
            Some(general.join(" "))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{DATE_FUTURE_MESSAGE, EMAIL_MESSAGE, PHONE_LENGTH_MESSAGE};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn type_in(state: &mut IntakeState, field: EmployeeField, value: &str) -> IntakeEffect {
        state.apply(IntakeAction::Input {
            field,
            value: value.to_string(),
        })
    }

    fn filled() -> IntakeState {
        let mut state = IntakeState::new();
        type_in(&mut state, EmployeeField::EmployeeId, "E-100");
        type_in(&mut state, EmployeeField::FirstName, "Grace");
        type_in(&mut state, EmployeeField::LastName, "Hopper");
        type_in(&mut state, EmployeeField::Email, "grace@navy.mil");
        type_in(&mut state, EmployeeField::PhoneNumber, "5550001111");
        type_in(&mut state, EmployeeField::Department, "Engineering");
        type_in(&mut state, EmployeeField::DateOfJoining, "2024-03-15");
        type_in(&mut state, EmployeeField::Role, "Rear Admiral");
        state
    }

    #[test]
    fn test_phone_input_accepts_only_digit_prefixes() {
        let mut state = IntakeState::new();

        type_in(&mut state, EmployeeField::PhoneNumber, "555");
        assert_eq!(state.draft.phone_number, "555");
        assert_eq!(state.errors.get(EmployeeField::PhoneNumber), None);

        type_in(&mut state, EmployeeField::PhoneNumber, "555x");
        assert_eq!(state.draft.phone_number, "555");
        assert_eq!(
            state.errors.get(EmployeeField::PhoneNumber),
            Some(PHONE_INPUT_MESSAGE)
        );

        type_in(&mut state, EmployeeField::PhoneNumber, "55512345678");
        assert_eq!(state.draft.phone_number, "555");

        // Still short of ten digits: the earlier error stays.
        type_in(&mut state, EmployeeField::PhoneNumber, "5551");
        assert_eq!(state.draft.phone_number, "5551");
        assert!(state.errors.get(EmployeeField::PhoneNumber).is_some());

        type_in(&mut state, EmployeeField::PhoneNumber, "5551234567");
        assert_eq!(state.draft.phone_number, "5551234567");
        assert_eq!(state.errors.get(EmployeeField::PhoneNumber), None);
    }

    #[test]
    fn test_input_clears_that_field_only() {
        let mut state = IntakeState::new();
        state.apply(IntakeAction::Submit { today: today() });
        assert_eq!(state.errors.len(), EmployeeField::ALL.len());

        type_in(&mut state, EmployeeField::Role, "Clerk");
        assert_eq!(state.errors.get(EmployeeField::Role), None);
        assert_eq!(state.errors.len(), EmployeeField::ALL.len() - 1);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_each_missing_field_reported_alone() {
        for field in EmployeeField::ALL {
            let mut state = filled();
            state.draft.set(field, String::new());

            let effect = state.apply(IntakeAction::Submit { today: today() });

            assert_eq!(effect, IntakeEffect::None, "{field:?} should block submit");
            assert_eq!(state.errors.len(), 1);
            assert!(state.errors.get(field).unwrap().ends_with("is required."));
            assert!(!state.submitting);
        }
    }

    #[test]
    fn test_format_errors_on_submit() {
        let mut state = filled();
        state.draft.phone_number = "555".to_string();
        state.draft.email = "a.b@x".to_string();
        state.draft.date_of_joining = "2024-03-16".to_string();

        assert_eq!(
            state.apply(IntakeAction::Submit { today: today() }),
            IntakeEffect::None
        );
        assert_eq!(
            state.errors.get(EmployeeField::PhoneNumber),
            Some(PHONE_LENGTH_MESSAGE)
        );
        assert_eq!(state.errors.get(EmployeeField::Email), Some(EMAIL_MESSAGE));
        assert_eq!(
            state.errors.get(EmployeeField::DateOfJoining),
            Some(DATE_FUTURE_MESSAGE)
        );
    }

    #[test]
    fn test_valid_submit_produces_payload_and_busy_flag() {
        let mut state = filled();

        let effect = state.apply(IntakeAction::Submit { today: today() });

        let IntakeEffect::Create(employee) = effect else {
            panic!("expected a create effect, got {effect:?}");
        };
        assert_eq!(employee.employee_id, "E-100");
        assert_eq!(employee.department, Department::Engineering);
        assert_eq!(employee.date_of_joining, today());
        assert!(state.submitting);
        assert!(!state.can_submit());

        // A second press while in flight does nothing.
        assert_eq!(
            state.apply(IntakeAction::Submit { today: today() }),
            IntakeEffect::None
        );
    }

    #[test]
    fn test_created_then_reset() {
        let mut state = filled();
        state.apply(IntakeAction::Submit { today: today() });

        assert_eq!(state.apply(IntakeAction::Created), IntakeEffect::ScheduleReset);
        assert_eq!(state.success.as_deref(), Some(CREATED_MESSAGE));
        assert!(!state.submitting);
        assert_eq!(state.draft.first_name, "Grace");

        state.apply(IntakeAction::Reset);
        assert_eq!(state, IntakeState::default());
    }

    #[test]
    fn test_reset_ignored_while_submitting() {
        let mut state = filled();
        state.apply(IntakeAction::Submit { today: today() });

        state.apply(IntakeAction::Reset);
        assert!(state.submitting);
        assert_eq!(state.draft.first_name, "Grace");

        // The answer still lands on the submitted draft.
        assert_eq!(state.apply(IntakeAction::Created), IntakeEffect::ScheduleReset);
        assert_eq!(state.draft.first_name, "Grace");
        state.apply(IntakeAction::Reset);
        assert_eq!(state, IntakeState::default());
    }

    #[test]
    fn test_rejected_with_field_messages() {
        let mut state = filled();
        state.apply(IntakeAction::Submit { today: today() });

        state.apply(IntakeAction::Rejected {
            messages: vec![
                (
                    "employee_id".to_string(),
                    "employee with this employee id already exists.".to_string(),
                ),
                ("detail".to_string(), "Bad request".to_string()),
            ],
        });

        assert!(!state.submitting);
        assert_eq!(
            state.errors.get(EmployeeField::EmployeeId),
            Some("employee with this employee id already exists.")
        );
        assert_eq!(state.form_error.as_deref(), Some("Bad request"));
    }

    #[test]
    fn test_rejected_without_body_and_unavailable() {
        let mut state = filled();
        state.apply(IntakeAction::Rejected { messages: vec![] });
        assert_eq!(state.form_error.as_deref(), Some(REJECTED_MESSAGE));

        state.apply(IntakeAction::Unavailable);
        assert_eq!(state.form_error.as_deref(), Some(UNAVAILABLE_MESSAGE));
        // A form-level error alone does not lock the button.
        assert!(state.can_submit());

        type_in(&mut state, EmployeeField::Role, "Commodore");
        assert_eq!(state.form_error, None);
    }

    #[test]
    fn test_draft_from_employee_roundtrips_to_update() {
        let mut state = filled();
        let IntakeEffect::Create(employee) = state.apply(IntakeAction::Submit { today: today() })
        else {
            panic!("expected create");
        };

        let draft = EmployeeDraft::from_employee(&employee);
        assert_eq!(draft.date_of_joining, "2024-03-15");
        assert_eq!(draft.to_update(today()).unwrap(), employee.to_update());
    }
}
