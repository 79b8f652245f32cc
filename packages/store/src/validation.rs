//! # Field-level validation rules
//!
//! The employee form is validated locally before anything is sent to the backend.
//! Each [`EmployeeField`] has a required-field message plus, for some fields, a
//! format rule:
//!
//! | Field | Rule |
//! |-------|------|
//! | phone number | exactly 10 ASCII digits |
//! | email | `local@domain.tld` with a 2+ letter top-level segment |
//! | department | one of [`Department::ALL`] |
//! | date of joining | `YYYY-MM-DD`, not after today |
//!
//! Rules report the *first* failing check per field, so an empty email reports
//! "Email is required." rather than the pattern message.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::Department;

pub const PHONE_DIGITS: usize = 10;

pub const PHONE_INPUT_MESSAGE: &str = "Only numbers are allowed, and the length must be 10 digits.";
pub const PHONE_LENGTH_MESSAGE: &str = "Phone number must contain exactly 10 digits.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const DEPARTMENT_MESSAGE: &str = "Please select a valid department.";
pub const DATE_FORMAT_MESSAGE: &str = "Please enter a valid date.";
pub const DATE_FUTURE_MESSAGE: &str = "Date of joining cannot be in the future.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

/// One of the eight inputs of the employee form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeField {
    EmployeeId,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Department,
    DateOfJoining,
    Role,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 8] = [
        EmployeeField::EmployeeId,
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Email,
        EmployeeField::PhoneNumber,
        EmployeeField::Department,
        EmployeeField::DateOfJoining,
        EmployeeField::Role,
    ];

    /// Fields that can be changed after creation.
    pub const EDITABLE: [EmployeeField; 7] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Email,
        EmployeeField::PhoneNumber,
        EmployeeField::Department,
        EmployeeField::DateOfJoining,
        EmployeeField::Role,
    ];

    /// JSON key used by the backend, also used as the HTML input name.
    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::FirstName => "first_name",
            EmployeeField::LastName => "last_name",
            EmployeeField::Email => "email",
            EmployeeField::PhoneNumber => "phone_number",
            EmployeeField::Department => "department",
            EmployeeField::DateOfJoining => "date_of_joining",
            EmployeeField::Role => "role",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID",
            EmployeeField::FirstName => "First Name",
            EmployeeField::LastName => "Last Name",
            EmployeeField::Email => "Email",
            EmployeeField::PhoneNumber => "Phone Number",
            EmployeeField::Department => "Department",
            EmployeeField::DateOfJoining => "Date of Joining",
            EmployeeField::Role => "Role",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        EmployeeField::ALL.into_iter().find(|f| f.key() == key)
    }

    fn required_message(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID is required.",
            EmployeeField::FirstName => "First Name is required.",
            EmployeeField::LastName => "Last Name is required.",
            EmployeeField::Email => "Email is required.",
            EmployeeField::PhoneNumber => "Phone number is required.",
            EmployeeField::Department => "Department is required.",
            EmployeeField::DateOfJoining => "Date of joining is required.",
            EmployeeField::Role => "Role is required.",
        }
    }
}

/// Per-field error messages. A field without an entry has no error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<EmployeeField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`. An empty message clears the field.
    pub fn set(&mut self, field: EmployeeField, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, message);
        }
    }

    pub fn clear(&mut self, field: EmployeeField) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: EmployeeField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// True for a syntactically plausible `local@domain.tld` address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// True for a value that may still grow into a phone number: 0 to 10 digits.
pub fn is_phone_prefix(value: &str) -> bool {
    value.len() <= PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// True for a complete phone number.
pub fn is_phone_number(value: &str) -> bool {
    value.len() == PHONE_DIGITS && is_phone_prefix(value)
}

/// Parse a `YYYY-MM-DD` date as produced by a date input.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Check a single raw field value, returning the message of the first failing rule.
pub fn check_field(field: EmployeeField, value: &str, today: NaiveDate) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(field.required_message());
    }

    match field {
        EmployeeField::PhoneNumber if !is_phone_number(value) => Some(PHONE_LENGTH_MESSAGE),
        EmployeeField::Email if !is_valid_email(value) => Some(EMAIL_MESSAGE),
        EmployeeField::Department if value.parse::<Department>().is_err() => {
            Some(DEPARTMENT_MESSAGE)
        }
        EmployeeField::DateOfJoining => match parse_date(value) {
            None => Some(DATE_FORMAT_MESSAGE),
            Some(date) if date > today => Some(DATE_FUTURE_MESSAGE),
            Some(_) => None,
        },
        _ => None,
    }
}
