//! # Domain models for employee records
//!
//! These types cross the wire to and from the directory backend, so they are all
//! `Serialize + Deserialize` and mirror the backend's snake_case JSON.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Employee`] | A full employee record. Used both as the create payload and as an entry of the list response. |
//! | [`EmployeeUpdate`] | The editable subset sent by the update endpoint. The identifier travels in the URL instead. |
//! | [`Department`] | The closed set of departments the backend accepts. |
//!
//! The backend is not consistent about identifier types (some deployments use an
//! integer primary key, others a free-form code), so [`Employee::employee_id`] accepts
//! either a JSON string or number and always holds a string.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A department an employee can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Marketing,
    Sales,
}

impl Department {
    /// Every department, in the order the form offers them.
    pub const ALL: [Department; 4] = [
        Department::Hr,
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
    ];

    /// The value sent to and received from the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
        }
    }

    /// Human-friendly label for select options.
    pub fn label(&self) -> &'static str {
        match self {
            Department::Hr => "Human Resources",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known department values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

/// A single employee record as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Externally assigned identifier, normalised to a string.
    #[serde(deserialize_with = "string_or_number")]
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Exactly ten ASCII digits.
    pub phone_number: String,
    pub department: Department,
    /// Serialized as `YYYY-MM-DD`.
    pub date_of_joining: NaiveDate,
    pub role: String,
}

impl Employee {
    /// "First Last", skipping whichever half is blank.
    pub fn full_name(&self) -> String {
        match (self.first_name.trim(), self.last_name.trim()) {
            (first, "") => first.to_string(),
            ("", last) => last.to_string(),
            (first, last) => format!("{first} {last}"),
        }
    }

    /// The editable subset of this record.
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            department: self.department,
            date_of_joining: self.date_of_joining,
            role: self.role.clone(),
        }
    }

    /// Overwrite the editable fields with `update`, keeping the identifier.
    pub fn apply_update(&mut self, update: &EmployeeUpdate) {
        self.first_name = update.first_name.clone();
        self.last_name = update.last_name.clone();
        self.email = update.email.clone();
        self.phone_number = update.phone_number.clone();
        self.department = update.department;
        self.date_of_joining = update.date_of_joining;
        self.role = update.role.clone();
    }
}

/// Update payload: every field of [`Employee`] except the identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub department: Department,
    pub date_of_joining: NaiveDate,
    pub role: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    })
}
