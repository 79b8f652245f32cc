//! # API crate: typed client for the employee directory backend
//!
//! Both views talk to the same REST service through [`EmployeeApi`]. The client is
//! built once from the startup [`store::ClientConfig`] and shared through UI context,
//! so no component knows the backend address.
//!
//! ## Endpoints
//!
//! | Method | Function | Path | Success |
//! |--------|----------|------|---------|
//! | `POST` | [`EmployeeApi::create_employee`] | `api/employee/add-employee/` | `201` |
//! | `GET` | [`EmployeeApi::list_employees`] | `api/employee/get-employees/` | `2xx`, JSON array |
//! | `DELETE` | [`EmployeeApi::delete_employee`] | `api/employee/delete-employee/{id}/` | `2xx` |
//! | `PUT` | [`EmployeeApi::update_employee`] | `api/employee/update-employee/{id}/` | `2xx` |
//!
//! ## Errors
//!
//! [`Error`] separates the cases the views react to differently: no response at all
//! ([`Error::Transport`]), a refusal with an optional JSON body ([`Error::Rejected`],
//! see [`Error::field_messages`]) and odd-but-successful statuses
//! ([`Error::UnexpectedStatus`]). Requests carry no timeout and are never retried.

mod client;
mod error;

pub use client::EmployeeApi;
pub use error::{Error, Result};

pub use store::{ClientConfig, Department, Employee, EmployeeUpdate};
