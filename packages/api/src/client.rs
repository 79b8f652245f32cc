//! REST client for the employee directory backend.

use reqwest::{StatusCode, Url};
use store::{ClientConfig, Employee, EmployeeUpdate};

use crate::error::{Error, Result};

const ADD_EMPLOYEE: &str = "add-employee";
const GET_EMPLOYEES: &str = "get-employees";
const DELETE_EMPLOYEE: &str = "delete-employee";
const UPDATE_EMPLOYEE: &str = "update-employee";

/// Handle to the directory backend.
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct EmployeeApi {
    http: reqwest::Client,
    base_url: Url,
}

impl EmployeeApi {
    /// Create a client rooted at `base_url` (e.g. `http://127.0.0.1:8000/`).
    pub fn new(base_url: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("cannot be used as a base".to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: url,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.api.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST api/employee/add-employee/`. Only `201 Created` counts as success.
    pub async fn create_employee(&self, employee: &Employee) -> Result<()> {
        let url = self.endpoint(&[ADD_EMPLOYEE])?;
        tracing::info!(employee_id = %employee.employee_id, "creating employee");

        let response = self.http.post(url).json(employee).send().await?;
        match response.status() {
            StatusCode::CREATED => Ok(()),
            status if status.is_success() => Err(Error::UnexpectedStatus(status.as_u16())),
            _ => Err(Error::rejected(response).await),
        }
    }

    /// `GET api/employee/get-employees/`.
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let url = self.endpoint(&[GET_EMPLOYEES])?;
        tracing::debug!("fetching employees");

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::rejected(response).await);
        }
        let employees: Vec<Employee> = response.json().await.map_err(Error::Decode)?;
        tracing::debug!(count = employees.len(), "fetched employees");
        Ok(employees)
    }

    /// `DELETE api/employee/delete-employee/{id}/`.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<()> {
        let url = self.endpoint(&[DELETE_EMPLOYEE, employee_id])?;
        tracing::info!(employee_id, "deleting employee");

        let response = self.http.delete(url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::rejected(response).await)
        }
    }

    /// `PUT api/employee/update-employee/{id}/`.
    pub async fn update_employee(&self, employee_id: &str, update: &EmployeeUpdate) -> Result<()> {
        let url = self.endpoint(&[UPDATE_EMPLOYEE, employee_id])?;
        tracing::info!(employee_id, "updating employee");

        let response = self.http.put(url).json(update).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::rejected(response).await)
        }
    }

    /// `<base>/api/employee/<segments...>/`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["api", "employee"])
            .extend(segments)
            .push("");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_on_root_base() {
        let api = EmployeeApi::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(
            api.endpoint(&[GET_EMPLOYEES]).unwrap().as_str(),
            "http://127.0.0.1:8000/api/employee/get-employees/"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = EmployeeApi::new("https://example.com/backend").unwrap();
        assert_eq!(
            api.endpoint(&[DELETE_EMPLOYEE, "17"]).unwrap().as_str(),
            "https://example.com/backend/api/employee/delete-employee/17/"
        );
    }

    #[test]
    fn test_identifier_is_one_segment() {
        let api = EmployeeApi::new("http://localhost/").unwrap();
        assert_eq!(
            api.endpoint(&[UPDATE_EMPLOYEE, "A/7 b"]).unwrap().path(),
            "/api/employee/update-employee/A%2F7%20b/"
        );
    }

    #[test]
    fn test_base_url_is_trimmed_and_parsed() {
        let api = EmployeeApi::new("  https://hr.example.com/directory/ ").unwrap();
        assert_eq!(api.base_url().host_str(), Some("hr.example.com"));
        assert_eq!(api.base_url().path(), "/directory/");
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        assert!(matches!(
            EmployeeApi::new("not a url"),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            EmployeeApi::new("mailto:hr@example.com"),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(EmployeeApi::from_config(&ClientConfig::default()).is_ok());
    }
}
