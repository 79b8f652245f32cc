//! Error types for the directory client.

use serde_json::Value;

/// Result type alias for directory client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the directory backend.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The configured base URL cannot have endpoint paths joined onto it.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// No response was received (DNS, connection refused, CORS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend rejected the request with status {status}")]
    Rejected { status: u16, body: Option<Value> },

    /// The backend answered with a success status other than the one expected.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    /// A success response whose body could not be decoded.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl Error {
    /// Build a [`Error::Rejected`] from a failed response, keeping its JSON body if any.
    pub(crate) async fn rejected(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(text) => serde_json::from_str(&text).ok(),
            Err(e) => {
                tracing::warn!("could not read error body: {e}");
                None
            }
        };
        Error::Rejected { status, body }
    }

    /// True when no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Key/message pairs from a rejection body shaped as a JSON object.
    ///
    /// Values may be a string or a list of strings (Django REST framework style); lists
    /// are joined with a space. Anything other than an object yields an empty list.
    pub fn field_messages(&self) -> Vec<(String, String)> {
        let Error::Rejected {
            body: Some(Value::Object(map)),
            ..
        } = self
        else {
            return Vec::new();
        };

        map.iter()
            .map(|(key, value)| (key.clone(), flatten_message(value)))
            .filter(|(_, message)| !message.is_empty())
            .collect()
    }
}

fn flatten_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_message)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
