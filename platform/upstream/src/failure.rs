use reqwest::StatusCode;
use thiserror::Error;

/// Raw outcome of a failed upstream call: HTTP status when one was
/// received, the upstream body when readable, and the low-level message.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct TransportFailure {
    pub status: Option<u16>,
    pub body: Option<String>,
    pub message: String,
}

impl TransportFailure {
    pub fn from_status(status: StatusCode, body: String) -> Self {
        Self {
            status: Some(status.as_u16()),
            body: Some(body),
            message: format!("upstream responded with {status}"),
        }
    }

    pub fn from_transport(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|status| status.as_u16()),
            body: None,
            message: err.to_string(),
        }
    }

    pub fn invalid_body(status: StatusCode, body: String, err: serde_json::Error) -> Self {
        Self {
            status: Some(status.as_u16()),
            body: Some(body),
            message: format!("upstream body is not valid JSON: {err}"),
        }
    }
}
