//! Errors produced while talking to the gateway

use super::notification::Severity;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response reached us
    #[error("Network error: could not reach server ({0})")]
    Network(String),

    /// The browser reports no connectivity; nothing was sent
    #[error("No internet connection")]
    Offline,

    /// 400, which the sales endpoint uses for insufficient stock
    #[error("{}", .message.as_deref().unwrap_or("Bad request"))]
    BadRequest { message: Option<String> },

    /// 422, server-side validation
    #[error("{}", .message.as_deref().unwrap_or("Validation error"))]
    Unprocessable { message: Option<String> },

    #[error("Request failed: {status}")]
    Client { status: u16, message: Option<String> },

    #[error("Server error: {status}")]
    Server { status: u16 },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to build request: {0}")]
    Request(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-success response; `body` is scanned for a `message` field
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        match status {
            400 => ApiError::BadRequest { message },
            422 => ApiError::Unprocessable { message },
            500..=599 => ApiError::Server { status },
            _ => ApiError::Client { status, message },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest { .. } => Some(400),
            ApiError::Unprocessable { .. } => Some(422),
            ApiError::Client { status, .. } | ApiError::Server { status } => Some(*status),
            _ => None,
        }
    }

    /// Message the server sent along with the error, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest { message }
            | ApiError::Unprocessable { message }
            | ApiError::Client { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ApiError::Unprocessable { .. } | ApiError::Offline => Severity::Warning,
            _ => Severity::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(
            ApiError::from_status(400, r#"{"message":"Not enough stock"}"#),
            ApiError::BadRequest {
                message: Some("Not enough stock".to_string())
            }
        );
        assert_eq!(
            ApiError::from_status(422, "not json"),
            ApiError::Unprocessable { message: None }
        );
        assert_eq!(ApiError::from_status(503, ""), ApiError::Server { status: 503 });
        assert_eq!(
            ApiError::from_status(404, "{}"),
            ApiError::Client {
                status: 404,
                message: None
            }
        );
    }

    #[test]
    fn test_severity_and_status() {
        assert_eq!(ApiError::from_status(422, "").severity(), Severity::Warning);
        assert_eq!(ApiError::from_status(500, "").severity(), Severity::Danger);
        assert_eq!(ApiError::Network("timeout".into()).status(), None);
        assert_eq!(ApiError::from_status(418, "").status(), Some(418));
    }

    #[test]
    fn display_prefers_server_message() {
        let err = ApiError::from_status(400, r#"{"message":"Only 2 left"}"#);
        assert_eq!(err.to_string(), "Only 2 left");
        assert_eq!(ApiError::from_status(400, "").to_string(), "Bad request");
    }
}
