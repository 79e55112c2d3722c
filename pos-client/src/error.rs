//! Client error types

use reqwest::StatusCode;
use shared::DomainError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("API error ({status}): {message}")]
    Api {
        status: StatusCode,
        /// Server-provided message, or the status text
        message: String,
        /// Parsed JSON error body, when there was one
        payload: Option<serde_json::Value>,
    },

    /// Input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Domain rule violated client-side
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Success body did not match the expected type
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Build an API error from a status and raw response body
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<serde_json::Value>(body).ok();
        let message = payload
            .as_ref()
            .and_then(|p| {
                p.get("message")
                    .or_else(|| p.get("error"))
                    .and_then(|m| m.as_str())
            })
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Self::Api {
            status,
            message,
            payload,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Text suitable for a transient user notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(e) if e.is_timeout() => "The server did not respond in time".to_string(),
            Self::Http(_) => "Could not reach the server".to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Validation(msg) => msg.clone(),
            Self::Domain(e) => e.to_string(),
            Self::InvalidResponse(_) => "Unexpected response from the server".to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();
        Self::Validation(messages.join("; "))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
