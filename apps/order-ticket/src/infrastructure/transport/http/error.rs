//! EMS transport error types.

use thiserror::Error;

use super::api_types::EmsErrorResponse;
use crate::application::ports::TransportError;

/// Errors from the EMS HTTP transport.
#[derive(Debug, Error, Clone)]
pub enum EmsError {
    /// HTTP request failed or returned a non-JSON error status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// API returned an error response.
    #[error("API error {code}: {message}")]
    Api {
        /// Numeric error code.
        code: i64,
        /// Short and long messages joined.
        message: String,
        /// Request fields the broker flagged.
        error_fields: Vec<String>,
    },

    /// API key or session token missing.
    #[error("Missing API credentials")]
    MissingCredentials,

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Response status other than the one expected.
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(String),
}

impl EmsError {
    /// Build an `Api` error from an error response body.
    #[must_use]
    pub fn from_response(response: EmsErrorResponse) -> Self {
        let mut parts: Vec<String> = response.short_message.into_iter().collect();
        parts.extend(response.long_messages.unwrap_or_default());

        let message = if parts.is_empty() {
            "Unknown error".to_string()
        } else {
            parts.join(" ")
        };

        Self::Api {
            code: response.code.unwrap_or_default(),
            message,
            error_fields: response.error_fields.unwrap_or_default(),
        }
    }
}

/// How the broker's numeric error codes are understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCategory {
    Authentication,
    SessionExpired,
    Rejected,
    Other,
}

/// Categorize an EMS error code.
const fn categorize_code(code: i64) -> ErrorCategory {
    match code {
        300 | 700 | 800 => ErrorCategory::Authentication,
        600 => ErrorCategory::SessionExpired,
        200 | 400 | 500 => ErrorCategory::Rejected,
        _ => ErrorCategory::Other,
    }
}

impl From<EmsError> for TransportError {
    fn from(err: EmsError) -> Self {
        match err {
            EmsError::Http(message) => Self::Connection { message },
            EmsError::Api {
                code,
                message,
                error_fields,
            } => match categorize_code(code) {
                ErrorCategory::Authentication => Self::Authentication { message },
                ErrorCategory::SessionExpired => Self::SessionExpired { message },
                ErrorCategory::Rejected => Self::Rejected {
                    message,
                    error_fields,
                },
                ErrorCategory::Other => Self::Unexpected {
                    message: format!("{code}: {message}"),
                },
            },
            EmsError::MissingCredentials => Self::Authentication {
                message: "Missing API credentials".to_string(),
            },
            EmsError::JsonParse(message) | EmsError::UnexpectedStatus(message) => {
                Self::Unexpected { message }
            }
        }
    }
}
