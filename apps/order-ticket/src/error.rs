//! Structured errors for the order ticket boundary.
//!
//! Layer errors (`OrderError`, `ConfigError`, `DomainError`) are converted
//! into a `TicketError` carrying a stable code and key-value context, which
//! the binary reports as JSON.
//!
//! # Codes
//!
//! | Code | Usage |
//! |------|-------|
//! | `MISSING_ACCOUNT` | No linked account on the order |
//! | `INVALID_ORDER` | Local validation failed |
//! | `AUTHENTICATION_REQUIRED` | Broker rejected credentials or the session expired |
//! | `ORDER_REJECTED` | Broker rejected the request |
//! | `TRANSPORT_ERROR` | Network failure or unreadable broker response |
//! | `CONFIG_ERROR` | Configuration could not be loaded |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::order_ticket::{OrderError, TransportError};
use crate::domain::shared::DomainError;

/// Error codes for the order ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No linked account is set.
    MissingAccount,
    /// Order fields failed validation.
    InvalidOrder,
    /// The broker link must be reauthenticated.
    AuthenticationRequired,
    /// Broker rejected the order request.
    OrderRejected,
    /// Network failure or unexpected broker response.
    TransportError,
    /// Configuration could not be loaded or validated.
    ConfigError,
}

impl ErrorCode {
    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingAccount => "MISSING_ACCOUNT",
            Self::InvalidOrder => "INVALID_ORDER",
            Self::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
            Self::OrderRejected => "ORDER_REJECTED",
            Self::TransportError => "TRANSPORT_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Returns true if the failure was detected before any broker call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingAccount | Self::InvalidOrder | Self::ConfigError
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A coded error with context.
#[derive(Debug, Error)]
pub struct TicketError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl TicketError {
    /// Create a new error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Convert to a serializable response body.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            details: self.context.iter().cloned().collect(),
        }
    }
}

impl std::fmt::Display for TicketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// Serializable error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Additional details.
    pub details: HashMap<String, String>,
}

impl From<TransportError> for TicketError {
    fn from(err: TransportError) -> Self {
        let code = match &err {
            TransportError::Authentication { .. } | TransportError::SessionExpired { .. } => {
                ErrorCode::AuthenticationRequired
            }
            TransportError::Rejected { .. } => ErrorCode::OrderRejected,
            TransportError::Connection { .. } | TransportError::Unexpected { .. } => {
                ErrorCode::TransportError
            }
        };

        let fields = err.error_fields().join(",");
        let error = Self::new(code, err.message());
        if fields.is_empty() {
            error
        } else {
            error.with_context("error_fields", fields)
        }
    }
}

impl From<OrderError> for TicketError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::MissingAccount => Self::new(ErrorCode::MissingAccount, err.to_string()),
            OrderError::InvalidOrder { field, message } => {
                Self::new(ErrorCode::InvalidOrder, message).with_context("field", field)
            }
            OrderError::Transport(transport) => transport.into(),
        }
    }
}

impl From<DomainError> for TicketError {
    fn from(err: DomainError) -> Self {
        OrderError::from(err).into()
    }
}

impl From<ConfigError> for TicketError {
    fn from(err: ConfigError) -> Self {
        let error = Self::new(ErrorCode::ConfigError, err.to_string());
        match err {
            ConfigError::ReadError { path, .. } => error.with_context("path", path),
            ConfigError::ParseError(_) | ConfigError::ValidationError(_) => error,
        }
    }
}
