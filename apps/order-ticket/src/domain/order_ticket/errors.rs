//! Order ticket errors.

use thiserror::Error;

use crate::domain::shared::DomainError;

/// Error reported by the broker transport.
///
/// Carried through the core untouched; the core never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Broker credentials were rejected.
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Broker message.
        message: String,
    },

    /// Broker session token is no longer valid.
    #[error("Session expired: {message}")]
    SessionExpired {
        /// Broker message.
        message: String,
    },

    /// Broker rejected the order request.
    #[error("Order rejected: {message}")]
    Rejected {
        /// Broker message.
        message: String,
        /// Request fields the broker flagged (e.g. `symbol`, `quantity`).
        error_fields: Vec<String>,
    },

    /// Network or HTTP failure before a broker response was read.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Response the transport could not interpret.
    #[error("Unexpected broker response: {message}")]
    Unexpected {
        /// Error message.
        message: String,
    },
}

impl TransportError {
    /// Returns true if the user must relink or reauthenticate the broker.
    #[must_use]
    pub const fn requires_reauthentication(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::SessionExpired { .. })
    }

    /// Request fields the broker flagged as invalid.
    #[must_use]
    pub fn error_fields(&self) -> &[String] {
        match self {
            Self::Rejected { error_fields, .. } => error_fields,
            _ => &[],
        }
    }

    /// Broker or transport message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message }
            | Self::SessionExpired { message }
            | Self::Rejected { message, .. }
            | Self::Connection { message }
            | Self::Unexpected { message } => message,
        }
    }
}

/// Errors surfaced by the preview and place operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// No linked account is set on the order.
    #[error("A linked broker account must be set before you preview an order.")]
    MissingAccount,

    /// Order fields cannot be turned into a valid request.
    #[error("Invalid order: {field}: {message}")]
    InvalidOrder {
        /// First failing field.
        field: String,
        /// Error message.
        message: String,
    },

    /// The broker transport reported a failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl OrderError {
    /// Shorthand for an `InvalidOrder` error.
    #[must_use]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOrder {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true for failures detected locally before any network call.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingAccount | Self::InvalidOrder { .. })
    }

    /// Transport error, if this failure came from the broker.
    #[must_use]
    pub const fn transport(&self) -> Option<&TransportError> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for OrderError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => Self::InvalidOrder { field, message },
        }
    }
}
