//! Linked brokers and accounts.
//!
//! A linked broker is a broker login; each login exposes one or more
//! accounts. The broker keeps the last transport error so the caller can
//! prompt the user to relink when a session goes stale.

use std::sync::{Arc, PoisonError, RwLock};

use super::errors::TransportError;
use crate::domain::shared::AccountNumber;

/// A broker login shared by its accounts.
#[derive(Debug, Default)]
pub struct LinkedBroker {
    name: String,
    last_error: RwLock<Option<TransportError>>,
}

impl LinkedBroker {
    /// Create a broker link with no recorded error.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_error: RwLock::new(None),
        }
    }

    /// Broker display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record the most recent transport error for this broker.
    pub fn record_error(&self, error: TransportError) {
        let mut slot = self.last_error.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(error);
    }

    /// Most recently recorded transport error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<TransportError> {
        self.last_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear the recorded error, e.g. after the user relinks.
    pub fn clear_error(&self) {
        let mut slot = self.last_error.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    /// Returns true if the recorded error asks for reauthentication.
    #[must_use]
    pub fn needs_relink(&self) -> bool {
        self.last_error()
            .is_some_and(|err| err.requires_reauthentication())
    }
}

/// A brokerage account under a linked broker.
#[derive(Debug, Clone)]
pub struct LinkedAccount {
    account_number: AccountNumber,
    name: String,
    broker: Arc<LinkedBroker>,
}

impl LinkedAccount {
    /// Create an account under `broker`.
    #[must_use]
    pub fn new(
        account_number: impl Into<AccountNumber>,
        name: impl Into<String>,
        broker: Arc<LinkedBroker>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            name: name.into(),
            broker,
        }
    }

    /// Broker account number.
    #[must_use]
    pub const fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    /// Account display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent broker link.
    #[must_use]
    pub const fn broker(&self) -> &Arc<LinkedBroker> {
        &self.broker
    }
}
