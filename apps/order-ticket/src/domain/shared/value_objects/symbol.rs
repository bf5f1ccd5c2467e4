//! Symbol value object for tradeable instruments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A trading symbol (equity ticker or currency pair).
///
/// Examples:
/// - Equity: "AAPL", "BRK.B"
/// - FX: "EUR/USD"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed and normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case_and_whitespace() {
        let s = Symbol::new(" aapl ");
        assert_eq!(s.as_str(), "AAPL");
    }

    #[test]
    fn symbol_keeps_broker_formats() {
        assert_eq!(Symbol::new("brk.b").as_str(), "BRK.B");
        assert_eq!(Symbol::new("eur/usd").as_str(), "EUR/USD");
        assert_eq!(Symbol::new("^vix").as_str(), "^VIX");
    }

    #[test]
    fn symbol_blank_is_empty() {
        assert!(Symbol::new("   ").as_str().is_empty());
    }

    #[test]
    fn symbol_serde_roundtrip() {
        let s = Symbol::new("AAPL");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"AAPL\"");

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }
}
