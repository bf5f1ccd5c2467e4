//! Order expiration (time in force).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// How long a resting order stays working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Expiration {
    /// Valid for the current trading day only.
    #[default]
    GoodForDay,
    /// Good until canceled (broker-specific limit).
    GoodUntilCanceled,
}

impl Expiration {
    /// All expirations in ticket display order.
    pub const ALL: [Self; 2] = [Self::GoodForDay, Self::GoodUntilCanceled];

    /// Wire name used by the broker API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoodForDay => "GOOD_FOR_DAY",
            Self::GoodUntilCanceled => "GOOD_UNTIL_CANCELED",
        }
    }

    /// Short code used in broker order requests.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::GoodForDay => "day",
            Self::GoodUntilCanceled => "gtc",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GoodForDay => "Good for day",
            Self::GoodUntilCanceled => "Good until canceled",
        }
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expiration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|expiration| {
                expiration.as_str().eq_ignore_ascii_case(s) || expiration.code().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| DomainError::invalid("expiration", format!("Unknown expiration: {s}")))
    }
}
