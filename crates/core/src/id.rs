//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a user record.
///
/// Wraps the store-assigned sequential integer. Parsing is strict: anything
/// that is not a base-10 integer is rejected, never coerced to zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = i64::from_str(s).map_err(|e| DomainError::invalid_id(format!("UserId: {e}")))?;
        Ok(Self(value))
    }
}
