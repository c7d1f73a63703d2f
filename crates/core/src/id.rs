//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stored character.
///
/// Assigned by the store from a monotonically increasing sequence starting at
/// zero; never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(u64);

impl CharacterId {
    /// The first identifier handed out by a fresh store.
    pub const FIRST: CharacterId = CharacterId(0);

    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The identifier following this one in the sequence.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for CharacterId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<CharacterId> for u64 {
    fn from(value: CharacterId) -> Self {
        value.0
    }
}

impl FromStr for CharacterId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = u64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("CharacterId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        let id: CharacterId = "42".parse().unwrap();
        assert_eq!(id.as_u64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<CharacterId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("CharacterId")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn next_is_monotonic() {
        assert_eq!(CharacterId::FIRST.next(), CharacterId::from_u64(1));
    }
}
