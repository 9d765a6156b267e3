//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are integer primary keys assigned by the storage layer.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a planet row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanetId(i64);

/// Identifier of a scientist row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScientistId(i64);

/// Identifier of a mission row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionId(i64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = i64::from_str(s.trim())
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(PlanetId, "PlanetId");
impl_int_newtype!(ScientistId, "ScientistId");
impl_int_newtype!(MissionId, "MissionId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!("42".parse::<PlanetId>().unwrap(), PlanetId::new(42));
        assert_eq!(" 7 ".parse::<MissionId>().unwrap().get(), 7);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<ScientistId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ScientistId")),
            _ => panic!("Expected InvalidId error"),
        }
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&PlanetId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: PlanetId = serde_json::from_str("3").unwrap();
        assert_eq!(back, PlanetId::new(3));
    }
}
