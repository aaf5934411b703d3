//! Points Value Object
//!
//! Score awarded for a fully correct answer.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Points for a question, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Points(u8);

impl Points {
    pub const DEFAULT: Points = Points(1);
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::PointsOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Points {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Points {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Points> for u8 {
    fn from(p: Points) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        assert_eq!(Points::new(1).unwrap().value(), 1);
        assert_eq!(Points::new(100).unwrap().value(), 100);
    }

    #[test]
    fn test_out_of_range() {
        for value in [-1, 0, 101, 256, i64::MIN, i64::MAX] {
            assert!(
                matches!(
                    Points::new(value),
                    Err(ValidationError::PointsOutOfRange { .. })
                ),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(Points::default().value(), 1);
    }
}
