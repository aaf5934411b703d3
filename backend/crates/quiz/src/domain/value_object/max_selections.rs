//! Max Selections Value Object
//!
//! Upper bound on how many choices may be picked together.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct MaxSelections(u32);

impl MaxSelections {
    pub const DEFAULT: MaxSelections = MaxSelections(1);
    pub const MIN: u32 = 1;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match u32::try_from(value) {
            Ok(v) if v >= Self::MIN => Ok(Self(v)),
            _ => Err(ValidationError::MaxSelectionsOutOfRange {
                value,
                min: Self::MIN,
            }),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Whether `count` selected choices fit under the limit
    pub fn allows(&self, count: usize) -> bool {
        u32::try_from(count).is_ok_and(|c| c <= self.0)
    }
}

impl Default for MaxSelections {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for MaxSelections {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaxSelections> for u32 {
    fn from(m: MaxSelections) -> Self {
        m.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(MaxSelections::new(0).is_err());
        assert!(MaxSelections::new(-3).is_err());
        assert!(MaxSelections::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_allows() {
        let max = MaxSelections::new(2).unwrap();
        assert!(max.allows(0));
        assert!(max.allows(2));
        assert!(!max.allows(3));
    }
}
