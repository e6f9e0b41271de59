//! # Currency Amounts
//!
//! `Amount` is a quantity of native currency units. It wraps a `u64` and
//! exposes only checked arithmetic — balance updates that would underflow or
//! overflow surface as `None` for the caller to turn into a structured error,
//! never as silent wraparound.

use serde::{Deserialize, Serialize};

/// A quantity of native currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from raw units.
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// The raw unit count.
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Whether this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction; `None` on underflow.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add() {
        assert_eq!(
            Amount::new(40).checked_add(Amount::new(2)),
            Some(Amount::new(42))
        );
        assert_eq!(Amount::new(u64::MAX).checked_add(Amount::new(1)), None);
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(
            Amount::new(42).checked_sub(Amount::new(2)),
            Some(Amount::new(40))
        );
        assert_eq!(Amount::new(1).checked_sub(Amount::new(2)), None);
    }

    #[test]
    fn test_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Amount::new(1) < Amount::new(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(100).to_string(), "100");
    }

    #[test]
    fn test_serde_roundtrip() {
        let amount = Amount::new(100);
        let json = serde_json::to_string(&amount).unwrap();
        let parsed: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, parsed);
    }
}
