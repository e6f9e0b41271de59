//! # Participant Addresses
//!
//! `Address` identifies every participant in the system: registrants,
//! sellers, buyers, and the admin. The execution environment authenticates
//! callers and supplies their address to each state-changing operation —
//! an address here is an opaque, already-authenticated handle, not a key.
//!
//! ## The Zero Address
//!
//! The empty string is the zero-address sentinel. It is deliberately
//! representable — operations that must reject it (admin transfer) validate
//! explicitly and fail with a structured error instead of making the state
//! unconstructible.

use serde::{Deserialize, Serialize};

/// An opaque participant address.
///
/// Ordered and hashable so it can key balance and record tables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create an address from its string form.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// The zero address — never a legitimate participant.
    pub fn zero() -> Self {
        Self(String::new())
    }

    /// Whether this is the zero address.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
