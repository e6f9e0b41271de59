//! # Identity Records
//!
//! One `IdentityRecord` per registered address. `name`, `id_number`, and
//! `role` are immutable after registration; only the `verified` bit changes,
//! and only through the admin-gated registry operation.

use serde::{Deserialize, Serialize};

use veri_core::Timestamp;

// ─── Role ────────────────────────────────────────────────────────────

/// The declared role of a participant.
///
/// Discriminants are fixed: they are the wire encoding external callers
/// submit at registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Role {
    /// Participant with no trading role.
    #[default]
    Other = 0,
    /// May purchase listed products once verified.
    Buyer = 1,
    /// May list products once verified.
    Seller = 2,
}

impl Role {
    /// The numeric wire encoding.
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Other => "OTHER",
            Self::Buyer => "BUYER",
            Self::Seller => "SELLER",
        };
        f.write_str(s)
    }
}

// ─── Identity Record ─────────────────────────────────────────────────

/// A participant's identity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Display name, free text, set once at registration.
    pub name: String,
    /// Globally unique identity document number.
    pub id_number: String,
    /// Whether the admin has verified this participant.
    pub verified: bool,
    /// Declared role, immutable after registration.
    pub role: Role,
    /// When the record was created.
    pub registered_at: Timestamp,
}

// ─── Read Snapshot ───────────────────────────────────────────────────

/// The read snapshot returned for any address.
///
/// Unregistered addresses resolve to the default snapshot (empty strings,
/// unverified, `Role::Other`) rather than an error — reads never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    /// Display name, empty if unregistered.
    pub name: String,
    /// Identity document number, empty if unregistered.
    pub id_number: String,
    /// Whether the participant is verified.
    pub verified: bool,
    /// Declared role, `Other` if unregistered.
    pub role: Role,
}

impl UserDetails {
    /// Whether this participant may list products.
    pub fn verified_seller(&self) -> bool {
        self.verified && self.role == Role::Seller
    }

    /// Whether this participant may purchase products.
    pub fn verified_buyer(&self) -> bool {
        self.verified && self.role == Role::Buyer
    }
}

impl From<&IdentityRecord> for UserDetails {
    fn from(record: &IdentityRecord) -> Self {
        Self {
            name: record.name.clone(),
            id_number: record.id_number.clone(),
            verified: record.verified,
            role: record.role,
        }
    }
}
