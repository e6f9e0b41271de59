//! # Product Records
//!
//! One record per listing, identified by a monotonically increasing id
//! starting at 0. Slots are never compacted and ids are never reused —
//! removal is a logical delete that clears the name and flips the status.
//!
//! ## States
//!
//! ```text
//! Listed ──purchase──▶ Sold     (terminal)
//!    │
//!    └────remove─────▶ Removed  (terminal)
//! ```

use serde::{Deserialize, Serialize};

use veri_core::{Address, Amount, Timestamp};

// ─── Product Id ──────────────────────────────────────────────────────

/// Sequential listing identifier, assigned at listing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product:{}", self.0)
    }
}

// ─── Listing Status ──────────────────────────────────────────────────

/// The lifecycle state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    /// Available for purchase or removal.
    Listed,
    /// Purchased; permanently immutable history (terminal).
    Sold,
    /// Logically deleted by its seller (terminal).
    Removed,
}

impl ListingStatus {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sold | Self::Removed)
    }

    /// Whether the listing is available to act on.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Listed)
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Listed => "LISTED",
            Self::Sold => "SOLD",
            Self::Removed => "REMOVED",
        };
        f.write_str(s)
    }
}

// ─── Product Record ──────────────────────────────────────────────────

/// A product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The slot id, assigned sequentially from 0.
    pub id: ProductId,
    /// Display name; cleared to the empty sentinel on removal.
    pub name: String,
    /// Exact asking price.
    pub price: Amount,
    /// The lister; immutable once set.
    pub seller: Address,
    /// Lifecycle state.
    pub status: ListingStatus,
    /// The purchaser, set exactly once at purchase time.
    pub buyer: Option<Address>,
    /// When the listing was created.
    pub listed_at: Timestamp,
}

impl ProductRecord {
    /// Whether the listing is neither sold nor removed.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether the listing has been sold.
    pub fn is_sold(&self) -> bool {
        self.status == ListingStatus::Sold
    }

    /// Whether the listing has been removed.
    pub fn is_removed(&self) -> bool {
        self.status == ListingStatus::Removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(ListingStatus::Listed.is_active());
        assert!(!ListingStatus::Listed.is_terminal());
        assert!(ListingStatus::Sold.is_terminal());
        assert!(ListingStatus::Removed.is_terminal());
        assert!(!ListingStatus::Sold.is_active());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ListingStatus::Listed.to_string(), "LISTED");
        assert_eq!(ListingStatus::Sold.to_string(), "SOLD");
        assert_eq!(ListingStatus::Removed.to_string(), "REMOVED");
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(0).to_string(), "product:0");
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let record = ProductRecord {
            id: ProductId::new(0),
            name: "Widget".to_string(),
            price: Amount::new(100),
            seller: Address::new("seller"),
            status: ListingStatus::Listed,
            buyer: None,
            listed_at: Timestamp::now(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ProductRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Widget");
        assert_eq!(parsed.status, ListingStatus::Listed);
    }
}
