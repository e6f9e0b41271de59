//! # Marketplace Events
//!
//! Observable record of every successful marketplace transition, appended
//! to the marketplace's event log for monitoring collaborators.

use serde::{Deserialize, Serialize};

use veri_core::{Address, Amount, Timestamp};

use crate::product::ProductId;

/// An observable marketplace state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A seller listed a new product.
    ProductListed {
        /// The assigned listing id.
        id: ProductId,
        /// The listing seller.
        seller: Address,
        /// The asking price.
        price: Amount,
        /// When the listing committed.
        at: Timestamp,
    },

    /// A buyer purchased a product; payment settled in the same step.
    ProductPurchased {
        /// The purchased listing.
        id: ProductId,
        /// The purchaser.
        buyer: Address,
        /// The paid seller.
        seller: Address,
        /// The settled price.
        price: Amount,
        /// When the purchase committed.
        at: Timestamp,
    },

    /// A seller removed an unsold listing.
    ProductRemoved {
        /// The removed listing.
        id: ProductId,
        /// The removing seller.
        seller: Address,
        /// When the removal committed.
        at: Timestamp,
    },
}
