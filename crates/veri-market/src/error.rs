//! # Marketplace Errors
//!
//! Every rejection is synchronous and fully reverts any work already
//! attempted within the operation — including a settlement failure, which
//! surfaces as `Settlement` with the listing untouched.

use thiserror::Error;

use veri_core::{Address, Amount};
use veri_ledger::LedgerError;

use crate::product::ProductId;

/// Errors that can occur during marketplace operations.
#[derive(Error, Debug)]
pub enum MarketError {
    /// The caller is not a verified seller.
    #[error("caller {caller} is not a verified seller")]
    UnverifiedSeller {
        /// The rejected caller.
        caller: Address,
    },

    /// The caller is not a verified buyer.
    #[error("caller {caller} is not a verified buyer")]
    UnverifiedBuyer {
        /// The rejected caller.
        caller: Address,
    },

    /// No active listing exists under this id.
    #[error("{id} does not exist or has been removed")]
    NotFound {
        /// The unknown or removed id.
        id: ProductId,
    },

    /// The listing has already been sold.
    #[error("{id} has already been sold")]
    AlreadySold {
        /// The sold listing.
        id: ProductId,
    },

    /// The attached payment does not exactly match the asking price.
    #[error("incorrect payment amount: price is {expected}, offered {offered}")]
    IncorrectPayment {
        /// The asking price.
        expected: Amount,
        /// The attached payment.
        offered: Amount,
    },

    /// Only the listing seller may remove it.
    #[error("caller {caller} does not own {id}")]
    NotOwner {
        /// The rejected caller.
        caller: Address,
        /// The listing in question.
        id: ProductId,
    },

    /// Listings must carry a price greater than zero.
    #[error("listing price must be greater than zero")]
    InvalidPrice,

    /// Payment settlement failed; the whole purchase rolled back.
    #[error("settlement failed: {0}")]
    Settlement(#[from] LedgerError),
}
