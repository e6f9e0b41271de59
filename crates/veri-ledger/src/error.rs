//! # Ledger Errors
//!
//! A failed ledger operation mutates nothing: both error variants are
//! detected before the first balance write.

use thiserror::Error;

use veri_core::{Address, Amount};

/// Errors that can occur during ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The debited address does not hold the required amount.
    #[error("insufficient funds for {address}: required {required}, available {available}")]
    InsufficientFunds {
        /// The debited address.
        address: Address,
        /// The amount the operation needed.
        required: Amount,
        /// The amount actually held.
        available: Amount,
    },

    /// Crediting the address would overflow its balance.
    #[error("balance overflow crediting {address}")]
    BalanceOverflow {
        /// The credited address.
        address: Address,
    },
}
