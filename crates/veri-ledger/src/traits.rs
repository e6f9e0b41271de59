//! # Settlement Seam
//!
//! `SettlementLedger` is the interface the marketplace settles purchases
//! through. The contract every implementation must honor: `transfer` moves
//! the full amount or nothing — a returned error means neither balance
//! changed.

use veri_core::{Address, Amount};

use crate::error::LedgerError;

/// Balance storage with atomic transfers.
pub trait SettlementLedger {
    /// The balance held by `address`; zero for unknown addresses.
    fn balance(&self, address: &Address) -> Amount;

    /// Credit `amount` to `address`.
    fn deposit(&mut self, address: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Move `amount` from `from` to `to` as one indivisible step.
    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount)
        -> Result<(), LedgerError>;
}
