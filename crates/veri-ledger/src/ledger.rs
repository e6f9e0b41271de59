//! # In-Memory Ledger
//!
//! Per-address balance table. `transfer` validates the debit and the credit
//! before writing either side, so a failure cannot leave a debit without its
//! matching credit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use veri_core::{Address, Amount};

use crate::error::LedgerError;
use crate::traits::SettlementLedger;

/// The in-memory settlement ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    balances: HashMap<Address, Amount>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sum of all balances.
    ///
    /// Widened to `u128` so the sum itself cannot overflow.
    pub fn total_supply(&self) -> u128 {
        self.balances
            .values()
            .map(|amount| u128::from(amount.units()))
            .sum()
    }
}

impl SettlementLedger for Ledger {
    fn balance(&self, address: &Address) -> Amount {
        self.balances.get(address).copied().unwrap_or(Amount::ZERO)
    }

    fn deposit(&mut self, address: &Address, amount: Amount) -> Result<(), LedgerError> {
        let credited =
            self.balance(address)
                .checked_add(amount)
                .ok_or_else(|| LedgerError::BalanceOverflow {
                    address: address.clone(),
                })?;
        self.balances.insert(address.clone(), credited);
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance(from);
        let debited =
            available
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::InsufficientFunds {
                    address: from.clone(),
                    required: amount,
                    available,
                })?;

        // Self-transfer: the debit is validated, the net movement is zero.
        if from == to {
            return Ok(());
        }

        let credited =
            self.balance(to)
                .checked_add(amount)
                .ok_or_else(|| LedgerError::BalanceOverflow {
                    address: to.clone(),
                })?;

        // Both sides validated; commit is infallible from here.
        self.balances.insert(from.clone(), debited);
        self.balances.insert(to.clone(), credited);
        debug!(%from, %to, %amount, "transfer settled");
        Ok(())
    }
}
