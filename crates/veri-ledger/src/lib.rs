//! # veri-ledger — Settlement Ledger
//!
//! Models the payment that the execution environment attaches to a purchase
//! call as an explicit collaborator: the marketplace receives a ledger
//! alongside each purchase request and asks it to move funds.
//!
//! ## Components
//!
//! - **Trait** (`traits.rs`): `SettlementLedger`, the seam the marketplace
//!   settles through. Tests substitute implementations whose `transfer`
//!   fails on demand to prove the marketplace rolls back.
//!
//! - **Ledger** (`ledger.rs`): the in-memory implementation. `transfer`
//!   validates both sides before touching either balance — it either moves
//!   the full amount or changes nothing.
//!
//! ## Conservation Invariant
//!
//! `transfer` never changes the sum of all balances; only `deposit` mints.
//! The property tests in `ledger.rs` drive random operation sequences
//! against this invariant.

pub mod error;
pub mod ledger;
pub mod traits;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use traits::SettlementLedger;
