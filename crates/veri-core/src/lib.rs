//! # veri-core — Foundational Types for the Veritrade Stack
//!
//! This crate is the bedrock of the Veritrade stack. It defines the
//! type-system primitives shared by the identity registry, the settlement
//! ledger, and the marketplace. Every other crate in the workspace depends
//! on `veri-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address`, `Amount`,
//!    `Timestamp` — no bare strings for participants, no bare integers for
//!    money.
//!
//! 2. **Integer-only amounts.** `Amount` wraps a `u64` of native currency
//!    units with checked arithmetic. Floats never represent money.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so every event renders deterministically.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `veri-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod address;
pub mod amount;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use address::Address;
pub use amount::Amount;
pub use temporal::{Timestamp, TimestampError};
