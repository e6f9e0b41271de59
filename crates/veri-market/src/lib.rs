//! # veri-market — Identity-Gated Marketplace
//!
//! The marketplace stores product listings and lets only authorized parties
//! act on them: verified sellers list, verified buyers purchase, and a
//! purchase moves payment and flips ownership as one indivisible unit.
//!
//! ## Components
//!
//! - **Products** (`product.rs`): `ProductRecord` and its `ListingStatus`
//!   state machine — `Listed → Sold` or `Listed → Removed`, both terminal.
//!
//! - **Marketplace** (`marketplace.rs`): the transactional operation surface.
//!   Authorization resolves through the injected [`IdentityLookup`] handle;
//!   payment settles through the [`SettlementLedger`] passed alongside each
//!   purchase request.
//!
//! ## The Load-Bearing Invariant
//!
//! `purchase_product` validates every precondition, then settles funds, then
//! mutates the record. The record mutation is infallible, so a settlement
//! failure aborts the whole operation with state byte-identical to before
//! the call — never a sold product without moved funds, never moved funds
//! without a sold product.

pub mod error;
pub mod event;
pub mod marketplace;
pub mod product;

pub use error::MarketError;
pub use event::MarketEvent;
pub use marketplace::Marketplace;
pub use product::{ListingStatus, ProductId, ProductRecord};

pub use veri_identity::IdentityLookup;
pub use veri_ledger::SettlementLedger;
