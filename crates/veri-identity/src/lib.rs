//! # veri-identity — Participant Identity Registry
//!
//! The registry is the leaf component of the stack: it stores one identity
//! record per participant address and owns the admin-transferable
//! verification bit that gates marketplace participation.
//!
//! ## Components
//!
//! - **Records** (`record.rs`): `IdentityRecord`, the `Role` enum, and the
//!   `UserDetails` read snapshot returned for any address — registered or not.
//!
//! - **Registry** (`registry.rs`): `IdentityRegistry`, the transactional
//!   state machine over the record table and the admin authority. Every
//!   rejection leaves state untouched.
//!
//! - **Lookup** (`lookup.rs`): the `IdentityLookup` seam trait. The
//!   marketplace authorizes callers through this trait, so tests can
//!   substitute a canned directory for the real registry.
//!
//! ## Authorization Model
//!
//! Exactly one admin address exists at any time. Only the admin can flip a
//! record's `verified` bit or hand the authority to a successor. Unverified
//! participants can register and be read, but cannot act in the marketplace.

pub mod error;
pub mod event;
pub mod lookup;
pub mod record;
pub mod registry;

pub use error::RegistryError;
pub use event::RegistryEvent;
pub use lookup::IdentityLookup;
pub use record::{IdentityRecord, Role, UserDetails};
pub use registry::IdentityRegistry;
