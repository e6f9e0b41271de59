//! # Registry Errors
//!
//! Every rejection is synchronous and leaves the registry untouched. Retry,
//! if any, belongs to the external caller.

use thiserror::Error;

use veri_core::Address;

/// Errors that can occur during identity registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The id number is already held by another address.
    #[error("id number {id_number:?} is already registered")]
    DuplicateId {
        /// The colliding id number.
        id_number: String,
    },

    /// The caller already holds an identity record.
    #[error("address {address} is already registered")]
    AlreadyRegistered {
        /// The re-registering address.
        address: Address,
    },

    /// The operation is restricted to the current admin.
    #[error("only the admin may perform this action (caller: {caller})")]
    NotAdmin {
        /// The rejected caller.
        caller: Address,
    },

    /// The target address has no identity record.
    #[error("address {address} has no identity record")]
    NotRegistered {
        /// The unknown address.
        address: Address,
    },

    /// The zero address cannot receive admin authority.
    #[error("the zero address cannot hold admin authority")]
    InvalidAddress,
}
