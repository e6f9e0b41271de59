//! # Registry Events
//!
//! Observable record of every successful registry transition, appended to
//! the registry's event log for monitoring collaborators to drain or replay.

use serde::{Deserialize, Serialize};

use veri_core::{Address, Timestamp};

use crate::record::Role;

/// An observable registry state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A participant registered a new identity record.
    UserRegistered {
        /// The registering address.
        address: Address,
        /// The declared role.
        role: Role,
        /// When the registration committed.
        at: Timestamp,
    },

    /// The admin verified a participant.
    UserVerified {
        /// The verified address.
        address: Address,
        /// When the verification committed.
        at: Timestamp,
    },

    /// Admin authority moved to a new holder.
    AdminTransferred {
        /// The outgoing admin.
        previous: Address,
        /// The incoming admin.
        new_admin: Address,
        /// When the transfer committed.
        at: Timestamp,
    },
}
