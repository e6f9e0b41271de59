//! # The Identity Lookup Seam
//!
//! The marketplace authorizes callers through `IdentityLookup` rather than
//! against `IdentityRegistry` directly. The trait is the injection seam:
//! production wires in a shared handle to the real registry, tests wire in
//! a canned directory.

use std::sync::{Arc, PoisonError, RwLock};

use veri_core::Address;

use crate::record::UserDetails;
use crate::registry::IdentityRegistry;

/// Read-only identity resolution.
///
/// Implementations must be total: unknown addresses resolve to the default
/// (unverified) snapshot, never an error.
pub trait IdentityLookup {
    /// Read snapshot for `address`; defaults if unregistered.
    fn user_details(&self, address: &Address) -> UserDetails;
}

impl IdentityLookup for IdentityRegistry {
    fn user_details(&self, address: &Address) -> UserDetails {
        IdentityRegistry::user_details(self, address)
    }
}

impl<T: IdentityLookup + ?Sized> IdentityLookup for &T {
    fn user_details(&self, address: &Address) -> UserDetails {
        (**self).user_details(address)
    }
}

/// Shared-handle form: the marketplace holds the registry behind
/// `Arc<RwLock<_>>` so admin operations can keep mutating it between
/// marketplace calls.
///
/// A poisoned lock still serves reads — the snapshot is a plain copy and a
/// writer that panicked cannot leave a torn record behind the lock.
impl<T: IdentityLookup> IdentityLookup for Arc<RwLock<T>> {
    fn user_details(&self, address: &Address) -> UserDetails {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .user_details(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Role;

    #[test]
    fn test_registry_implements_lookup() {
        let mut reg = IdentityRegistry::new(Address::new("admin"));
        reg.register(&Address::new("alice"), "Alice", "ID1", Role::Seller)
            .unwrap();

        let lookup: &dyn IdentityLookup = &reg;
        assert_eq!(lookup.user_details(&Address::new("alice")).role, Role::Seller);
        assert_eq!(
            lookup.user_details(&Address::new("ghost")),
            UserDetails::default()
        );
    }

    #[test]
    fn test_shared_handle_sees_later_mutations() {
        let reg = Arc::new(RwLock::new(IdentityRegistry::new(Address::new("admin"))));
        let handle = reg.clone();

        assert!(!handle.user_details(&Address::new("alice")).verified);

        {
            let mut guard = reg.write().unwrap();
            guard
                .register(&Address::new("alice"), "Alice", "ID1", Role::Buyer)
                .unwrap();
            guard
                .verify_user(&Address::new("admin"), &Address::new("alice"))
                .unwrap();
        }

        assert!(handle.user_details(&Address::new("alice")).verified_buyer());
    }
}
