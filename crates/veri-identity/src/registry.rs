//! # Identity Registry
//!
//! The registry is a transactional state machine over two pieces of state:
//! the per-address record table and the single admin authority. Operations
//! validate every precondition before the first write, so a rejection leaves
//! the registry byte-identical to before the call.
//!
//! ## Transitions
//!
//! ```text
//! (absent) ──register()──▶ Registered{verified: false}
//!                                   │
//!                          verify_user() [admin only]
//!                                   │
//!                                   ▼
//!                          Registered{verified: true}   (no further transitions)
//! ```
//!
//! Admin authority: set to the deployer at construction, moved only by
//! `transfer_admin`, never empty.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use veri_core::{Address, Timestamp};

use crate::error::RegistryError;
use crate::event::RegistryEvent;
use crate::record::{IdentityRecord, Role, UserDetails};

/// The participant identity registry.
///
/// Construct one instance per deployment; tests construct isolated instances
/// per scenario. There is no ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityRegistry {
    /// The current admin authority.
    admin: Address,
    /// One record per registered address.
    records: HashMap<Address, IdentityRecord>,
    /// Index of claimed (non-empty) id numbers.
    id_numbers: HashSet<String>,
    /// Append-only log of successful transitions.
    events: Vec<RegistryEvent>,
}

impl IdentityRegistry {
    /// Create a registry with `deployer` as the initial admin.
    pub fn new(deployer: Address) -> Self {
        Self {
            admin: deployer,
            records: HashMap::new(),
            id_numbers: HashSet::new(),
            events: Vec::new(),
        }
    }

    // ─── State-changing operations ───────────────────────────────────

    /// Register an identity record for `caller`.
    ///
    /// The record is created unverified. Fails if `caller` already holds a
    /// record, or if a non-empty `id_number` is already claimed.
    pub fn register(
        &mut self,
        caller: &Address,
        name: impl Into<String>,
        id_number: impl Into<String>,
        role: Role,
    ) -> Result<(), RegistryError> {
        let id_number = id_number.into();

        if self.records.contains_key(caller) {
            return Err(RegistryError::AlreadyRegistered {
                address: caller.clone(),
            });
        }
        if !id_number.is_empty() && self.id_numbers.contains(&id_number) {
            return Err(RegistryError::DuplicateId { id_number });
        }

        let at = Timestamp::now();
        if !id_number.is_empty() {
            self.id_numbers.insert(id_number.clone());
        }
        self.records.insert(
            caller.clone(),
            IdentityRecord {
                name: name.into(),
                id_number,
                verified: false,
                role,
                registered_at: at,
            },
        );
        self.events.push(RegistryEvent::UserRegistered {
            address: caller.clone(),
            role,
            at,
        });
        info!(address = %caller, %role, "user registered");
        Ok(())
    }

    /// Mark `address` as verified. Admin only.
    ///
    /// Idempotent: re-verifying an already-verified participant succeeds
    /// without appending a second event.
    pub fn verify_user(&mut self, caller: &Address, address: &Address) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        let record = self
            .records
            .get_mut(address)
            .ok_or_else(|| RegistryError::NotRegistered {
                address: address.clone(),
            })?;

        if record.verified {
            return Ok(());
        }

        record.verified = true;
        self.events.push(RegistryEvent::UserVerified {
            address: address.clone(),
            at: Timestamp::now(),
        });
        info!(address = %address, "user verified");
        Ok(())
    }

    /// Move admin authority to `new_admin`. Admin only.
    ///
    /// The zero address is rejected — the authority is never left empty.
    pub fn transfer_admin(
        &mut self,
        caller: &Address,
        new_admin: Address,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        if new_admin.is_zero() {
            return Err(RegistryError::InvalidAddress);
        }

        let previous = std::mem::replace(&mut self.admin, new_admin.clone());
        self.events.push(RegistryEvent::AdminTransferred {
            previous: previous.clone(),
            new_admin: new_admin.clone(),
            at: Timestamp::now(),
        });
        info!(%previous, %new_admin, "admin transferred");
        Ok(())
    }

    // ─── Reads ───────────────────────────────────────────────────────

    /// The current admin authority.
    pub fn admin(&self) -> &Address {
        &self.admin
    }

    /// Read snapshot for `address`; defaults if unregistered.
    pub fn user_details(&self, address: &Address) -> UserDetails {
        self.records
            .get(address)
            .map(UserDetails::from)
            .unwrap_or_default()
    }

    /// Whether `address` is registered and verified.
    pub fn is_verified(&self, address: &Address) -> bool {
        self.records.get(address).is_some_and(|r| r.verified)
    }

    /// The full record for `address`, if registered.
    pub fn record(&self, address: &Address) -> Option<&IdentityRecord> {
        self.records.get(address)
    }

    /// The log of successful transitions, oldest first.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    fn require_admin(&self, caller: &Address) -> Result<(), RegistryError> {
        if *caller != self.admin {
            return Err(RegistryError::NotAdmin {
                caller: caller.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Address {
        Address::new("admin")
    }

    fn registry() -> IdentityRegistry {
        IdentityRegistry::new(admin())
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_deployer_becomes_admin() {
        let reg = registry();
        assert_eq!(reg.admin(), &admin());
    }

    // ── Registration ─────────────────────────────────────────────────

    #[test]
    fn test_register_creates_unverified_record() {
        let mut reg = registry();
        let alice = Address::new("alice");
        reg.register(&alice, "John Doe", "ID123456", Role::Buyer)
            .unwrap();

        let details = reg.user_details(&alice);
        assert_eq!(details.name, "John Doe");
        assert_eq!(details.id_number, "ID123456");
        assert!(!details.verified);
        assert_eq!(details.role, Role::Buyer);
    }

    #[test]
    fn test_register_rejects_duplicate_id_number() {
        let mut reg = registry();
        reg.register(&Address::new("alice"), "John Doe", "ID123456", Role::Buyer)
            .unwrap();

        let err = reg
            .register(&Address::new("bob"), "Jane Doe", "ID123456", Role::Seller)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId { .. }));
    }

    #[test]
    fn test_register_rejects_second_registration() {
        let mut reg = registry();
        let alice = Address::new("alice");
        reg.register(&alice, "John Doe", "ID123456", Role::Buyer)
            .unwrap();

        let err = reg
            .register(&alice, "J. Doe", "ID999999", Role::Seller)
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));

        // The first registration is untouched.
        let details = reg.user_details(&alice);
        assert_eq!(details.name, "John Doe");
        assert_eq!(details.role, Role::Buyer);
    }

    #[test]
    fn test_empty_id_numbers_do_not_collide() {
        let mut reg = registry();
        reg.register(&Address::new("alice"), "Alice", "", Role::Buyer)
            .unwrap();
        reg.register(&Address::new("bob"), "Bob", "", Role::Seller)
            .unwrap();
    }

    #[test]
    fn test_failed_registration_leaves_no_trace() {
        let mut reg = registry();
        reg.register(&Address::new("alice"), "Alice", "ID1", Role::Buyer)
            .unwrap();
        let events_before = reg.events().len();

        let _ = reg.register(&Address::new("bob"), "Bob", "ID1", Role::Seller);
        assert!(reg.record(&Address::new("bob")).is_none());
        assert_eq!(reg.events().len(), events_before);
    }

    // ── Verification ─────────────────────────────────────────────────

    #[test]
    fn test_admin_verifies_user() {
        let mut reg = registry();
        let alice = Address::new("alice");
        reg.register(&alice, "John Doe", "ID123456", Role::Buyer)
            .unwrap();
        reg.verify_user(&admin(), &alice).unwrap();

        assert!(reg.is_verified(&alice));
        assert!(reg.user_details(&alice).verified);
    }

    #[test]
    fn test_non_admin_cannot_verify() {
        let mut reg = registry();
        let alice = Address::new("alice");
        reg.register(&alice, "John Doe", "ID123456", Role::Buyer)
            .unwrap();

        let err = reg.verify_user(&Address::new("mallory"), &alice).unwrap_err();
        assert!(matches!(err, RegistryError::NotAdmin { .. }));
        assert!(!reg.is_verified(&alice));
    }

    #[test]
    fn test_verify_unregistered_fails() {
        let mut reg = registry();
        let err = reg.verify_user(&admin(), &Address::new("ghost")).unwrap_err();
        assert!(matches!(err, RegistryError::NotRegistered { .. }));
    }

    #[test]
    fn test_verify_is_idempotent() {
        let mut reg = registry();
        let alice = Address::new("alice");
        reg.register(&alice, "John Doe", "ID123456", Role::Buyer)
            .unwrap();
        reg.verify_user(&admin(), &alice).unwrap();
        let events_after_first = reg.events().len();

        reg.verify_user(&admin(), &alice).unwrap();
        assert!(reg.is_verified(&alice));
        assert_eq!(reg.events().len(), events_after_first);
    }

    // ── Admin transfer ───────────────────────────────────────────────

    #[test]
    fn test_transfer_admin() {
        let mut reg = registry();
        let alice = Address::new("alice");
        reg.transfer_admin(&admin(), alice.clone()).unwrap();
        assert_eq!(reg.admin(), &alice);

        // The old admin lost the authority.
        let err = reg
            .verify_user(&admin(), &Address::new("anyone"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotAdmin { .. }));
    }

    #[test]
    fn test_non_admin_cannot_transfer() {
        let mut reg = registry();
        let err = reg
            .transfer_admin(&Address::new("mallory"), Address::new("mallory"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotAdmin { .. }));
        assert_eq!(reg.admin(), &admin());
    }

    #[test]
    fn test_transfer_to_zero_address_rejected() {
        let mut reg = registry();
        let err = reg.transfer_admin(&admin(), Address::zero()).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidAddress));
        assert_eq!(reg.admin(), &admin());
    }

    #[test]
    fn test_new_admin_can_verify() {
        let mut reg = registry();
        let alice = Address::new("alice");
        let bob = Address::new("bob");
        reg.register(&bob, "Bob", "ID2", Role::Seller).unwrap();
        reg.transfer_admin(&admin(), alice.clone()).unwrap();

        reg.verify_user(&alice, &bob).unwrap();
        assert!(reg.is_verified(&bob));
    }

    // ── Reads ────────────────────────────────────────────────────────

    #[test]
    fn test_unregistered_details_default() {
        let reg = registry();
        let details = reg.user_details(&Address::new("ghost"));
        assert_eq!(details, UserDetails::default());
    }

    // ── Events ───────────────────────────────────────────────────────

    #[test]
    fn test_event_log_records_transitions() {
        let mut reg = registry();
        let alice = Address::new("alice");
        reg.register(&alice, "Alice", "ID1", Role::Buyer).unwrap();
        reg.verify_user(&admin(), &alice).unwrap();
        reg.transfer_admin(&admin(), alice.clone()).unwrap();

        let events = reg.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], RegistryEvent::UserRegistered { .. }));
        assert!(matches!(events[1], RegistryEvent::UserVerified { .. }));
        assert!(matches!(events[2], RegistryEvent::AdminTransferred { .. }));
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_registry_serialization_roundtrip() {
        let mut reg = registry();
        reg.register(&Address::new("alice"), "Alice", "ID1", Role::Buyer)
            .unwrap();

        let json = serde_json::to_string(&reg).unwrap();
        let parsed: IdentityRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.admin(), reg.admin());
        assert_eq!(
            parsed.user_details(&Address::new("alice")),
            reg.user_details(&Address::new("alice"))
        );
    }
}
