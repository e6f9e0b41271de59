//! # The Marketplace
//!
//! A transactional state machine over the product table. Every operation
//! validates all of its preconditions before the first write; the only
//! fallible side effect (payment settlement) runs before the record
//! mutation, so any rejection leaves the marketplace byte-identical to
//! before the call.
//!
//! Authorization resolves through the `IdentityLookup` handle injected at
//! construction — the in-process analogue of holding the registry's
//! deployment address.

use tracing::info;

use veri_core::{Address, Amount, Timestamp};
use veri_identity::IdentityLookup;
use veri_ledger::SettlementLedger;

use crate::error::MarketError;
use crate::event::MarketEvent;
use crate::product::{ListingStatus, ProductId, ProductRecord};

/// The identity-gated marketplace.
#[derive(Debug)]
pub struct Marketplace<I: IdentityLookup> {
    /// The injected identity handle, stored immutably at construction.
    identity: I,
    /// Product slots, indexed by id. Never compacted.
    products: Vec<ProductRecord>,
    /// Append-only log of successful transitions.
    events: Vec<MarketEvent>,
}

impl<I: IdentityLookup> Marketplace<I> {
    /// Create a marketplace that authorizes callers against `identity`.
    pub fn new(identity: I) -> Self {
        Self {
            identity,
            products: Vec::new(),
            events: Vec::new(),
        }
    }

    // ─── State-changing operations ───────────────────────────────────

    /// List a product for sale. Verified sellers only.
    ///
    /// Returns the sequential id assigned to the new listing.
    pub fn list_product(
        &mut self,
        caller: &Address,
        name: impl Into<String>,
        price: Amount,
    ) -> Result<ProductId, MarketError> {
        if !self.identity.user_details(caller).verified_seller() {
            return Err(MarketError::UnverifiedSeller {
                caller: caller.clone(),
            });
        }
        if price.is_zero() {
            return Err(MarketError::InvalidPrice);
        }

        let id = ProductId::new(self.products.len() as u64);
        let at = Timestamp::now();
        self.products.push(ProductRecord {
            id,
            name: name.into(),
            price,
            seller: caller.clone(),
            status: ListingStatus::Listed,
            buyer: None,
            listed_at: at,
        });
        self.events.push(MarketEvent::ProductListed {
            id,
            seller: caller.clone(),
            price,
            at,
        });
        info!(%id, seller = %caller, %price, "product listed");
        Ok(id)
    }

    /// Purchase a listing. Verified buyers only; `payment` must equal the
    /// asking price exactly.
    ///
    /// Payment settlement and the ownership flip commit together: the
    /// record write is infallible, so a ledger rejection aborts the whole
    /// purchase with the listing untouched.
    pub fn purchase_product<L: SettlementLedger>(
        &mut self,
        ledger: &mut L,
        caller: &Address,
        id: ProductId,
        payment: Amount,
    ) -> Result<(), MarketError> {
        if !self.identity.user_details(caller).verified_buyer() {
            return Err(MarketError::UnverifiedBuyer {
                caller: caller.clone(),
            });
        }
        let record = self.existing(id)?;
        if record.is_sold() {
            return Err(MarketError::AlreadySold { id });
        }
        if payment != record.price {
            return Err(MarketError::IncorrectPayment {
                expected: record.price,
                offered: payment,
            });
        }
        let seller = record.seller.clone();
        let price = record.price;

        // Settle first. Everything after this line is infallible.
        ledger.transfer(caller, &seller, payment)?;

        let record = &mut self.products[id.raw() as usize];
        record.status = ListingStatus::Sold;
        record.buyer = Some(caller.clone());
        self.events.push(MarketEvent::ProductPurchased {
            id,
            buyer: caller.clone(),
            seller: seller.clone(),
            price,
            at: Timestamp::now(),
        });
        info!(%id, buyer = %caller, seller = %seller, %price, "product purchased");
        Ok(())
    }

    /// Remove an unsold listing. The listing seller only.
    ///
    /// Logical delete: the name is cleared to the empty sentinel and the
    /// slot is retired — the id is never reused.
    pub fn remove_product(&mut self, caller: &Address, id: ProductId) -> Result<(), MarketError> {
        let record = self.existing(id)?;
        if record.seller != *caller {
            return Err(MarketError::NotOwner {
                caller: caller.clone(),
                id,
            });
        }
        if record.is_sold() {
            return Err(MarketError::AlreadySold { id });
        }

        let record = &mut self.products[id.raw() as usize];
        record.name.clear();
        record.status = ListingStatus::Removed;
        self.events.push(MarketEvent::ProductRemoved {
            id,
            seller: caller.clone(),
            at: Timestamp::now(),
        });
        info!(%id, seller = %caller, "product removed");
        Ok(())
    }

    // ─── Reads ───────────────────────────────────────────────────────

    /// The injected identity handle.
    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Total number of slots ever allocated, including sold and removed.
    pub fn product_count(&self) -> u64 {
        self.products.len() as u64
    }

    /// The record in slot `id`, if the slot was ever allocated.
    ///
    /// Sold and removed slots still resolve; use [`Self::active_products`]
    /// for the live view.
    pub fn product(&self, id: ProductId) -> Option<&ProductRecord> {
        self.products.get(id.raw() as usize)
    }

    /// The purchaser of slot `id`, if it has been sold.
    pub fn product_buyer(&self, id: ProductId) -> Option<&Address> {
        self.product(id).and_then(|record| record.buyer.as_ref())
    }

    /// Listings that are neither sold nor removed, in ascending id order.
    ///
    /// Lazy: recomputed on each call, restartable.
    pub fn active_products(&self) -> impl Iterator<Item = &ProductRecord> {
        self.products.iter().filter(|record| record.is_active())
    }

    /// The log of successful transitions, oldest first.
    pub fn events(&self) -> &[MarketEvent] {
        &self.events
    }

    /// The record in slot `id`, treating removed slots as absent.
    fn existing(&self, id: ProductId) -> Result<&ProductRecord, MarketError> {
        match self.products.get(id.raw() as usize) {
            Some(record) if !record.is_removed() => Ok(record),
            _ => Err(MarketError::NotFound { id }),
        }
    }
}
