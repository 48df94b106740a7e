//! Cart Store
//!
//! The multi-vendor cart: one [`CartGroup`] per tenant that has at least one
//! line, mutated only through the operations below and written to a
//! [`SnapshotStore`] after every change that actually happened.

use tracing::{debug, info, warn};

use crate::{
    items::{ItemKey, LineItem, groups::CartGroup},
    orders::{CheckoutDetails, CheckoutError, OrderRequest},
    pricing::{PricingPolicy, TenantSummary, TenantTotals},
    snapshot::{MemorySnapshotStore, SnapshotStore},
    tenants::{Tenant, TenantDirectory},
};

/// Result of adding a candidate line to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The line was appended to its tenant's group.
    Added {
        /// Key the line is stored under.
        key: ItemKey,
    },

    /// The tenant's group already holds this composition; nothing changed.
    Duplicate {
        /// Key of the existing line.
        key: ItemKey,
    },
}

impl AddOutcome {
    /// Returns the key of the added or existing line.
    #[must_use]
    pub fn key(&self) -> &ItemKey {
        match self {
            AddOutcome::Added { key } | AddOutcome::Duplicate { key } => key,
        }
    }

    /// Check if the add was rejected as a duplicate.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, AddOutcome::Duplicate { .. })
    }
}

/// Result of restoring the cart from its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing had been persisted yet.
    Absent,

    /// The snapshot held no lines.
    Empty,

    /// The snapshot could not be parsed and was ignored.
    Malformed,

    /// The snapshot store could not be read.
    Unavailable,

    /// The cart was replaced by the snapshot.
    Restored {
        /// Tenant groups restored.
        groups: usize,

        /// Distinct lines restored.
        items: usize,
    },
}

/// The multi-vendor cart.
#[derive(Debug, Default)]
pub struct CartStore<S: SnapshotStore = MemorySnapshotStore> {
    groups: Vec<CartGroup>,
    store: S,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Create an empty cart backed by a snapshot store.
    ///
    /// The store is not read here; call [`CartStore::restore_from_snapshot`]
    /// once durable storage is known to be reachable.
    pub fn new(store: S) -> Self {
        CartStore {
            groups: Vec::new(),
            store,
        }
    }

    /// Replace the cart with the persisted snapshot.
    ///
    /// Never fails: an absent, unreadable, malformed or empty snapshot leaves
    /// the cart empty. Loaded state is repaired so every line has a key and a
    /// positive quantity, no key repeats within a group, and no group is empty.
    pub fn restore_from_snapshot(&mut self) -> RestoreOutcome {
        self.groups.clear();

        let raw = match self.store.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no cart snapshot to restore");

                return RestoreOutcome::Absent;
            }
            Err(error) => {
                warn!(%error, "cart snapshot could not be read, starting empty");

                return RestoreOutcome::Unavailable;
            }
        };

        let loaded: Vec<CartGroup> = match serde_json::from_str(&raw) {
            Ok(loaded) => loaded,
            Err(error) => {
                warn!(%error, "cart snapshot is malformed, starting empty");

                return RestoreOutcome::Malformed;
            }
        };

        let mut groups: Vec<CartGroup> = Vec::with_capacity(loaded.len());

        for group in loaded {
            match groups
                .iter_mut()
                .find(|existing| existing.tenant_id() == group.tenant_id())
            {
                Some(existing) => existing.absorb(group),
                None => groups.push(group),
            }
        }

        groups.iter_mut().for_each(CartGroup::normalize);
        groups.retain(|group| !group.is_empty());

        if groups.is_empty() {
            debug!("cart snapshot holds no items");

            return RestoreOutcome::Empty;
        }

        let items = groups.iter().map(CartGroup::len).sum();
        let count = groups.len();

        self.groups = groups;

        info!(groups = count, items, "restored cart from snapshot");

        RestoreOutcome::Restored {
            groups: count,
            items,
        }
    }

    /// Add a candidate line to its tenant's group.
    ///
    /// The key is derived when the candidate has none. A candidate whose key
    /// already exists in the group is rejected with [`AddOutcome::Duplicate`];
    /// quantities are never merged.
    pub fn add_item(&mut self, candidate: LineItem) -> AddOutcome {
        self.insert(candidate, None)
    }

    /// Add a candidate line, recording the vendor's display name on the group
    /// if this creates it.
    pub fn add_item_for(&mut self, tenant: &Tenant, candidate: LineItem) -> AddOutcome {
        self.insert(candidate, Some(tenant.name.as_str()))
    }

    fn insert(&mut self, mut candidate: LineItem, tenant_name: Option<&str>) -> AddOutcome {
        if candidate.quantity() == 0 {
            candidate.set_quantity(1);
        }

        let key = candidate.ensure_key().clone();

        match self
            .groups
            .iter_mut()
            .find(|group| group.tenant_id() == candidate.tenant_id())
        {
            Some(group) => {
                if group.contains_key(key.as_str()) {
                    debug!(tenant = group.tenant_id(), %key, "rejected duplicate cart item");

                    return AddOutcome::Duplicate { key };
                }

                group.push(candidate);
            }
            None => {
                let mut group = CartGroup::new(candidate.tenant_id());

                if let Some(name) = tenant_name {
                    group = group.with_tenant_name(name);
                }

                group.push(candidate);
                self.groups.push(group);
            }
        }

        debug!(%key, "added cart item");

        self.persist();

        AddOutcome::Added { key }
    }

    /// Increase a line's quantity by one.
    ///
    /// Returns false, changing nothing, when no line has this key.
    pub fn increment_quantity(&mut self, key: &str) -> bool {
        let Some(item) = self.groups.iter_mut().find_map(|group| group.find_mut(key)) else {
            debug!(key, "increment ignored, no such cart item");

            return false;
        };

        item.increment();

        debug!(key, quantity = item.quantity(), "incremented cart item");

        self.persist();

        true
    }

    /// Decrease a line's quantity by one, removing the line at quantity one
    /// and its group when that was the group's last line.
    ///
    /// Returns false, changing nothing, when no line has this key.
    pub fn decrement_quantity(&mut self, key: &str) -> bool {
        let Some(group) = self.groups.iter_mut().find(|group| group.contains_key(key)) else {
            debug!(key, "decrement ignored, no such cart item");

            return false;
        };

        let remaining = group.decrement(key);

        debug!(key, quantity = remaining, "decremented cart item");

        if group.is_empty() {
            let tenant = group.tenant_id().to_string();
            self.groups.retain(|group| !group.is_empty());

            debug!(tenant, "removed empty cart group");
        }

        self.persist();

        true
    }

    /// Remove the line at `index` in a tenant's group, dropping the group if it
    /// empties.
    ///
    /// Returns `None`, changing nothing, when the tenant has no group or the
    /// index is out of range.
    pub fn remove_item(&mut self, tenant_id: &str, index: usize) -> Option<LineItem> {
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.tenant_id() == tenant_id)?;

        let Some(removed) = group.remove(index) else {
            debug!(tenant_id, index, "remove ignored, index out of range");

            return None;
        };

        debug!(tenant_id, key = %removed.key(), "removed cart item");

        if group.is_empty() {
            self.groups.retain(|group| group.tenant_id() != tenant_id);
        }

        self.persist();

        Some(removed)
    }

    /// Empty the whole cart.
    pub fn clear_all(&mut self) {
        self.groups.clear();

        debug!("cleared cart");

        self.persist();
    }

    /// Drop a tenant's group.
    ///
    /// Returns false when the tenant had nothing in the cart.
    pub fn clear_tenant(&mut self, tenant_id: &str) -> bool {
        let before = self.groups.len();

        self.groups.retain(|group| group.tenant_id() != tenant_id);

        if self.groups.len() == before {
            return false;
        }

        debug!(tenant_id, "cleared cart group");

        self.persist();

        true
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.groups) {
            Ok(json) => json,
            Err(error) => {
                warn!(%error, "cart could not be serialized, snapshot not updated");

                return;
            }
        };

        if let Err(error) = self.store.write(&json) {
            warn!(%error, "cart snapshot write failed, continuing in memory");
        }
    }

    /// Returns the tenant groups in the order they were first added to.
    #[must_use]
    pub fn groups(&self) -> &[CartGroup] {
        &self.groups
    }

    /// Returns a tenant's group.
    #[must_use]
    pub fn group(&self, tenant_id: &str) -> Option<&CartGroup> {
        self.groups.iter().find(|group| group.tenant_id() == tenant_id)
    }

    /// Find a line by key in any group.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&LineItem> {
        self.groups.iter().find_map(|group| group.find(key))
    }

    /// Check if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of quantities across every tenant.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.groups
            .iter()
            .map(CartGroup::item_count)
            .fold(0, u32::saturating_add)
    }

    /// Check if more than one vendor has items in the cart.
    #[must_use]
    pub fn is_multi_tenant(&self) -> bool {
        self.groups.len() > 1
    }

    /// Every line of a product across all groups.
    pub fn items_for_product<'a>(
        &'a self,
        product_id: &'a str,
    ) -> impl Iterator<Item = &'a LineItem> + 'a {
        self.groups
            .iter()
            .flat_map(CartGroup::iter)
            .filter(move |item| item.product_id() == product_id)
    }

    /// Totals for one tenant's group, if the tenant has one.
    #[must_use]
    pub fn tenant_totals(&self, tenant_id: &str, policy: &PricingPolicy) -> Option<TenantTotals> {
        self.group(tenant_id).map(|group| policy.totals(group))
    }

    /// Per-vendor summaries in group order.
    #[must_use]
    pub fn summaries<'a>(
        &'a self,
        directory: &'a TenantDirectory,
        policy: &PricingPolicy,
    ) -> Vec<TenantSummary<'a>> {
        self.groups
            .iter()
            .map(|group| TenantSummary::new(group, directory, policy))
            .collect()
    }

    /// One order request per tenant group.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the checkout details are incomplete.
    pub fn order_requests(
        &self,
        details: &CheckoutDetails,
        policy: &PricingPolicy,
    ) -> Result<Vec<OrderRequest>, CheckoutError> {
        self.groups
            .iter()
            .map(|group| OrderRequest::for_group(group, details, policy))
            .collect()
    }

    /// Returns the snapshot store.
    #[must_use]
    pub fn snapshot_store(&self) -> &S {
        &self.store
    }
}
