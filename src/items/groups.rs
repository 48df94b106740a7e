//! Cart Groups

use serde::{Deserialize, Serialize};

use crate::{
    items::{ItemKey, LineItem},
    prices::Price,
};

/// One vendor's basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartGroup {
    tenant_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant_name: Option<String>,

    #[serde(default)]
    items: Vec<LineItem>,
}

impl CartGroup {
    /// Create an empty group for a tenant.
    pub fn new(tenant_id: impl Into<String>) -> Self {
        CartGroup {
            tenant_id: tenant_id.into(),
            tenant_name: None,
            items: Vec::new(),
        }
    }

    /// Set the vendor display name.
    #[must_use]
    pub fn with_tenant_name(mut self, name: impl Into<String>) -> Self {
        self.tenant_name = Some(name.into());
        self
    }

    /// Returns the tenant id.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Returns the stored vendor display name, if any.
    pub fn tenant_name(&self) -> Option<&str> {
        self.tenant_name.as_deref()
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over the items.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Find an item by key.
    pub fn find(&self, key: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Returns true if an item with this key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the group has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across lines, saturating at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .map(LineItem::quantity)
            .fold(0, u32::saturating_add)
    }

    /// Σ quantity × (base + toppings).
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    pub(crate) fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<LineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Decrement a line, removing it at quantity one. Returns the quantity
    /// left, zero when the line was removed or not found.
    pub(crate) fn decrement(&mut self, key: &str) -> u32 {
        let Some(index) = self.items.iter().position(|item| item.key() == key) else {
            return 0;
        };

        match self.items.get_mut(index) {
            Some(item) if item.quantity() > 1 => {
                item.decrement();
                item.quantity()
            }
            _ => {
                self.items.remove(index);
                0
            }
        }
    }

    /// Move another group's lines for the same tenant into this one.
    pub(crate) fn absorb(&mut self, other: CartGroup) {
        if self.tenant_name.is_none() {
            self.tenant_name = other.tenant_name;
        }

        self.items.extend(other.items);
    }

    /// Repair a group loaded from outside the store so every line has a
    /// quantity of at least one, a key, and no key appears twice.
    pub(crate) fn normalize(&mut self) {
        self.items.retain(|item| item.quantity() > 0);

        let mut seen: Vec<ItemKey> = Vec::with_capacity(self.items.len());

        self.items.retain_mut(|item| {
            let key = item.ensure_key();

            if seen.contains(key) {
                return false;
            }

            seen.push(key.clone());
            true
        });
    }
}
