//! Tenants

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::items::groups::CartGroup;

/// A vendor selling through the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Tenant id.
    pub id: String,

    /// Display name.
    pub name: String,
}

impl Tenant {
    /// Creates a new tenant.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Known tenants and the one currently being browsed.
#[derive(Debug, Clone, Default)]
pub struct TenantDirectory {
    tenants: Vec<Tenant>,
    index: FxHashMap<String, usize>,
    current: Option<String>,
}

impl TenantDirectory {
    /// Create a directory from a tenant list.
    pub fn new(tenants: impl IntoIterator<Item = Tenant>) -> Self {
        let mut directory = Self::default();
        directory.set_tenants(tenants);
        directory
    }

    /// Replace the known tenants.
    pub fn set_tenants(&mut self, tenants: impl IntoIterator<Item = Tenant>) {
        self.tenants = tenants.into_iter().collect();
        self.index = self
            .tenants
            .iter()
            .enumerate()
            .map(|(i, tenant)| (tenant.id.clone(), i))
            .collect();
    }

    /// Select the tenant being browsed, or clear the selection.
    pub fn set_current(&mut self, tenant_id: Option<&str>) {
        self.current = tenant_id.map(ToString::to_string);
    }

    /// Returns the currently selected tenant, if it is known.
    pub fn current(&self) -> Option<&Tenant> {
        self.current.as_deref().and_then(|id| self.get(id))
    }

    /// Look up a tenant by id.
    pub fn get(&self, tenant_id: &str) -> Option<&Tenant> {
        self.index
            .get(tenant_id)
            .and_then(|&i| self.tenants.get(i))
    }

    /// Iterate over known tenants in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = &Tenant> {
        self.tenants.iter()
    }

    /// Display name for a cart group: the directory's name, then the name the
    /// group was stored with, then the bare tenant id.
    pub fn display_name<'a>(&'a self, group: &'a CartGroup) -> &'a str {
        self.get(group.tenant_id())
            .map(|tenant| tenant.name.as_str())
            .or_else(|| group.tenant_name())
            .unwrap_or_else(|| group.tenant_id())
    }
}
