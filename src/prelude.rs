//! Pizzeria prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, CartStore, RestoreOutcome},
    catalog::{CatalogPage, PriceConfiguration, Product, SizeOption, Topping},
    fixtures::{CatalogFixture, FixtureError},
    items::{BaseSelection, ItemKey, LineItem, ToppingRef, groups::CartGroup},
    orders::{
        CheckoutDetails, CheckoutError, OrderRequest, OrderResponse, OrderStatus, PaymentMode,
        PaymentStatus, StepState,
    },
    prices::{Price, PriceError},
    pricing::{PricingPolicy, TenantSummary, TenantTotals},
    session::{AccessToken, RefreshAction, TokenError},
    snapshot::{
        DetachedSnapshotStore, FileSnapshotStore, MemorySnapshotStore, SnapshotError,
        SnapshotStore,
    },
    tenants::{Tenant, TenantDirectory},
};
