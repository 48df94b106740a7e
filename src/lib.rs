//! Pizzeria
//!
//! Storefront state for a multi-vendor pizza shop: a per-tenant cart with
//! composition-keyed line items, snapshot persistence, vendor totals, checkout
//! payloads and order tracking.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod session;
pub mod snapshot;
pub mod tenants;
