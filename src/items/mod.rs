//! Items

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::prices::Price;

pub mod groups;
pub mod key;

pub use key::ItemKey;

/// Toppings on a single line, inline for the common handful.
pub type Toppings = SmallVec<[ToppingRef; 4]>;

/// The size a product was ordered in, priced when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSelection {
    /// Size name, e.g. `medium`.
    pub name: String,

    /// Price of the base at add-time.
    pub price: Price,
}

impl BaseSelection {
    /// Creates a new base selection.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A topping snapshot taken when the line was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToppingRef {
    /// Catalog topping id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price at add-time.
    pub price: Price,
}

impl ToppingRef {
    /// Creates a new topping reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One distinct composition in a vendor's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    product_id: String,

    #[serde(default)]
    product_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    product_img: Option<String>,

    tenant_id: String,

    base: BaseSelection,

    #[serde(default)]
    toppings: Toppings,

    quantity: u32,

    #[serde(default)]
    key: ItemKey,
}

impl LineItem {
    /// Creates a candidate line with quantity 1, no toppings and no key.
    pub fn new(
        product_id: impl Into<String>,
        tenant_id: impl Into<String>,
        base: BaseSelection,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: String::new(),
            product_img: None,
            tenant_id: tenant_id.into(),
            base,
            toppings: Toppings::new(),
            quantity: 1,
            key: ItemKey::default(),
        }
    }

    /// Sets the display name snapshot.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Sets the display image snapshot.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.product_img = Some(image.into());
        self
    }

    /// Adds a topping.
    #[must_use]
    pub fn with_topping(mut self, topping: ToppingRef) -> Self {
        self.toppings.push(topping);
        self
    }

    /// Replaces the toppings.
    #[must_use]
    pub fn with_toppings(mut self, toppings: impl IntoIterator<Item = ToppingRef>) -> Self {
        self.toppings = toppings.into_iter().collect();
        self
    }

    /// Sets the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Supplies a precomputed key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<ItemKey>) -> Self {
        self.key = key.into();
        self
    }

    /// Derives the identity key from this line's composition.
    pub fn derive_key(&self) -> ItemKey {
        ItemKey::derive(
            &self.product_id,
            &self.base.name,
            self.toppings.iter().map(|topping| topping.id.as_str()),
        )
    }

    /// Derives and stores the key if none was supplied.
    pub(crate) fn ensure_key(&mut self) -> &ItemKey {
        if self.key.is_empty() {
            self.key = self.derive_key();
        }

        &self.key
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Returns the catalog product id.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the product name snapshot.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the product image snapshot.
    pub fn product_img(&self) -> Option<&str> {
        self.product_img.as_deref()
    }

    /// Returns the owning tenant.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Returns the base selection.
    pub fn base(&self) -> &BaseSelection {
        &self.base
    }

    /// Returns the toppings, in the order they were picked.
    pub fn toppings(&self) -> &[ToppingRef] {
        &self.toppings
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the identity key; empty until the line has been added to a cart.
    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    /// Price of one unit: the base plus every topping.
    pub fn unit_price(&self) -> Price {
        self.base.price + self.toppings.iter().map(|topping| topping.price).sum::<Price>()
    }

    /// Price of the whole line.
    pub fn line_total(&self) -> Price {
        self.unit_price().times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn margherita() -> LineItem {
        LineItem::new("P1", "t1", BaseSelection::new("medium", Price::new(100)))
            .with_name("Margherita")
            .with_topping(ToppingRef::new("B", "Olives", Price::new(20)))
            .with_topping(ToppingRef::new("A", "Jalapeno", Price::new(10)))
    }

    #[test]
    fn new_candidate_has_quantity_one_and_no_key() {
        let item = margherita();

        assert_eq!(item.quantity(), 1);
        assert!(item.key().is_empty());
    }

    #[test]
    fn derive_key_ignores_topping_order() {
        assert_eq!(margherita().derive_key().as_str(), "P1|medium|A,B");
    }

    #[test]
    fn ensure_key_keeps_supplied_key() {
        let mut item = margherita().with_key("custom");

        assert_eq!(item.ensure_key().as_str(), "custom");
    }

    #[test]
    fn unit_and_line_totals() {
        let item = margherita().with_quantity(2);

        assert_eq!(item.unit_price(), Price::new(130));
        assert_eq!(item.line_total(), Price::new(260));
    }

    #[test]
    fn decrement_never_goes_below_zero() {
        let mut item = margherita().with_quantity(0);

        item.decrement();

        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn serializes_in_snapshot_shape() -> TestResult {
        let mut item = margherita().with_image("/img/p1.png");
        item.ensure_key();

        let value = serde_json::to_value(&item)?;

        assert_eq!(value["productId"], "P1");
        assert_eq!(value["productName"], "Margherita");
        assert_eq!(value["productImg"], "/img/p1.png");
        assert_eq!(value["tenantId"], "t1");
        assert_eq!(value["base"]["name"], "medium");
        assert_eq!(value["base"]["price"], 100);
        assert_eq!(value["toppings"][0]["id"], "B");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["key"], "P1|medium|A,B");

        Ok(())
    }

    #[test]
    fn deserializes_without_key_or_image() -> TestResult {
        let json = r#"{
            "productId": "P2",
            "productName": "Farmhouse",
            "tenantId": "t2",
            "base": { "name": "small", "price": 50 },
            "toppings": [],
            "quantity": 3
        }"#;

        let item: LineItem = serde_json::from_str(json)?;

        assert_eq!(item.product_id(), "P2");
        assert_eq!(item.product_img(), None);
        assert!(item.key().is_empty());
        assert_eq!(item.quantity(), 3);

        Ok(())
    }
}
