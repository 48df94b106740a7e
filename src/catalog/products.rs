//! Products

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{PriceConfiguration, Topping},
    items::{BaseSelection, LineItem},
    prices::Price,
};

/// Size offered when a product lists no base sizes.
pub const FALLBACK_SIZE: &str = "medium";

/// Display order of well-known sizes; other sizes follow in catalog order.
pub const SIZE_ORDER: [&str; 3] = ["small", "medium", "large"];

/// A named product attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,

    /// Attribute value.
    pub value: AttributeValue,
}

/// Attribute values are free-form scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A yes/no flag.
    Flag(bool),

    /// A number.
    Number(f64),

    /// Free text.
    Text(String),
}

/// A base size with its price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOption {
    /// Size name.
    pub name: String,

    /// Price of the base in this size.
    pub price: Price,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Description.
    #[serde(default)]
    pub description: String,

    /// Image URL.
    #[serde(default)]
    pub image_url: String,

    /// Price configuration entries by name.
    #[serde(default)]
    pub price_configuration: IndexMap<String, PriceConfiguration>,

    /// Attributes.
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Owning tenant.
    pub tenant_id: String,

    /// Category.
    #[serde(default)]
    pub category_id: String,

    /// Whether the product is listed.
    #[serde(default)]
    pub is_published: bool,

    /// Whether toppings can be picked for this product.
    #[serde(default)]
    pub is_toppings_available: bool,
}

impl Product {
    /// Base sizes, small to large, then any other sizes in catalog order.
    ///
    /// Each size is priced by the first of its available options, or zero when
    /// it lists none.
    #[must_use]
    pub fn sizes(&self) -> Vec<SizeOption> {
        let mut sizes: Vec<SizeOption> = self
            .price_configuration
            .iter()
            .filter(|(_, config)| config.is_base())
            .map(|(name, config)| SizeOption {
                name: name.clone(),
                price: config.first_price().unwrap_or(Price::ZERO),
            })
            .collect();

        // Stable: unknown sizes keep their relative order.
        sizes.sort_by_key(|size| {
            SIZE_ORDER
                .iter()
                .position(|known| *known == size.name)
                .unwrap_or(SIZE_ORDER.len())
        });

        sizes
    }

    /// `medium` when offered, else the first size, else `medium` at zero.
    #[must_use]
    pub fn default_size(&self) -> SizeOption {
        let mut sizes = self.sizes();

        let index = sizes
            .iter()
            .position(|size| size.name == FALLBACK_SIZE)
            .unwrap_or(0);

        if index < sizes.len() {
            sizes.swap_remove(index)
        } else {
            SizeOption {
                name: FALLBACK_SIZE.to_string(),
                price: Price::ZERO,
            }
        }
    }

    /// Lowest base price, shown as "from" on product cards.
    #[must_use]
    pub fn starting_price(&self) -> Price {
        self.sizes()
            .into_iter()
            .map(|size| size.price)
            .min()
            .unwrap_or(Price::ZERO)
    }

    /// Resolve a size name into a priced base.
    ///
    /// Sizes the product does not offer take the default size's price.
    #[must_use]
    pub fn base_selection(&self, size: &str) -> BaseSelection {
        let price = self
            .sizes()
            .into_iter()
            .find(|option| option.name == size)
            .map_or_else(|| self.default_size().price, |option| option.price);

        BaseSelection::new(size, price)
    }

    /// Build an add-to-cart candidate: quantity one, no key, and a name and
    /// image snapshot.
    #[must_use]
    pub fn line_item<'a>(
        &self,
        size: &str,
        toppings: impl IntoIterator<Item = &'a Topping>,
    ) -> LineItem {
        let mut item = LineItem::new(&self.id, &self.tenant_id, self.base_selection(size))
            .with_name(&self.name)
            .with_toppings(toppings.into_iter().map(Topping::to_ref));

        if !self.image_url.is_empty() {
            item = item.with_image(&self.image_url);
        }

        item
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(json: &str) -> Result<Product, serde_json::Error> {
        serde_json::from_str(json)
    }

    const MARGHERITA: &str = r#"{
        "_id": "P1",
        "name": "Margherita",
        "description": "Tomato and mozzarella",
        "imageUrl": "/img/margherita.png",
        "priceConfiguration": {
            "large": { "priceType": "base", "availableOptions": { "regular": 400 } },
            "crust": { "priceType": "additional", "availableOptions": { "thin": 30 } },
            "family": { "priceType": "base", "availableOptions": { "regular": 550 } },
            "small": { "priceType": "base", "availableOptions": { "regular": 200 } },
            "medium": { "priceType": "base", "availableOptions": { "regular": 300 } }
        },
        "attributes": [
            { "name": "isHit", "value": true },
            { "name": "spiciness", "value": "mild" },
            { "name": "serves", "value": 2 }
        ],
        "tenantId": "t1",
        "categoryId": "pizza",
        "isPublished": true,
        "isToppingsAvailable": true
    }"#;

    #[test]
    fn sizes_are_ordered_small_to_large_then_others() -> TestResult {
        let sizes = product(MARGHERITA)?.sizes();
        let names: Vec<&str> = sizes.iter().map(|size| size.name.as_str()).collect();

        assert_eq!(names, ["small", "medium", "large", "family"]);

        Ok(())
    }

    #[test]
    fn default_size_prefers_medium() -> TestResult {
        let size = product(MARGHERITA)?.default_size();

        assert_eq!(size.name, "medium");
        assert_eq!(size.price, Price::new(300));

        Ok(())
    }

    #[test]
    fn default_size_without_bases() -> TestResult {
        let bare = product(r#"{ "_id": "P2", "name": "Garlic Bread", "tenantId": "t1" }"#)?;

        assert_eq!(bare.default_size().name, "medium");
        assert_eq!(bare.default_size().price, Price::ZERO);
        assert_eq!(bare.starting_price(), Price::ZERO);

        Ok(())
    }

    #[test]
    fn default_size_falls_back_to_first() -> TestResult {
        let json = r#"{
            "_id": "P3", "name": "Calzone", "tenantId": "t1",
            "priceConfiguration": {
                "large": { "priceType": "base", "availableOptions": { "regular": 420 } },
                "small": { "priceType": "base", "availableOptions": { "regular": 210 } }
            }
        }"#;

        assert_eq!(product(json)?.default_size().name, "small");

        Ok(())
    }

    #[test]
    fn base_selection_for_unknown_size_uses_default_price() -> TestResult {
        let product = product(MARGHERITA)?;

        assert_eq!(product.base_selection("large").price, Price::new(400));
        assert_eq!(product.base_selection("xxl"), BaseSelection::new("xxl", Price::new(300)));

        Ok(())
    }

    #[test]
    fn starting_price_is_cheapest_base() -> TestResult {
        assert_eq!(product(MARGHERITA)?.starting_price(), Price::new(200));

        Ok(())
    }

    #[test]
    fn line_item_snapshots_prices() -> TestResult {
        let product = product(MARGHERITA)?;
        let toppings = [
            Topping::new("olive", "Olives", Price::new(20)),
            Topping::new("corn", "Corn", Price::new(10)),
        ];

        let item = product.line_item("large", &toppings);

        assert_eq!(item.product_id(), "P1");
        assert_eq!(item.tenant_id(), "t1");
        assert_eq!(item.product_name(), "Margherita");
        assert_eq!(item.product_img(), Some("/img/margherita.png"));
        assert_eq!(item.quantity(), 1);
        assert!(item.key().is_empty());
        assert_eq!(item.unit_price(), Price::new(430));
        assert_eq!(item.derive_key().as_str(), "P1|large|corn,olive");

        Ok(())
    }

    #[test]
    fn attributes_keep_scalar_types() -> TestResult {
        let product = product(MARGHERITA)?;

        assert_eq!(
            product.attributes.first().map(|a| &a.value),
            Some(&AttributeValue::Flag(true))
        );
        assert!(matches!(
            product.attributes.get(1).map(|a| &a.value),
            Some(AttributeValue::Text(text)) if text == "mild"
        ));

        Ok(())
    }
}
