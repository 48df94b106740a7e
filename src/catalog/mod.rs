//! Catalog
//!
//! Shapes the storefront consumes from the catalog service. The cart never
//! reads these directly; a product and the picked toppings are resolved into a
//! [`LineItem`](crate::items::LineItem) candidate before it is added.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::prices::Price;

pub mod page;
pub mod products;
pub mod toppings;

pub use page::{CatalogList, CatalogPage, PageMetadata};
pub use products::{Attribute, AttributeValue, Product, SizeOption};
pub use toppings::Topping;

/// Option name to price, in the order the catalog lists them.
pub type AvailableOptions = IndexMap<String, Price>;

/// One named price configuration entry of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "priceType", rename_all = "lowercase")]
pub enum PriceConfiguration {
    /// A base size; the first available option is its price.
    Base {
        /// Priced options.
        #[serde(rename = "availableOptions", default)]
        available_options: AvailableOptions,
    },

    /// An extra chosen on top of the base.
    Additional {
        /// Priced options.
        #[serde(rename = "availableOptions", default)]
        available_options: AvailableOptions,
    },

    /// A price reduction.
    Discount {
        /// Priced options.
        #[serde(rename = "availableOptions", default)]
        available_options: AvailableOptions,
    },
}

impl PriceConfiguration {
    /// Returns the priced options.
    #[must_use]
    pub fn available_options(&self) -> &AvailableOptions {
        match self {
            PriceConfiguration::Base { available_options }
            | PriceConfiguration::Additional { available_options }
            | PriceConfiguration::Discount { available_options } => available_options,
        }
    }

    /// Check if this entry is a base size.
    #[must_use]
    pub fn is_base(&self) -> bool {
        matches!(self, PriceConfiguration::Base { .. })
    }

    /// Price of the first listed option.
    #[must_use]
    pub fn first_price(&self) -> Option<Price> {
        self.available_options().values().next().copied()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_tagged_variants() -> TestResult {
        let json = r#"{
            "medium": { "priceType": "base", "availableOptions": { "regular": 250, "thin": 270 } },
            "cheese": { "priceType": "additional", "availableOptions": { "extra": 40 } },
            "promo": { "priceType": "discount", "availableOptions": {} }
        }"#;

        let config: IndexMap<String, PriceConfiguration> = serde_json::from_str(json)?;

        assert_eq!(
            config
                .get("medium")
                .and_then(PriceConfiguration::first_price),
            Some(Price::new(250))
        );
        assert!(config.get("medium").is_some_and(PriceConfiguration::is_base));
        assert!(matches!(
            config.get("cheese"),
            Some(PriceConfiguration::Additional { .. })
        ));
        assert_eq!(config.get("promo").and_then(PriceConfiguration::first_price), None);

        Ok(())
    }

    #[test]
    fn unknown_price_type_is_rejected() {
        let json = r#"{ "priceType": "bundle", "availableOptions": {} }"#;

        assert!(serde_json::from_str::<PriceConfiguration>(json).is_err());
    }
}
