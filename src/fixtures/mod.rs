//! Fixtures
//!
//! YAML catalog sets under `<base>/catalog/<name>.yml`: the tenants, products
//! and toppings a storefront would otherwise fetch from the catalog service.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Product, Topping},
    items::LineItem,
    tenants::{Tenant, TenantDirectory},
};

/// Default fixture base directory.
pub const DEFAULT_BASE_PATH: &str = "./fixtures";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Tenant not found
    #[error("Tenant not found: {0}")]
    TenantNotFound(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Topping not found
    #[error("Topping not found: {0}")]
    ToppingNotFound(String),

    /// The product is not offered in the requested size
    #[error("Product {product} is not offered in size {size}")]
    SizeNotOffered {
        /// Product id
        product: String,
        /// Requested size
        size: String,
    },

    /// Toppings were picked for a product that takes none
    #[error("Product {0} does not take toppings")]
    ToppingsUnavailable(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tenants: Vec<Tenant>,

    #[serde(default)]
    products: Vec<Product>,

    #[serde(default)]
    toppings: Vec<Topping>,
}

/// A loaded catalog fixture set.
#[derive(Debug, Default)]
pub struct CatalogFixture {
    tenants: Vec<Tenant>,
    products: Vec<Product>,
    toppings: Vec<Topping>,

    product_index: FxHashMap<String, usize>,
    topping_index: FxHashMap<String, usize>,
}

impl CatalogFixture {
    /// Load a named set from the default base path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::load(DEFAULT_BASE_PATH, name)
    }

    /// Load a named set from `<base_path>/catalog/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(base_path: impl AsRef<Path>, name: &str) -> Result<Self, FixtureError> {
        let file_path = base_path
            .as_ref()
            .join("catalog")
            .join(format!("{name}.yml"));

        let contents =
            fs::read_to_string(&file_path).map_err(|error| FixtureError::Io(file_path, error))?;

        Self::from_yaml(&contents)
    }

    /// Parse a catalog set from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not describe a catalog.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let file: CatalogFile = serde_norway::from_str(contents)?;

        let product_index = file
            .products
            .iter()
            .enumerate()
            .map(|(i, product)| (product.id.clone(), i))
            .collect();

        let topping_index = file
            .toppings
            .iter()
            .enumerate()
            .map(|(i, topping)| (topping.id.clone(), i))
            .collect();

        Ok(CatalogFixture {
            tenants: file.tenants,
            products: file.products,
            toppings: file.toppings,
            product_index,
            topping_index,
        })
    }

    /// Returns the tenants.
    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    /// Returns the products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the toppings.
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// A tenant directory over the fixture's tenants.
    pub fn directory(&self) -> TenantDirectory {
        TenantDirectory::new(self.tenants.iter().cloned())
    }

    /// Get a tenant by id
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant is not found.
    pub fn tenant(&self, id: &str) -> Result<&Tenant, FixtureError> {
        self.tenants
            .iter()
            .find(|tenant| tenant.id == id)
            .ok_or_else(|| FixtureError::TenantNotFound(id.to_string()))
    }

    /// Get a product by id
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, id: &str) -> Result<&Product, FixtureError> {
        self.product_index
            .get(id)
            .and_then(|&i| self.products.get(i))
            .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
    }

    /// Get a topping by id
    ///
    /// # Errors
    ///
    /// Returns an error if the topping is not found.
    pub fn topping(&self, id: &str) -> Result<&Topping, FixtureError> {
        self.topping_index
            .get(id)
            .and_then(|&i| self.toppings.get(i))
            .ok_or_else(|| FixtureError::ToppingNotFound(id.to_string()))
    }

    /// Resolve a product, optional size and topping ids into an add-to-cart
    /// candidate. Without a size the product's default size is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the product or a topping is unknown, the size is not
    /// offered, or toppings are picked for a product that takes none.
    pub fn candidate(
        &self,
        product_id: &str,
        size: Option<&str>,
        topping_ids: &[String],
    ) -> Result<LineItem, FixtureError> {
        let product = self.product(product_id)?;

        let size = match size {
            Some(size) => {
                let sizes = product.sizes();

                if !sizes.is_empty() && !sizes.iter().any(|option| option.name == size) {
                    return Err(FixtureError::SizeNotOffered {
                        product: product_id.to_string(),
                        size: size.to_string(),
                    });
                }

                size.to_string()
            }
            None => product.default_size().name,
        };

        if !topping_ids.is_empty() && !product.is_toppings_available {
            return Err(FixtureError::ToppingsUnavailable(product_id.to_string()));
        }

        let toppings = topping_ids
            .iter()
            .map(|id| self.topping(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(product.line_item(&size, toppings))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::prices::Price;

    use super::*;

    const CATALOG: &str = r#"
tenants:
  - id: t1
    name: Downtown Slice
products:
  - _id: P1
    name: Margherita
    tenantId: t1
    isPublished: true
    isToppingsAvailable: true
    priceConfiguration:
      small:
        priceType: base
        availableOptions:
          regular: 200
      medium:
        priceType: base
        availableOptions:
          regular: 300
  - _id: P2
    name: Garlic Bread
    tenantId: t1
    priceConfiguration:
      regular:
        priceType: base
        availableOptions:
          regular: 120
toppings:
  - id: olive
    name: Olives
    price: 20
  - id: corn
    name: Corn
    price: 12.5
"#;

    #[test]
    fn parses_yaml() -> TestResult {
        let fixture = CatalogFixture::from_yaml(CATALOG)?;

        assert_eq!(fixture.tenants().len(), 1);
        assert_eq!(fixture.products().len(), 2);
        assert_eq!(
            fixture.topping("corn")?.price,
            Price::new(rust_decimal::Decimal::new(125, 1))
        );
        assert_eq!(
            fixture.directory().get("t1").map(|t| t.name.as_str()),
            Some("Downtown Slice")
        );

        Ok(())
    }

    #[test]
    fn candidate_defaults_to_medium() -> TestResult {
        let fixture = CatalogFixture::from_yaml(CATALOG)?;

        let item = fixture.candidate("P1", None, &["olive".to_string()])?;

        assert_eq!(item.base().name, "medium");
        assert_eq!(item.unit_price(), Price::new(320));

        Ok(())
    }

    #[test]
    fn candidate_errors() -> TestResult {
        let fixture = CatalogFixture::from_yaml(CATALOG)?;

        assert!(matches!(
            fixture.candidate("P9", None, &[]),
            Err(FixtureError::ProductNotFound(_))
        ));
        assert!(matches!(
            fixture.candidate("P1", Some("large"), &[]),
            Err(FixtureError::SizeNotOffered { .. })
        ));
        assert!(matches!(
            fixture.candidate("P1", None, &["ham".to_string()]),
            Err(FixtureError::ToppingNotFound(_))
        ));
        assert!(matches!(
            fixture.candidate("P2", None, &["olive".to_string()]),
            Err(FixtureError::ToppingsUnavailable(_))
        ));

        Ok(())
    }

    #[test]
    fn missing_set_is_io_error() {
        let result = CatalogFixture::load("./does-not-exist", "nope");

        assert!(matches!(result, Err(FixtureError::Io(..))));
    }
}
