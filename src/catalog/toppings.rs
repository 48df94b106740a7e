//! Toppings

use serde::{Deserialize, Serialize};

use crate::{items::ToppingRef, prices::Price};

/// A topping as the catalog lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topping {
    /// Topping id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Current price.
    pub price: Price,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    /// Owning tenant, when toppings are vendor-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl Topping {
    /// Creates a new topping.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Price) -> Self {
        Topping {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            tenant_id: None,
        }
    }

    /// Snapshot this topping for a cart line.
    #[must_use]
    pub fn to_ref(&self) -> ToppingRef {
        ToppingRef::new(self.id.clone(), self.name.clone(), self.price)
    }
}

impl From<&Topping> for ToppingRef {
    fn from(topping: &Topping) -> Self {
        topping.to_ref()
    }
}
