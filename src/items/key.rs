//! Item Keys
//!
//! The identity fingerprint of a cart line: product, base size and the set of
//! topping ids, independent of the order the toppings were picked in.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Separates the product, base and toppings segments of a key.
pub const SEGMENT_DELIMITER: char = '|';

/// Separates topping ids within the toppings segment.
pub const TOPPING_DELIMITER: &str = ",";

/// Composite identity of a cart line item.
///
/// An empty key means "not derived yet"; the cart store derives one when the
/// item is added.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    /// Derive the key for a product, base size name and topping ids.
    ///
    /// Topping ids are sorted lexicographically, so `["b", "a"]` and
    /// `["a", "b"]` produce the same key.
    pub fn derive<'a>(
        product_id: &str,
        base_name: &str,
        topping_ids: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut ids: Vec<&str> = topping_ids.into_iter().collect();
        ids.sort_unstable();

        let toppings = ids.join(TOPPING_DELIMITER);

        ItemKey(format!(
            "{product_id}{SEGMENT_DELIMITER}{base_name}{SEGMENT_DELIMITER}{toppings}"
        ))
    }

    /// Returns true if no key has been derived or supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemKey {
    fn from(value: String) -> Self {
        ItemKey(value)
    }
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        ItemKey(value.to_string())
    }
}

impl Borrow<str> for ItemKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ItemKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_sorts_topping_ids() {
        let forwards = ItemKey::derive("P1", "medium", ["A", "B"]);
        let backwards = ItemKey::derive("P1", "medium", ["B", "A"]);

        assert_eq!(forwards, backwards);
        assert_eq!(forwards.as_str(), "P1|medium|A,B");
    }

    #[test]
    fn derive_without_toppings_keeps_trailing_segment() {
        let key = ItemKey::derive("P1", "large", []);

        assert_eq!(key.as_str(), "P1|large|");
    }

    #[test]
    fn derive_distinguishes_base_sizes() {
        let small = ItemKey::derive("P1", "small", ["A"]);
        let large = ItemKey::derive("P1", "large", ["A"]);

        assert_ne!(small, large);
    }

    #[test]
    fn default_key_is_empty() {
        assert!(ItemKey::default().is_empty());
        assert!(!ItemKey::from("P1|small|").is_empty());
    }

    #[test]
    fn serializes_as_plain_string() -> testresult::TestResult {
        let key = ItemKey::derive("P1", "medium", ["A"]);

        assert_eq!(serde_json::to_string(&key)?, "\"P1|medium|A\"");

        Ok(())
    }
}
