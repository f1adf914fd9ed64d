//! Menu items and the fixed catalog they are served from.
//!
//! A [`Catalog`] is built once at startup, either from the built-in sample
//! menu or from a YAML document, and is never mutated afterwards. Front ends
//! receive it as an injected value and hand [`FoodItem`] clones to the
//! [`CartStore`](crate::CartStore).
//!
//! # YAML format
//!
//! ```yaml
//! currency: USD
//! items:
//!   - name: Burger
//!     price: "5.99"
//!     image: burger
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CurrencyCode, FoodItemId, ImageRef, Price, PriceError};

/// An immutable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    id: FoodItemId,
    name: String,
    price: Price,
    image: ImageRef,
}

impl FoodItem {
    /// Create an item with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, image: impl Into<ImageRef>) -> Self {
        Self::with_id(FoodItemId::generate(), name, price, image)
    }

    /// Create an item with a known id.
    #[must_use]
    pub fn with_id(
        id: FoodItemId,
        name: impl Into<String>,
        price: Price,
        image: impl Into<ImageRef>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> FoodItemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub const fn image(&self) -> &ImageRef {
        &self.image
    }
}

/// Errors that can occur when loading a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid catalog YAML.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The catalog has no items.
    #[error("catalog must contain at least one item")]
    Empty,

    /// An item has a blank name.
    #[error("item #{position} has an empty name")]
    EmptyName {
        /// 1-indexed menu position.
        position: usize,
    },

    /// An item has an invalid price.
    #[error("item #{position} has an invalid price: {source}")]
    InvalidPrice {
        /// 1-indexed menu position.
        position: usize,
        source: PriceError,
    },
}

/// The fixed, ordered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<FoodItem>,
    currency: CurrencyCode,
}

impl Catalog {
    /// The built-in sample menu.
    #[must_use]
    pub fn sample() -> Self {
        let usd = |cents| Price::from_cents(cents, CurrencyCode::USD);
        Self {
            items: vec![
                FoodItem::new("Burger", usd(599), "burger"),
                FoodItem::new("Pizza", usd(799), "pizza"),
                FoodItem::new("Sushi", usd(1299), "sushi"),
                FoodItem::new("Pasta", usd(899), "pasta"),
            ],
            currency: CurrencyCode::USD,
        }
    }

    /// Parse a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, the item list is empty, or
    /// any item has a blank name or a price that is negative or above
    /// [`Price::MAX_AMOUNT`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        document.validate()
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails
    /// [`Catalog::from_yaml_str`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            currency = catalog.currency().code(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// All items in menu order.
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// The currency every item is priced in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its 1-indexed menu position.
    #[must_use]
    pub fn get_by_position(&self, position: usize) -> Option<&FoodItem> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: FoodItemId) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    currency: CurrencyCode,
    items: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogEntry {
    name: String,
    price: Decimal,
    image: String,
}

impl CatalogDocument {
    fn validate(self) -> Result<Catalog, CatalogError> {
        if self.items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let currency = self.currency;
        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let position = index + 1;
                let name = entry.name.trim();
                if name.is_empty() {
                    return Err(CatalogError::EmptyName { position });
                }
                let price = Price::try_new(entry.price, currency)
                    .map_err(|source| CatalogError::InvalidPrice { position, source })?;
                Ok(FoodItem::new(name, price, entry.image.as_str()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog { items, currency })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const MENU: &str = r#"
currency: EUR
items:
  - name: Ramen
    price: "11.50"
    image: ramen
  - name: Gyoza
    price: "6.00"
    image: gyoza
"#;

    #[test]
    fn test_sample_menu() {
        let catalog = Catalog::sample();
        let names: Vec<_> = catalog.items().iter().map(FoodItem::name).collect();
        assert_eq!(names, ["Burger", "Pizza", "Sushi", "Pasta"]);

        let pizza = catalog.get_by_position(2).unwrap();
        assert_eq!(pizza.price(), Price::from_cents(799, CurrencyCode::USD));
        assert_eq!(pizza.image().as_str(), "pizza");
    }

    #[test]
    fn test_sample_ids_unique() {
        let catalog = Catalog::sample();
        let first = catalog.items().first().unwrap();
        assert!(catalog.items().iter().skip(1).all(|i| i.id() != first.id()));
    }

    #[test]
    fn test_get_by_position_bounds() {
        let catalog = Catalog::sample();
        assert!(catalog.get_by_position(0).is_none());
        assert!(catalog.get_by_position(4).is_some());
        assert!(catalog.get_by_position(5).is_none());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::sample();
        let sushi = catalog.get_by_position(3).unwrap();
        assert_eq!(catalog.get(sushi.id()), Some(sushi));
        assert!(catalog.get(FoodItemId::generate()).is_none());
    }

    #[test]
    fn test_from_yaml_str() {
        let catalog = Catalog::from_yaml_str(MENU).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.currency(), CurrencyCode::EUR);

        let ramen = catalog.get_by_position(1).unwrap();
        assert_eq!(ramen.name(), "Ramen");
        assert_eq!(ramen.price().to_string(), "€11.50");
    }

    #[test]
    fn test_from_yaml_defaults_to_usd() {
        let yaml = "items:\n  - name: Taco\n    price: \"3.25\"\n    image: taco\n";
        let catalog = Catalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.currency(), CurrencyCode::USD);
    }

    #[test]
    fn test_from_yaml_empty() {
        let result = Catalog::from_yaml_str("items: []");
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_yaml_blank_name() {
        let yaml = "items:\n  - name: \"  \"\n    price: \"1.00\"\n    image: x\n";
        let result = Catalog::from_yaml_str(yaml);
        assert!(matches!(result, Err(CatalogError::EmptyName { position: 1 })));
    }

    #[test]
    fn test_from_yaml_negative_price() {
        let yaml = "items:\n  - name: Tea\n    price: \"1.00\"\n    image: tea\n  - name: Refund\n    price: \"-2.00\"\n    image: x\n";
        let result = Catalog::from_yaml_str(yaml);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidPrice { position: 2, .. })
        ));
    }

    #[test]
    fn test_from_yaml_price_too_large() {
        let yaml = "items:\n  - name: Caviar\n    price: \"79228162514264337593543950335\"\n    image: caviar\n";
        let result = Catalog::from_yaml_str(yaml);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidPrice {
                position: 1,
                source: PriceError::TooLarge { .. }
            })
        ));
    }

    #[test]
    fn test_from_yaml_malformed() {
        let result = Catalog::from_yaml_str("items: [name: oops");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let result = Catalog::from_yaml_file("/nonexistent/catalog.yaml");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
