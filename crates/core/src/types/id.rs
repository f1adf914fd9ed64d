//! Newtype IDs for type-safe entity references.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a [`FoodItem`](crate::FoodItem).
///
/// Generated once when the item is created. Two items with the same name,
/// price and image are still distinct if their ids differ.
///
/// # Example
///
/// ```rust
/// # use food_order_core::FoodItemId;
/// let a = FoodItemId::generate();
/// let b = FoodItemId::generate();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodItemId(Uuid);

impl FoodItemId {
    /// Generate a fresh random ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for FoodItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for FoodItemId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<FoodItemId> for Uuid {
    fn from(id: FoodItemId) -> Self {
        id.0
    }
}
