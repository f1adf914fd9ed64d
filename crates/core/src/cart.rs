//! The cart store: current cart plus order history.
//!
//! [`CartStore`] is the single owner of cart state. It supports three
//! mutating operations and one derived value:
//!
//! - [`CartStore::add_to_cart`] appends an item
//! - [`CartStore::remove_from_cart`] removes the item at a position
//! - [`CartStore::checkout`] moves a non-empty cart into the order history
//! - [`CartStore::total_price`] sums the prices of the cart's items
//!
//! Checkout on an empty cart is a no-op. Removing at a position outside the
//! cart is a caller bug and panics; use [`CartStore::try_remove_from_cart`]
//! when the position comes from user input.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::FoodItem;
use crate::error::CartError;
use crate::observer::{CartEvent, CartSnapshot, Observers, SubscriptionId};
use crate::types::Price;

/// An immutable snapshot of a cart taken at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    items: Vec<FoodItem>,
    placed_at: DateTime<Utc>,
}

impl Order {
    fn new(items: Vec<FoodItem>) -> Self {
        Self {
            items,
            placed_at: Utc::now(),
        }
    }

    /// Items in the order they were added to the cart.
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// When checkout happened.
    #[must_use]
    pub const fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(FoodItem::price).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for orders produced by checkout.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Owns the current cart and the append-only order history.
#[derive(Default)]
pub struct CartStore {
    cart: Vec<FoodItem>,
    orders: Vec<Order>,
    observers: Observers,
}

impl CartStore {
    /// An empty cart with no order history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to the end of the cart.
    pub fn add_to_cart(&mut self, item: FoodItem) {
        let index = self.cart.len();
        debug!(item = %item.name(), price = %item.price(), index, "Adding item to cart");
        self.cart.push(item.clone());
        self.notify(&CartEvent::ItemAdded { index, item });
    }

    /// Remove and return the item at `index`, shifting later items left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the cart length. Callers holding
    /// indices from untrusted input should use
    /// [`try_remove_from_cart`](Self::try_remove_from_cart).
    pub fn remove_from_cart(&mut self, index: usize) -> FoodItem {
        let len = self.cart.len();
        assert!(
            index < len,
            "cart index {index} out of bounds for cart of length {len}"
        );
        self.remove_at(index)
    }

    /// Checked variant of [`remove_from_cart`](Self::remove_from_cart).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfBounds`] without touching the cart if
    /// `index` is not less than the cart length.
    pub fn try_remove_from_cart(&mut self, index: usize) -> Result<FoodItem, CartError> {
        let len = self.cart.len();
        if index >= len {
            return Err(CartError::IndexOutOfBounds { index, len });
        }
        Ok(self.remove_at(index))
    }

    /// Move the cart into the order history.
    ///
    /// Returns the new order, or `None` without changing anything (and
    /// without notifying observers) if the cart is empty.
    pub fn checkout(&mut self) -> Option<&Order> {
        if self.cart.is_empty() {
            debug!("Checkout skipped, cart is empty");
            return None;
        }

        let order = Order::new(core::mem::take(&mut self.cart));
        let order_number = self.orders.len() + 1;
        info!(
            order_number,
            items = order.len(),
            total = %order.total_price(),
            "Checked out cart"
        );
        self.orders.push(order);
        self.notify(&CartEvent::CheckedOut { order_number });
        self.orders.last()
    }

    /// Sum of the prices of the items in the cart, in insertion order.
    ///
    /// Zero for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.iter().map(FoodItem::price).sum()
    }

    /// Items in the cart, in insertion order.
    #[must_use]
    pub fn cart_items(&self) -> &[FoodItem] {
        &self.cart
    }

    #[must_use]
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    #[must_use]
    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Past orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by its 1-indexed order number.
    #[must_use]
    pub fn order(&self, order_number: usize) -> Option<&Order> {
        order_number
            .checked_sub(1)
            .and_then(|index| self.orders.get(index))
    }

    /// Register an observer called after every state change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, CartSnapshot<'_>) + 'static,
    {
        let id = self.observers.subscribe(Box::new(observer));
        debug!(%id, "Observer subscribed");
        id
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.unsubscribe(id);
        debug!(%id, removed, "Observer unsubscribed");
        removed
    }

    fn remove_at(&mut self, index: usize) -> FoodItem {
        let item = self.cart.remove(index);
        debug!(item = %item.name(), index, "Removed item from cart");
        self.notify(&CartEvent::ItemRemoved {
            index,
            item: item.clone(),
        });
        item
    }

    fn notify(&mut self, event: &CartEvent) {
        let snapshot = CartSnapshot::new(&self.cart, &self.orders);
        self.observers.notify(event, snapshot);
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("orders", &self.orders)
            .field("observers", &self.observers.len())
            .finish()
    }
}
