//! Change notifications for the cart store.
//!
//! Observers are plain closures registered with
//! [`CartStore::subscribe`](crate::CartStore::subscribe). They are called
//! synchronously, in subscription order, once the mutation that triggered
//! them has fully completed, and receive a read-only [`CartSnapshot`] of the
//! store at that moment.

use core::fmt;

use crate::cart::Order;
use crate::catalog::FoodItem;
use crate::types::Price;

/// A completed change to the cart store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// An item was appended to the cart at `index`.
    ItemAdded { index: usize, item: FoodItem },
    /// The item previously at `index` was removed from the cart.
    ItemRemoved { index: usize, item: FoodItem },
    /// The cart was checked out into order number `order_number` (1-indexed).
    CheckedOut { order_number: usize },
}

/// Read-only view of the store handed to observers.
#[derive(Debug, Clone, Copy)]
pub struct CartSnapshot<'a> {
    cart: &'a [FoodItem],
    orders: &'a [Order],
}

impl<'a> CartSnapshot<'a> {
    pub(crate) const fn new(cart: &'a [FoodItem], orders: &'a [Order]) -> Self {
        Self { cart, orders }
    }

    #[must_use]
    pub const fn cart_items(&self) -> &'a [FoodItem] {
        self.cart
    }

    #[must_use]
    pub const fn orders(&self) -> &'a [Order] {
        self.orders
    }

    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.iter().map(FoodItem::price).sum()
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Observer = Box<dyn FnMut(&CartEvent, CartSnapshot<'_>)>;

/// Registered observers in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &CartEvent, snapshot: CartSnapshot<'_>) {
        for (_, observer) in &mut self.entries {
            observer(event, snapshot);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish_non_exhaustive()
    }
}
