//! Integration tests for the food ordering app.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p food-order-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart, checkout and order history behavior
//! - `cart_observers` - Change notifications
//! - `catalog` - Menu loading and lookup
//!
//! This crate also provides small fixtures shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;
use std::rc::Rc;

use food_order_core::{CartEvent, CartStore, CurrencyCode, FoodItem, Price};

/// A USD-priced item whose image handle is its lowercased name.
#[must_use]
pub fn usd_item(name: &str, cents: u32) -> FoodItem {
    FoodItem::new(
        name,
        Price::from_cents(cents, CurrencyCode::USD),
        name.to_ascii_lowercase().as_str(),
    )
}

/// Events recorded by [`record_events`].
pub type EventLog = Rc<RefCell<Vec<CartEvent>>>;

/// Subscribe an observer that records every event the store emits.
pub fn record_events(store: &mut CartStore) -> EventLog {
    let log = EventLog::default();
    let sink = Rc::clone(&log);
    store.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));
    log
}
