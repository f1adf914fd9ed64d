//! Integration tests for cart change notifications.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use food_order_core::{CartEvent, CartStore};
use food_order_integration_tests::{record_events, usd_item};

#[test]
fn test_one_event_per_mutation() {
    let mut store = CartStore::new();
    let log = record_events(&mut store);

    store.add_to_cart(usd_item("Burger", 599));
    store.add_to_cart(usd_item("Pizza", 799));
    store.remove_from_cart(1);
    store.checkout();

    let kinds: Vec<_> = log
        .borrow()
        .iter()
        .map(|event| match event {
            CartEvent::ItemAdded { index, .. } => format!("add@{index}"),
            CartEvent::ItemRemoved { index, .. } => format!("remove@{index}"),
            CartEvent::CheckedOut { order_number } => format!("checkout#{order_number}"),
        })
        .collect();
    assert_eq!(kinds, ["add@0", "add@1", "remove@1", "checkout#1"]);
}

#[test]
fn test_no_events_for_noops_and_failures() {
    let mut store = CartStore::new();
    let log = record_events(&mut store);

    store.checkout();
    assert!(store.try_remove_from_cart(0).is_err());

    assert!(log.borrow().is_empty());
}

#[test]
fn test_observer_sees_total_after_change() {
    let mut store = CartStore::new();
    let totals = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&totals);
    store.subscribe(move |_, snapshot| sink.borrow_mut().push(snapshot.total_price().to_string()));

    store.add_to_cart(usd_item("Burger", 599));
    store.add_to_cart(usd_item("Pizza", 799));
    store.checkout();

    assert_eq!(*totals.borrow(), ["$5.99", "$13.98", "$0.00"]);
}

#[test]
fn test_unsubscribed_observer_is_silent() {
    let mut store = CartStore::new();
    let kept = record_events(&mut store);
    let dropped = Rc::new(RefCell::new(0_u32));
    let sink = Rc::clone(&dropped);
    let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

    store.add_to_cart(usd_item("Sushi", 1299));
    assert!(store.unsubscribe(id));
    store.add_to_cart(usd_item("Sushi", 1299));

    assert_eq!(*dropped.borrow(), 1);
    assert_eq!(kept.borrow().len(), 2);
}
