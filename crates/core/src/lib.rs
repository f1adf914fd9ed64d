//! Food Order Core - cart state and menu types.
//!
//! This crate holds the only stateful component of the food ordering app:
//! the [`CartStore`], which owns the current cart and the history of checked
//! out orders. Front ends read from it and drive it through three mutating
//! operations (add, remove, checkout); they observe changes by subscribing
//! to [`CartEvent`]s.
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory state - no persistence,
//! no networking, no async. Every operation is a synchronous call that
//! completes before returning, and observers run inline at the end of it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for item IDs, prices and image handles
//! - [`catalog`] - [`FoodItem`] and the fixed [`Catalog`] menu
//! - [`cart`] - [`CartStore`] and [`Order`]
//! - [`observer`] - Change notifications for the cart store
//! - [`error`] - Errors from checked cart operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod error;
pub mod observer;
pub mod types;

pub use cart::{CartStore, Order};
pub use catalog::{Catalog, CatalogError, FoodItem};
pub use error::CartError;
pub use observer::{CartEvent, CartSnapshot, SubscriptionId};
pub use types::*;
