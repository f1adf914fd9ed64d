//! Core types for the food ordering app.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod image;
pub mod price;

pub use id::FoodItemId;
pub use image::ImageRef;
pub use price::{CurrencyCode, Price, PriceError};
