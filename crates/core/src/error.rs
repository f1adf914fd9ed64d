//! Errors returned by checked cart operations.

use thiserror::Error;

/// Errors from [`CartStore`](crate::CartStore) operations that take untrusted
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// The index does not name an item currently in the cart.
    #[error("cart index {index} out of bounds for cart of length {len}")]
    IndexOutOfBounds {
        /// The requested 0-indexed position.
        index: usize,
        /// Cart length at the time of the call.
        len: usize,
    },
}
