//! Image asset handle.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle naming an image asset (e.g. `"burger"`).
///
/// The core never resolves the handle; front ends map it to whatever asset
/// store they render from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap an asset name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
