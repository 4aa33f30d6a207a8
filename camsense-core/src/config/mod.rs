//! Configuration types
//!
//! Board-level bring-up settings, optionally stored as postcard binary data.

#[cfg(feature = "serde")]
pub mod persist;
pub mod types;

pub use types::*;
