//! Public API traits and types for the gostec library
//!
//! This crate provides the public API surface for the gostec ecosystem: the
//! error type shared by every member crate, the supported key sizes and the
//! [`HashSignature`] trait implemented by signature engines.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::KeySize;

pub use traits::signature::HashSignature;
pub use traits::signature;
