//! Common implementations and shared functionality for the gostec library
//!
//! This crate provides the byte-buffer value types exchanged at the public
//! boundary (curves, points, parameter sets) and the zeroizing containers
//! that hold private key material.

pub mod ec_common;
pub mod security;

// Re-export core security types
pub use security::SecretVec;

// Re-export curve value types
pub use ec_common::{EcCurve, EcParameters, EcPoint};
