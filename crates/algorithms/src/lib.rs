//! Elliptic curve arithmetic over prime fields
//!
//! This crate provides the arithmetic engine behind the gostec signature
//! engines: unsigned big-integer field helpers and short-Weierstrass point
//! addition, doubling and scalar multiplication over an arbitrary prime
//! field. All functions are pure; curve parameters are passed explicitly.
//!
//! # Security
//!
//! The arithmetic is variable-time. It is correct for all inputs but makes
//! no attempt to hide secret scalars from timing side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::weierstrass::{
    mod_inverse, normalize, point_add, point_double, scalar_multiply, Point, PrimeCurve,
};
