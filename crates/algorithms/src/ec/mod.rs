//! Elliptic Curve Primitives
//!
//! Generic short-Weierstrass arithmetic (y² = x³ + ax + b) over a prime field
//! whose parameters are only known at runtime. Field elements are
//! [`num_bigint::BigUint`] values kept in `[0, p)`.

pub mod weierstrass;

pub use weierstrass::{Point, PrimeCurve};
