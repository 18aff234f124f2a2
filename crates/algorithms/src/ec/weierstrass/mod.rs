//! Short-Weierstrass curves y² = x³ + ax + b over prime fields

mod curve;
mod field;
mod point;

pub use curve::PrimeCurve;
pub use field::{from_le_bytes, from_signed_le_bytes, mod_inverse, normalize, to_fixed_le_bytes};
pub use point::{point_add, point_double, scalar_multiply, Point};
