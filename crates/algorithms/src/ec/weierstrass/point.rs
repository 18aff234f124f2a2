//! Short-Weierstrass point operations over a prime field
//!
//! The public functions work on affine points and invert with
//! `(·)^(p-2) mod p`. Scalar multiplication runs in Jacobian projective
//! coordinates and performs a single inversion when converting back.
//!
//! Every operation is total: the point at infinity is an explicit
//! [`Point::Identity`], equal summands are routed to doubling and `P + (-P)`
//! yields the identity.

use gostec_api::KeySize;
use gostec_common::EcPoint;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::field::{self, add, mul, small, square, sub};
use crate::error::{Error, Result};

/// Affine point or the point at infinity
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity (group identity)
    Identity,
    /// A finite point with coordinates in `[0, p)`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Create a finite point from coordinates
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate of a finite point
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate of a finite point
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Decode a point from fixed-width little-endian coordinates
    pub fn from_ec_point(point: &EcPoint) -> Self {
        Point::Affine {
            x: field::from_le_bytes(&point.x),
            y: field::from_le_bytes(&point.y),
        }
    }

    /// Encode a finite point as fixed-width little-endian coordinates
    pub fn to_ec_point(&self, key_size: KeySize) -> Result<EcPoint> {
        match self {
            Point::Identity => Err(Error::Processing {
                operation: "Point::to_ec_point",
                details: "the point at infinity has no affine encoding",
            }),
            Point::Affine { x, y } => Ok(EcPoint::new(
                field::to_fixed_le_bytes(x, key_size.bytes()),
                field::to_fixed_le_bytes(y, key_size.bytes()),
            )),
        }
    }

    /// Additive inverse: (x, p - y)
    pub fn negate(&self, prime: &BigUint) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: sub(&BigUint::zero(), y, prime),
            },
        }
    }

    /// Check that the point satisfies y² = x³ + ax + b (mod p)
    ///
    /// The identity is considered on every curve.
    pub fn is_on_curve(&self, prime: &BigUint, a: &BigUint, b: &BigUint) -> bool {
        match self {
            Point::Identity => true,
            Point::Affine { x, y } => {
                if x >= prime || y >= prime {
                    return false;
                }
                let lhs = square(y, prime);
                let x3 = mul(&square(x, prime), x, prime);
                let rhs = add(&add(&x3, &mul(a, x, prime), prime), b, prime);
                lhs == rhs
            }
        }
    }

    fn to_projective(&self, prime: &BigUint) -> ProjectivePoint {
        match self {
            Point::Identity => ProjectivePoint::identity(),
            Point::Affine { x, y } => ProjectivePoint {
                x: x % prime,
                y: y % prime,
                z: BigUint::one(),
            },
        }
    }
}

/// Affine point addition
///
/// λ = (y₂ − y₁)·(x₂ − x₁)^(p−2), x₃ = λ² − x₁ − x₂, y₃ = λ(x₁ − x₃) − y₁.
/// Equal points are routed to [`point_double`], opposite points give the
/// identity.
pub fn point_add(p1: &Point, p2: &Point, prime: &BigUint, a: &BigUint) -> Point {
    let (x1, y1, x2, y2) = match (p1, p2) {
        (Point::Identity, _) => return p2.clone(),
        (_, Point::Identity) => return p1.clone(),
        (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
            (x1 % prime, y1 % prime, x2 % prime, y2 % prime)
        }
    };

    if x1 == x2 {
        if y1 == y2 {
            return point_double(p1, prime, a);
        }
        return Point::Identity;
    }

    let dy = sub(&y2, &y1, prime);
    let dx = sub(&x2, &x1, prime);
    let lambda = mul(&dy, &field::invert(&dx, prime), prime);
    let x3 = sub(&sub(&square(&lambda, prime), &x1, prime), &x2, prime);
    let y3 = sub(&mul(&lambda, &sub(&x1, &x3, prime), prime), &y1, prime);

    Point::Affine { x: x3, y: y3 }
}

/// Affine point doubling
///
/// λ = (3x² + a)·(2y)^(p−2), x₃ = λ² − 2x, y₃ = λ(x − x₃) − y.
/// A point with y = 0 has order two and doubles to the identity.
pub fn point_double(point: &Point, prime: &BigUint, a: &BigUint) -> Point {
    let (x, y) = match point {
        Point::Identity => return Point::Identity,
        Point::Affine { x, y } => (x % prime, y % prime),
    };
    if y.is_zero() {
        return Point::Identity;
    }

    let numerator = add(&mul(&small(3), &square(&x, prime), prime), a, prime);
    let denominator = mul(&small(2), &y, prime);
    let lambda = mul(&numerator, &field::invert(&denominator, prime), prime);
    let x3 = sub(&square(&lambda, prime), &mul(&small(2), &x, prime), prime);
    let y3 = sub(&mul(&lambda, &sub(&x, &x3, prime), prime), &y, prime);

    Point::Affine { x: x3, y: y3 }
}

/// Scalar multiplication: k·P
///
/// Left-to-right double-and-add in Jacobian coordinates. `k = 0` and the
/// identity input both yield the identity.
pub fn scalar_multiply(point: &Point, k: &BigUint, prime: &BigUint, a: &BigUint) -> Point {
    if k.is_zero() || point.is_identity() {
        return Point::Identity;
    }

    let base = point.to_projective(prime);
    let mut acc = ProjectivePoint::identity();
    for i in (0..k.bits()).rev() {
        acc = acc.double(prime, a);
        if k.bit(i) {
            acc = acc.add(&base, prime, a);
        }
    }
    acc.to_affine(prime)
}

/// Jacobian coordinates (X:Y:Z) with x = X/Z² and y = Y/Z³; Z = 0 is the identity
#[derive(Clone, Debug)]
struct ProjectivePoint {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl ProjectivePoint {
    /// Identity in Jacobian form: (1 : 1 : 0)
    fn identity() -> Self {
        ProjectivePoint {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    fn add(&self, other: &Self, p: &BigUint, a: &BigUint) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        // Z₁², Z₂², Z₁³, Z₂³
        let z1_sq = square(&self.z, p);
        let z2_sq = square(&other.z, p);
        let z1_cu = mul(&z1_sq, &self.z, p);
        let z2_cu = mul(&z2_sq, &other.z, p);

        let u1 = mul(&self.x, &z2_sq, p); // X₁·Z₂²
        let u2 = mul(&other.x, &z1_sq, p); // X₂·Z₁²
        let s1 = mul(&self.y, &z2_cu, p); // Y₁·Z₂³
        let s2 = mul(&other.y, &z1_cu, p); // Y₂·Z₁³

        let h = sub(&u2, &u1, p);
        let r = sub(&s2, &s1, p);

        if h.is_zero() {
            if r.is_zero() {
                return self.double(p, a);
            }
            return ProjectivePoint::identity();
        }

        let h2 = square(&h, p);
        let h3 = mul(&h2, &h, p);
        let v = mul(&u1, &h2, p);

        // X₃ = r² − h³ − 2v
        let x3 = sub(&sub(&square(&r, p), &h3, p), &add(&v, &v, p), p);
        // Y₃ = r·(v − X₃) − s₁·h³
        let y3 = sub(&mul(&r, &sub(&v, &x3, p), p), &mul(&s1, &h3, p), p);
        // Z₃ = Z₁·Z₂·h
        let z3 = mul(&mul(&self.z, &other.z, p), &h, p);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn double(&self, p: &BigUint, a: &BigUint) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return ProjectivePoint::identity();
        }

        //   XX = X², YY = Y², ZZ = Z²
        //   S  = 4·X·YY
        //   M  = 3·XX + a·ZZ²
        let xx = square(&self.x, p);
        let yy = square(&self.y, p);
        let zz = square(&self.z, p);
        let s = mul(&small(4), &mul(&self.x, &yy, p), p);
        let m = add(&mul(&small(3), &xx, p), &mul(a, &square(&zz, p), p), p);

        // X₃ = M² − 2S
        let x3 = sub(&square(&m, p), &add(&s, &s, p), p);
        // Y₃ = M·(S − X₃) − 8·YY²
        let y3 = sub(
            &mul(&m, &sub(&s, &x3, p), p),
            &mul(&small(8), &square(&yy, p), p),
            p,
        );
        // Z₃ = 2·Y·Z
        let z3 = mul(&small(2), &mul(&self.y, &self.z, p), p);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn to_affine(&self, p: &BigUint) -> Point {
        if self.is_identity() {
            return Point::Identity;
        }
        let z_inv = field::invert(&self.z, p);
        let z_inv_sq = square(&z_inv, p);
        let z_inv_cu = mul(&z_inv_sq, &z_inv, p);
        Point::Affine {
            x: mul(&self.x, &z_inv_sq, p),
            y: mul(&self.y, &z_inv_cu, p),
        }
    }
}
