use gostec_api::KeySize;
use gostec_common::EcCurve;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::field;
use super::point::{point_add, point_double, scalar_multiply, Point};
use crate::error::{Error, Result};

/// Decoded curve parameters ready for arithmetic
///
/// Built from the little-endian [`EcCurve`] wire form. The prime order of
/// the base point subgroup is `order / cofactor`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeCurve {
    /// Field prime p
    pub prime: BigUint,
    /// Coefficient a
    pub a: BigUint,
    /// Coefficient b
    pub b: BigUint,
    /// Base point G
    pub generator: Point,
    /// Group order
    pub order: BigUint,
    /// Cofactor h (1 when absent)
    pub cofactor: BigUint,
    key_size: KeySize,
}

impl PrimeCurve {
    /// Decode and structurally validate an [`EcCurve`]
    ///
    /// Widths are checked by [`EcCurve::validate`]. Beyond that only
    /// arithmetic preconditions are enforced: p > 3 and a subgroup order of
    /// at least 2, so that (0, q) holds a scalar. Primality and the curve equation for G are not checked here;
    /// see [`PrimeCurve::generator_on_curve`].
    pub fn from_ec_curve(curve: &EcCurve) -> Result<Self> {
        let key_size = curve.validate().map_err(|e| Error::Parameter {
            name: "curve".into(),
            reason: e.to_string().into(),
        })?;

        let prime = field::from_le_bytes(&curve.prime);
        if prime <= BigUint::from(3u32) {
            return Err(Error::param("prime", "field prime must be greater than 3"));
        }

        let cofactor = match &curve.cofactor {
            Some(h) => field::from_le_bytes(h),
            None => BigUint::one(),
        };
        if cofactor.is_zero() {
            return Err(Error::param("cofactor", "cofactor must be non-zero"));
        }

        let order = field::from_le_bytes(&curve.order);
        if &order / &cofactor < BigUint::from(2u32) {
            return Err(Error::param("order", "subgroup order must be at least 2"));
        }

        Ok(PrimeCurve {
            a: field::from_le_bytes(&curve.a) % &prime,
            b: field::from_le_bytes(&curve.b) % &prime,
            generator: Point::from_ec_point(&curve.g),
            prime,
            order,
            cofactor,
            key_size,
        })
    }

    /// Key size implied by the parameter widths
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Prime order q of the base point subgroup
    pub fn subgroup_order(&self) -> BigUint {
        &self.order / &self.cofactor
    }

    /// P + Q on this curve
    pub fn add(&self, p: &Point, q: &Point) -> Point {
        point_add(p, q, &self.prime, &self.a)
    }

    /// 2P on this curve
    pub fn double(&self, p: &Point) -> Point {
        point_double(p, &self.prime, &self.a)
    }

    /// k·P on this curve
    pub fn mul(&self, p: &Point, k: &BigUint) -> Point {
        scalar_multiply(p, k, &self.prime, &self.a)
    }

    /// k·G
    pub fn mul_generator(&self, k: &BigUint) -> Point {
        self.mul(&self.generator, k)
    }

    /// Does `p` satisfy the curve equation?
    pub fn is_on_curve(&self, p: &Point) -> bool {
        p.is_on_curve(&self.prime, &self.a, &self.b)
    }

    /// Does the base point satisfy the curve equation?
    pub fn generator_on_curve(&self) -> bool {
        self.is_on_curve(&self.generator)
    }
}
