//! Elliptic curve value types exchanged at the public boundary
//!
//! All field elements are fixed-width little-endian unsigned byte buffers of
//! `key_size / 8` bytes. These types are plain owned values: cloning one is a
//! deep copy, so a caller can never observe mutation of state held elsewhere.

use gostec_api::{validate, Error, KeySize, Result};
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::security::SecretVec;

/// Point on an elliptic curve in affine coordinates
#[derive(Clone, Debug, Default, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EcPoint {
    pub x: Vec<u8>,
    pub y: Vec<u8>,
}

impl EcPoint {
    /// Create a new affine point (x, y)
    pub fn new(x: Vec<u8>, y: Vec<u8>) -> Self {
        Self { x, y }
    }

    /// Overwrite both coordinates with zeros, keeping their lengths
    pub fn erase(&mut self) {
        self.x.as_mut_slice().zeroize();
        self.y.as_mut_slice().zeroize();
    }

    /// Check that both coordinates are present and exactly `len` bytes wide
    pub fn validate(&self, context: &'static str, len: usize) -> Result<()> {
        validate::non_empty(context, "point x coordinate", &self.x)?;
        validate::non_empty(context, "point y coordinate", &self.y)?;
        validate::length(context, self.x.len(), len)?;
        validate::length(context, self.y.len(), len)
    }
}

/// Elliptic curve parameters in short Weierstrass form: y^2 = x^3 + ax + b
#[derive(Clone, Debug, Default, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EcCurve {
    /// The prime field modulus
    pub prime: Vec<u8>,

    /// The 'a' coefficient
    pub a: Vec<u8>,

    /// The 'b' coefficient
    pub b: Vec<u8>,

    /// Generator point
    pub g: EcPoint,

    /// The order of the curve
    pub order: Vec<u8>,

    /// The cofactor; treated as 1 when absent
    pub cofactor: Option<Vec<u8>>,
}

impl EcCurve {
    /// Key size implied by the width of the prime
    pub fn key_size(&self) -> Result<KeySize> {
        validate::non_empty("EcCurve", "prime", &self.prime)?;
        KeySize::from_bytes_len(self.prime.len())
    }

    /// Structural validation
    ///
    /// Checks that every required buffer is present, that the prime,
    /// coefficients and generator have exactly the key width, and that the
    /// order and cofactor fit in it and are non-zero. No primality or
    /// on-curve checks are performed here.
    pub fn validate(&self) -> Result<KeySize> {
        let key_size = self.key_size()?;
        let len = key_size.bytes();

        validate::non_empty("EcCurve", "a", &self.a)?;
        validate::non_empty("EcCurve", "b", &self.b)?;
        validate::non_empty("EcCurve", "order", &self.order)?;
        validate::length("EcCurve a", self.a.len(), len)?;
        validate::length("EcCurve b", self.b.len(), len)?;
        self.g.validate("EcCurve generator", len)?;

        validate::max_length("EcCurve order", self.order.len(), len)?;
        if is_zero(&self.order) {
            return Err(Error::argument("EcCurve", "order must not be zero"));
        }

        if let Some(cofactor) = &self.cofactor {
            validate::non_empty("EcCurve", "cofactor", cofactor)?;
            validate::max_length("EcCurve cofactor", cofactor.len(), len)?;
            if is_zero(cofactor) {
                return Err(Error::argument("EcCurve", "cofactor must not be zero"));
            }
        }

        Ok(key_size)
    }

    /// Overwrite every buffer with zeros, keeping their lengths
    pub fn erase(&mut self) {
        self.prime.as_mut_slice().zeroize();
        self.a.as_mut_slice().zeroize();
        self.b.as_mut_slice().zeroize();
        self.order.as_mut_slice().zeroize();
        if let Some(cofactor) = self.cofactor.as_mut() {
            cofactor.as_mut_slice().zeroize();
        }
        self.g.erase();
    }

    /// Whether every buffer has been overwritten with zeros
    pub fn is_erased(&self) -> bool {
        is_zero(&self.prime)
            && is_zero(&self.a)
            && is_zero(&self.b)
            && is_zero(&self.order)
            && self.cofactor.as_deref().map_or(true, is_zero)
            && is_zero(&self.g.x)
            && is_zero(&self.g.y)
    }
}

/// Full parameter set: curve, public point Q and optional private scalar D
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EcParameters {
    pub curve: EcCurve,
    pub q: EcPoint,
    pub d: Option<SecretVec>,
}

impl EcParameters {
    /// Structural validation
    ///
    /// The public point's coordinate width determines the key size; the
    /// curve and the private scalar, when present, must agree with it.
    pub fn validate(&self) -> Result<KeySize> {
        validate::non_empty("EcParameters", "public key x coordinate", &self.q.x)?;
        let key_size = KeySize::from_bytes_len(self.q.x.len())?;
        let len = key_size.bytes();

        self.q.validate("EcParameters public key", len)?;
        let curve_size = self.curve.validate()?;
        if curve_size != key_size {
            return Err(Error::InvalidLength {
                context: "EcParameters curve",
                expected: len,
                actual: curve_size.bytes(),
            });
        }

        if let Some(d) = &self.d {
            validate::non_empty("EcParameters", "private key", d.as_slice())?;
            validate::length("EcParameters private key", d.len(), len)?;
        }

        Ok(key_size)
    }
}

fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curve(len: usize) -> EcCurve {
        EcCurve {
            prime: vec![0xff; len],
            a: vec![0x01; len],
            b: vec![0x02; len],
            g: EcPoint::new(vec![0x03; len], vec![0x04; len]),
            order: vec![0x05; len],
            cofactor: Some(vec![0x01]),
        }
    }

    #[test]
    fn test_curve_validate_ok() {
        assert_eq!(sample_curve(32).validate(), Ok(KeySize::Bits256));
        assert_eq!(sample_curve(64).validate(), Ok(KeySize::Bits512));
    }

    #[test]
    fn test_curve_validate_rejects_bad_widths() {
        assert_eq!(
            sample_curve(48).validate(),
            Err(Error::InvalidKeySize { bits: 384 })
        );

        let mut curve = sample_curve(32);
        curve.a.pop();
        assert!(matches!(
            curve.validate(),
            Err(Error::InvalidLength { expected: 32, actual: 31, .. })
        ));

        let mut curve = sample_curve(32);
        curve.b.clear();
        assert!(matches!(curve.validate(), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_curve_validate_rejects_zero_order() {
        let mut curve = sample_curve(32);
        curve.order = vec![0; 32];
        assert!(matches!(curve.validate(), Err(Error::InvalidArgument { .. })));

        let mut curve = sample_curve(32);
        curve.cofactor = Some(vec![0]);
        assert!(matches!(curve.validate(), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_curve_erase() {
        let mut curve = sample_curve(32);
        assert!(!curve.is_erased());
        curve.erase();
        assert!(curve.is_erased());
        assert_eq!(curve.prime.len(), 32);
        assert_eq!(curve.g.y.len(), 32);
    }

    #[test]
    fn test_parameters_key_size_from_public_point() {
        let params = EcParameters {
            curve: sample_curve(64),
            q: EcPoint::new(vec![0x07; 64], vec![0x08; 64]),
            d: Some(SecretVec::new(vec![0x09; 64])),
        };
        assert_eq!(params.validate(), Ok(KeySize::Bits512));

        let mismatched = EcParameters {
            curve: sample_curve(32),
            ..params.clone()
        };
        assert!(matches!(
            mismatched.validate(),
            Err(Error::InvalidLength { .. })
        ));

        let short_key = EcParameters {
            d: Some(SecretVec::new(vec![0x09; 63])),
            ..params
        };
        assert!(matches!(
            short_key.validate(),
            Err(Error::InvalidLength { expected: 64, actual: 63, .. })
        ));
    }
}
