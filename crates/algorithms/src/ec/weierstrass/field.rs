//! Prime-field helpers over unsigned big integers

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Fold a signed value into the non-negative range
///
/// Returns `value` unchanged when it is non-negative, otherwise
/// `value + modulus` (reduced further if `value < -modulus`).
pub fn normalize(value: &BigInt, modulus: &BigUint) -> BigUint {
    if value.sign() != Sign::Minus {
        return value.magnitude().clone();
    }
    let rem = value.magnitude() % modulus;
    if rem.is_zero() {
        BigUint::zero()
    } else {
        modulus - rem
    }
}

/// Interpret a little-endian two's-complement buffer as an unsigned field element
///
/// A buffer with its top bit set decodes to a negative integer, which is
/// folded back by adding `2^(8 * len)`.
pub fn from_signed_le_bytes(bytes: &[u8]) -> BigUint {
    let modulus = BigUint::one() << (8 * bytes.len());
    normalize(&BigInt::from_signed_bytes_le(bytes), &modulus)
}

/// Interpret a little-endian buffer as an unsigned integer
#[inline]
pub fn from_le_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Encode `value` as exactly `len` little-endian bytes
///
/// Shorter values are zero-padded; bytes beyond `len` are dropped, so callers
/// must only pass values below `2^(8 * len)` when they need an exact encoding.
pub fn to_fixed_le_bytes(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_le();
    let mut out = vec![0u8; len];
    let n = bytes.len().min(len);
    out[..n].copy_from_slice(&bytes[..n]);
    out
}

/// Modular inverse by Fermat's little theorem: `value^(prime - 2) mod prime`
///
/// Only valid when `prime` is prime; no primality check is made.
pub fn mod_inverse(value: &BigUint, prime: &BigUint) -> Result<BigUint> {
    if prime <= &BigUint::from(2u32) {
        return Err(Error::param("prime", "modulus must be an odd prime"));
    }
    let value = value % prime;
    if value.is_zero() {
        return Err(Error::Processing {
            operation: "mod_inverse",
            details: "zero has no inverse",
        });
    }
    Ok(invert(&value, prime))
}

/// Fermat inverse of a value already known to be non-zero mod `prime`
#[inline]
pub(crate) fn invert(value: &BigUint, prime: &BigUint) -> BigUint {
    let exponent = prime - 2u32;
    value.modpow(&exponent, prime)
}

#[inline]
pub(crate) fn add(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

#[inline]
pub(crate) fn sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a % p) + p - (b % p)) % p
}

#[inline]
pub(crate) fn mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

#[inline]
pub(crate) fn square(a: &BigUint, p: &BigUint) -> BigUint {
    (a * a) % p
}

#[inline]
pub(crate) fn small(value: u32) -> BigUint {
    BigUint::from(value)
}
