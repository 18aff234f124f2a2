//! Named-curve catalog
//!
//! Every lookup builds a fresh [`EcCurve`] from the constant tables in
//! `gostec-params`, so callers own what they receive and can never mutate a
//! catalog entry.

use gostec_api::{Error, KeySize, Result};
use gostec_common::{EcCurve, EcPoint};
use gostec_params::traditional::gost::{GostCurveParams, ALL_CURVES, DEFAULT_256, DEFAULT_512};

/// Every catalog entry, 256-bit first
pub fn all() -> &'static [GostCurveParams] {
    &ALL_CURVES
}

/// Find catalog parameters by registered name or OID
pub fn find(name_or_oid: &str) -> Option<&'static GostCurveParams> {
    ALL_CURVES
        .iter()
        .find(|c| c.name == name_or_oid || c.oid == name_or_oid)
}

/// Default curve for a key size
pub fn default_curve(key_size: KeySize) -> EcCurve {
    to_ec_curve(default_params(key_size))
}

/// Default catalog entry for a key size
pub fn default_params(key_size: KeySize) -> &'static GostCurveParams {
    match key_size {
        KeySize::Bits256 => &DEFAULT_256,
        KeySize::Bits512 => &DEFAULT_512,
    }
}

/// Look up a curve by key size and optional name or OID
///
/// `None` selects the default curve for the key size. An unknown name is an
/// `InvalidArgument` error; a known name of a different size is an
/// `InvalidKeySize` error.
pub fn named_curve(key_size: KeySize, name_or_oid: Option<&str>) -> Result<EcCurve> {
    let Some(name) = name_or_oid else {
        return Ok(default_curve(key_size));
    };

    let params = find(name)
        .ok_or_else(|| Error::argument("curve catalog", format!("unknown curve '{}'", name)))?;
    if params.key_size != key_size.bits() {
        return Err(Error::InvalidKeySize {
            bits: params.key_size,
        });
    }
    Ok(to_ec_curve(params))
}

/// Look up a curve by name or OID alone
pub fn curve_by_name(name_or_oid: &str) -> Result<EcCurve> {
    find(name_or_oid)
        .map(to_ec_curve)
        .ok_or_else(|| Error::argument("curve catalog", format!("unknown curve '{}'", name_or_oid)))
}

/// Name of the catalog entry with exactly these domain parameters, if any
pub fn name_of(curve: &EcCurve) -> Option<&'static str> {
    ALL_CURVES
        .iter()
        .find(|c| {
            c.p == curve.prime.as_slice()
                && c.a == curve.a.as_slice()
                && c.b == curve.b.as_slice()
                && c.g_x == curve.g.x.as_slice()
                && c.g_y == curve.g.y.as_slice()
        })
        .map(|c| c.name)
}

/// Expand constant tables into an owned curve with a full-width cofactor
pub fn to_ec_curve(params: &GostCurveParams) -> EcCurve {
    let len = params.key_size / 8;
    let mut cofactor = vec![0u8; len];
    let h = params.h.to_le_bytes();
    cofactor[..h.len()].copy_from_slice(&h);

    EcCurve {
        prime: params.p.to_vec(),
        a: params.a.to_vec(),
        b: params.b.to_vec(),
        g: EcPoint::new(params.g_x.to_vec(), params.g_y.to_vec()),
        order: params.n.to_vec(),
        cofactor: Some(cofactor),
    }
}
