//! GOST R 34.10-2012 signatures over prime-field curves
//!
//! The engine is a small state machine. It starts without parameters,
//! generates a key pair on the default curve for its key size the first time
//! a signature or an export is requested, and erases every buffer it owns on
//! disposal or drop.
//!
//! Signatures are `s || r`, each half a fixed-width little-endian integer of
//! `key_size / 8` bytes.

pub mod curves;
pub mod xml;

use core::fmt;

use gostec_algorithms::ec::weierstrass::{from_le_bytes, mod_inverse, to_fixed_le_bytes, Point, PrimeCurve};
use gostec_api::{validate, Error, HashSignature, KeySize, Result};
use gostec_common::{EcCurve, EcParameters, EcPoint, SecretVec};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

/// GOST R 34.10-2012 signature engine
///
/// Owns curve parameters, a public point and, unless public-only parameters
/// were imported, a private scalar. Operations take `&mut self`, so a shared
/// engine must be wrapped in a lock by the caller.
pub struct GostEcdsa<R: RngCore + CryptoRng = OsRng> {
    key_size: KeySize,
    state: State,
    rng: R,
}

enum State {
    Uninitialized,
    Parameterized(KeyState),
    Disposed,
}

struct KeyState {
    curve: EcCurve,
    public_key: EcPoint,
    private_key: Option<SecretVec>,
}

impl KeyState {
    /// Zero every buffer in place
    fn erase(&mut self) {
        if let Some(d) = self.private_key.as_mut() {
            d.erase();
        }
        self.curve.erase();
        self.public_key.erase();
    }
}

impl GostEcdsa<OsRng> {
    /// Create an engine for a key size of 256 or 512 bits
    pub fn new(key_size_bits: usize) -> Result<Self> {
        Ok(Self::with_rng(KeySize::from_bits(key_size_bits)?, OsRng))
    }

    /// Create an engine holding the given parameters
    ///
    /// The key size is taken from the width of the public point.
    pub fn from_parameters(parameters: &EcParameters) -> Result<Self> {
        let mut engine = Self::default();
        engine.import_parameters(parameters)?;
        Ok(engine)
    }
}

impl Default for GostEcdsa<OsRng> {
    fn default() -> Self {
        Self::with_rng(KeySize::default(), OsRng)
    }
}

impl<R: RngCore + CryptoRng> GostEcdsa<R> {
    /// Create an engine drawing randomness from `rng`
    pub fn with_rng(key_size: KeySize, rng: R) -> Self {
        Self {
            key_size,
            state: State::Uninitialized,
            rng,
        }
    }

    /// Whether a key pair has been generated or imported
    pub fn is_parameterized(&self) -> bool {
        matches!(self.state, State::Parameterized(_))
    }

    /// Catalog name of the current curve, if it is a named one
    pub fn curve_name(&self) -> Option<&'static str> {
        match &self.state {
            State::Parameterized(keys) => curves::name_of(&keys.curve),
            _ => None,
        }
    }

    /// Export the public parameters as an XML document
    pub fn to_xml_string(&mut self) -> Result<String> {
        let parameters = self.export_parameters(false)?;
        let xml = xml::to_xml(&parameters)?;
        debug!(key_size = self.key_size.bits(), "exported parameters as XML");
        Ok(xml)
    }

    /// Import public parameters from an XML document
    ///
    /// The document is decoded with the engine's current key size.
    pub fn from_xml_string(&mut self, document: &str) -> Result<()> {
        const CONTEXT: &str = "GostEcdsa::from_xml_string";
        self.ensure_live(CONTEXT)?;
        validate::argument(!document.trim().is_empty(), CONTEXT, "document must not be empty")?;
        let parameters = xml::from_xml(document, self.key_size)?;
        self.import_parameters(&parameters)?;
        debug!(key_size = self.key_size.bits(), "imported parameters from XML");
        Ok(())
    }

    fn ensure_live(&self, context: &'static str) -> Result<()> {
        match self.state {
            State::Disposed => Err(Error::Disposed { context }),
            _ => Ok(()),
        }
    }

    /// Generate a key on the default curve if none is present
    fn ensure_keys(&mut self) -> Result<()> {
        if matches!(self.state, State::Uninitialized) {
            let curve = curves::default_curve(self.key_size);
            self.generate_key(&curve)?;
        }
        Ok(())
    }

    /// Zero the current key material in place without changing state
    fn erase_state(&mut self) {
        if let State::Parameterized(keys) = &mut self.state {
            keys.erase();
        }
    }

    /// Erase the key material, mark the engine disposed and pass the zeroed
    /// buffers to `release`
    ///
    /// Does nothing once the engine is disposed.
    fn dispose_with<F: FnOnce(KeyState)>(&mut self, release: F) {
        if matches!(self.state, State::Disposed) {
            return;
        }
        self.erase_state();
        if let State::Parameterized(keys) = core::mem::replace(&mut self.state, State::Disposed) {
            release(keys);
        }
        debug!(key_size = self.key_size.bits(), "disposed engine");
    }
}

impl<R: RngCore + CryptoRng> HashSignature for GostEcdsa<R> {
    type Curve = EcCurve;
    type Parameters = EcParameters;

    fn name() -> &'static str {
        "GOST R 34.10-2012"
    }

    fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Draw d uniformly from (0, q) and compute Q = d·G
    ///
    /// The key size follows the width of the curve's prime. Only structural
    /// checks are made on `curve`.
    fn generate_key(&mut self, curve: &EcCurve) -> Result<()> {
        const CONTEXT: &str = "GostEcdsa::generate_key";
        self.ensure_live(CONTEXT)?;

        let key_size = curve.validate()?;
        let arith = PrimeCurve::from_ec_curve(curve)?;
        let q = arith.subgroup_order();

        let d = random_scalar(&mut self.rng, key_size.bytes(), &q, CONTEXT)?;
        let public_key = arith.mul_generator(&d).to_ec_point(key_size)?;
        let private_key = SecretVec::new(to_fixed_le_bytes(&d, key_size.bytes()));

        self.erase_state();
        self.key_size = key_size;
        self.state = State::Parameterized(KeyState {
            curve: curve.clone(),
            public_key,
            private_key: Some(private_key),
        });

        debug!(
            key_size = key_size.bits(),
            curve = curves::name_of(curve).unwrap_or("explicit"),
            "generated key pair"
        );
        Ok(())
    }

    fn export_parameters(&mut self, include_private: bool) -> Result<EcParameters> {
        const CONTEXT: &str = "GostEcdsa::export_parameters";
        self.ensure_live(CONTEXT)?;
        self.ensure_keys()?;

        let keys = key_state(&self.state, CONTEXT)?;
        Ok(EcParameters {
            curve: keys.curve.clone(),
            q: keys.public_key.clone(),
            d: if include_private {
                keys.private_key.clone()
            } else {
                None
            },
        })
    }

    fn import_parameters(&mut self, parameters: &EcParameters) -> Result<()> {
        const CONTEXT: &str = "GostEcdsa::import_parameters";
        self.ensure_live(CONTEXT)?;

        let key_size = parameters.validate()?;

        self.erase_state();
        self.key_size = key_size;
        self.state = State::Parameterized(KeyState {
            curve: parameters.curve.clone(),
            public_key: parameters.q.clone(),
            private_key: parameters.d.clone(),
        });

        debug!(
            key_size = key_size.bits(),
            curve = curves::name_of(&parameters.curve).unwrap_or("explicit"),
            private = parameters.d.is_some(),
            "imported parameters"
        );
        Ok(())
    }

    /// Sign a hash of exactly `key_size / 8` bytes
    ///
    /// e = hash mod q (1 when that is zero). For a fresh k in (0, q):
    /// r = (k·G).x mod q and s = (r·d + k·e) mod q, redrawing k whenever
    /// r or s is zero.
    fn sign_hash(&mut self, hash: &[u8]) -> Result<Vec<u8>> {
        const CONTEXT: &str = "GostEcdsa::sign_hash";
        self.ensure_live(CONTEXT)?;
        let len = self.key_size.bytes();
        validate::length(CONTEXT, hash.len(), len)?;
        self.ensure_keys()?;

        let keys = key_state(&self.state, CONTEXT)?;
        let d = keys
            .private_key
            .as_ref()
            .ok_or_else(|| Error::key(CONTEXT, "parameters hold no private key"))?;
        let d = from_le_bytes(d.as_slice());

        let curve = PrimeCurve::from_ec_curve(&keys.curve)?;
        let q = curve.subgroup_order();
        let e = hash_to_scalar(hash, &q);

        loop {
            let k = random_scalar(&mut self.rng, len, &q, CONTEXT)?;

            let r = match curve.mul_generator(&k).x() {
                Some(x) => x % &q,
                None => BigUint::zero(),
            };
            if r.is_zero() {
                trace!("r is zero, drawing a new nonce");
                continue;
            }

            let s = (&r * &d + &k * &e) % &q;
            if s.is_zero() {
                trace!("s is zero, drawing a new nonce");
                continue;
            }

            let mut signature = to_fixed_le_bytes(&s, len);
            signature.extend_from_slice(&to_fixed_le_bytes(&r, len));
            return Ok(signature);
        }
    }

    /// Verify an `s || r` signature over a hash
    ///
    /// Returns `Ok(false)` when no parameters are present, when s or r lies
    /// outside [1, q], or when the check fails. With v = e⁻¹ mod q,
    /// z1 = s·v and z2 = (q − r)·v, the signature is valid iff
    /// (z1·G + z2·Q).x mod q = r.
    fn verify_hash(&self, hash: &[u8], signature: &[u8]) -> Result<bool> {
        const CONTEXT: &str = "GostEcdsa::verify_hash";
        self.ensure_live(CONTEXT)?;
        let len = self.key_size.bytes();
        validate::length(CONTEXT, hash.len(), len)?;
        validate::length(CONTEXT, signature.len(), self.key_size.signature_len())?;

        let keys = match &self.state {
            State::Parameterized(keys) => keys,
            _ => return Ok(false),
        };

        let curve = PrimeCurve::from_ec_curve(&keys.curve)?;
        let q = curve.subgroup_order();

        let (s, r) = signature.split_at(len);
        let s = from_le_bytes(s);
        let r = from_le_bytes(r);
        let in_range = |v: &BigUint| !v.is_zero() && v <= &q;
        if !in_range(&s) || !in_range(&r) {
            return Ok(false);
        }

        let e = hash_to_scalar(hash, &q);
        let v = mod_inverse(&e, &q)?;
        let z1 = (&s * &v) % &q;
        let z2 = ((&q - &r) * &v) % &q;

        let public_key = Point::from_ec_point(&keys.public_key);
        let c = curve.add(&curve.mul_generator(&z1), &curve.mul(&public_key, &z2));

        Ok(match c.x() {
            Some(x) => x % &q == r,
            None => false,
        })
    }

    fn dispose(&mut self) {
        self.dispose_with(drop);
    }

    fn is_disposed(&self) -> bool {
        matches!(self.state, State::Disposed)
    }
}

impl<R: RngCore + CryptoRng> Drop for GostEcdsa<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<R: RngCore + CryptoRng> fmt::Debug for GostEcdsa<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Uninitialized => "uninitialized",
            State::Parameterized(_) => "parameterized",
            State::Disposed => "disposed",
        };
        f.debug_struct("GostEcdsa")
            .field("key_size", &self.key_size)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

fn key_state<'a>(state: &'a State, context: &'static str) -> Result<&'a KeyState> {
    match state {
        State::Parameterized(keys) => Ok(keys),
        State::Disposed => Err(Error::Disposed { context }),
        State::Uninitialized => Err(Error::key(context, "no key has been generated or imported")),
    }
}

/// e = hash mod q, with zero replaced by one
fn hash_to_scalar(hash: &[u8], q: &BigUint) -> BigUint {
    let e = from_le_bytes(hash) % q;
    if e.is_zero() {
        BigUint::one()
    } else {
        e
    }
}

/// Rejection-sample a scalar in (0, upper) from `len` random bytes
fn random_scalar<R: RngCore + CryptoRng>(
    rng: &mut R,
    len: usize,
    upper: &BigUint,
    context: &'static str,
) -> Result<BigUint> {
    let mut buf = SecretVec::zeroed(len);
    loop {
        rng.try_fill_bytes(buf.as_mut_slice())
            .map_err(|e| Error::RandomGeneration {
                context,
                message: e.to_string(),
            })?;

        let candidate = from_le_bytes(buf.as_slice());
        if !candidate.is_zero() && &candidate < upper {
            return Ok(candidate);
        }
        trace!(operation = context, "scalar out of range, redrawing");
    }
}
