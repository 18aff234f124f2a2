//! Hash-signature engine trait
//!
//! GOST R 34.10 engines are stateful: they own curve parameters and a private
//! scalar, generate a key lazily on first use, and erase their secrets on
//! disposal. This trait captures that lifecycle so that callers can be
//! written against any engine.

use crate::{KeySize, Result};

/// Core trait for stateful hash-signature engines
///
/// # Lifecycle
///
/// A fresh engine holds no parameters. `sign_hash` and `export_parameters`
/// generate a key pair on the default curve for the configured key size the
/// first time they are called; `verify_hash` never does. After `dispose`
/// every operation except `dispose` itself fails with
/// [`Error::Disposed`](crate::Error::Disposed).
pub trait HashSignature {
    /// Curve description accepted by [`generate_key`](Self::generate_key)
    type Curve;

    /// Exported/imported parameter set (curve, public point, optional private scalar)
    type Parameters;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Currently configured key size
    fn key_size(&self) -> KeySize;

    /// Generate a new key pair on the given curve, replacing any prior state
    fn generate_key(&mut self, curve: &Self::Curve) -> Result<()>;

    /// Export a deep copy of the current parameters
    ///
    /// The private scalar is only included when `include_private` is set.
    fn export_parameters(&mut self, include_private: bool) -> Result<Self::Parameters>;

    /// Import parameters, replacing any prior state
    fn import_parameters(&mut self, parameters: &Self::Parameters) -> Result<()>;

    /// Sign a hash whose width equals the key size in bytes
    fn sign_hash(&mut self, hash: &[u8]) -> Result<Vec<u8>>;

    /// Verify a signature over a hash
    ///
    /// Malformed calls (wrong widths) are errors; cryptographically invalid
    /// signatures return `Ok(false)`.
    fn verify_hash(&self, hash: &[u8], signature: &[u8]) -> Result<bool>;

    /// Erase all key material; idempotent
    fn dispose(&mut self);

    /// Whether [`dispose`](Self::dispose) has been called
    fn is_disposed(&self) -> bool;
}
