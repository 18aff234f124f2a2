//! # gostec
//!
//! GOST R 34.10-2012 elliptic curve signatures over prime fields.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gostec = "0.3"
//! ```
//!
//! ```
//! use gostec::prelude::*;
//!
//! let mut signer = GostEcdsa::new(256)?;
//! let hash = [0x42u8; 32];
//! let signature = signer.sign_hash(&hash)?;
//! assert!(signer.verify_hash(&hash, &signature)?);
//!
//! let document = signer.to_xml_string()?;
//! let mut verifier = GostEcdsa::new(256)?;
//! verifier.from_xml_string(&document)?;
//! assert!(verifier.verify_hash(&hash, &signature)?);
//! # Ok::<(), gostec::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the curve and point value types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `gostec-api`: error type, key sizes and the `HashSignature` trait
//! - `gostec-common`: curve, point and parameter value types; secret buffers
//! - `gostec-params`: TC26 curve constants
//! - `gostec-algorithms`: prime-field point arithmetic
//! - `gostec-sign`: the signature engine and the XML codec

pub use gostec_algorithms as algorithms;
pub use gostec_api as api;
pub use gostec_common as common;
pub use gostec_params as params;
pub use gostec_sign as sign;

pub use rand;

/// Common imports for gostec users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and types
    pub use crate::api::{HashSignature, KeySize};

    // Re-export value types
    pub use crate::common::{EcCurve, EcParameters, EcPoint, SecretVec};

    // Re-export the engine
    pub use crate::sign::{curves, GostEcdsa};
}
