//! Core types for the gostec library

use core::fmt;

use crate::{Error, Result};

/// Key sizes supported by the GOST R 34.10-2012 engines
///
/// The key size fixes the width of every field element, scalar, hash and
/// signature half handled by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeySize {
    /// 256-bit keys (32-byte field elements)
    Bits256,
    /// 512-bit keys (64-byte field elements)
    #[default]
    Bits512,
}

impl KeySize {
    /// Parse a key size given in bits
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            256 => Ok(Self::Bits256),
            512 => Ok(Self::Bits512),
            _ => Err(Error::InvalidKeySize { bits }),
        }
    }

    /// Derive the key size from a field-element byte length
    pub fn from_bytes_len(len: usize) -> Result<Self> {
        Self::from_bits(len * 8)
    }

    /// Key size in bits
    pub const fn bits(self) -> usize {
        match self {
            Self::Bits256 => 256,
            Self::Bits512 => 512,
        }
    }

    /// Width of a field element in bytes
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Width of an `s || r` signature in bytes
    pub const fn signature_len(self) -> usize {
        self.bits() / 4
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

impl TryFrom<usize> for KeySize {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        Self::from_bits(bits)
    }
}
