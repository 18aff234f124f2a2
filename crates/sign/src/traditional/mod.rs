//! Signature schemes over classical elliptic curves

pub mod gost;

pub use gost::GostEcdsa;
