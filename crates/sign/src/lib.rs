//! Digital signatures per GOST R 34.10-2012
//!
//! This crate provides the stateful [`GostEcdsa`] engine, the catalog of
//! named TC26 curves and the `xmldsig-more` XML codec for explicit domain
//! parameters.

#![forbid(unsafe_code)]

pub mod traditional;

pub use traditional::gost::{curves, xml, GostEcdsa};
