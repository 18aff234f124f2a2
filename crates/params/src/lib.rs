//! Constant values for the gostec library
//!
//! This crate only holds compile-time data and has no dependencies.

pub mod traditional;
