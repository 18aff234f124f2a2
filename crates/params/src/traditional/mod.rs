//! Constants for traditional signature algorithms

pub mod gost;
