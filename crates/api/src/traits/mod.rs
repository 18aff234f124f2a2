//! Trait definitions for gostec engines

pub mod signature;
