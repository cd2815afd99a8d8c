//! Shared helpers for identifier and name normalization.

pub mod normalize;
