//! Shared helpers

pub mod currency;
