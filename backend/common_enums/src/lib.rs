//! Enums shared across the WorldNet TPS connector service crates.

pub mod enums;

pub use enums::*;
