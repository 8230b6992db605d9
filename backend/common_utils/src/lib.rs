//! Utilities shared by the WorldNet TPS connector service crates: keyed
//! hashing, amount conversion, gateway timestamp rendering, XML parsing
//! helpers and request primitives.

pub mod consts;
pub mod crypto;
pub mod date_time;
pub mod errors;
pub mod ext_traits;
pub mod pii;
pub mod request;
pub mod types;

pub use errors::CustomResult;
pub use request::Method;
