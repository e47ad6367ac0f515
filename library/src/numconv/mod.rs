//! Integer encoding module.
//!
//! Encodes arbitrary-precision integers as a fixed-width two's-complement
//! binary field and as hexadecimal digits.

mod core;
pub mod io;

pub use self::core::*;

pub use num_bigint::BigInt;
