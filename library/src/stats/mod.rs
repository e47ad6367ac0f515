//! Descriptive statistics module.

mod core;
pub mod io;

pub use self::core::*;
