//! Word frequency module.

mod core;
pub mod io;

pub use self::core::*;
