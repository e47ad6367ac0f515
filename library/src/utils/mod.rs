//! Helper functions and macros.

mod digits;
mod exit;
mod float;
mod lines;
pub mod macros;
mod timing;

pub use digits::strip_digit_separators;

pub use exit::*;

pub use float::format_float;

pub use lines::read_values;
pub use lines::Error as ReadError;
pub use lines::{ParsedLines, SkippedLine};

pub use timing::{execution_time_line, write_execution_time};
