//! Number encodings, descriptive statistics and word counts for
//! line-oriented data files.

pub mod numconv;
pub mod stats;
pub mod utils;
pub mod words;
