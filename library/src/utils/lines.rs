//! Line-oriented value reader.

use std::io::BufRead;

/// The error type for reading line-oriented data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A [`std::io::Error`], including invalid UTF-8 input.
    #[error("{0}")]
    IO(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// A line that could not be parsed into a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    /// 0-based line number.
    pub row: usize,
    /// Line contents with surrounding whitespace removed.
    pub text: String,
}

/// Values parsed from a line source, plus the lines that were skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedLines<T> {
    pub values: Vec<T>,
    pub skipped: Vec<SkippedLine>,
}

impl<T> Default for ParsedLines<T> {
    fn default() -> Self {
        Self {
            values: vec![],
            skipped: vec![],
        }
    }
}

/// Parses every line of the input with `parse`, which gets the trimmed line.
/// Lines it rejects are logged and skipped.
///
/// # Examples
///
/// ```ignore
/// use filecrunch::utils::read_values;
///
/// let parsed = read_values("1\nx\n3".as_bytes(), |s| s.parse::<u8>().ok())?;
/// assert_eq!(parsed.values, vec![1, 3]);
/// assert_eq!(parsed.skipped[0].row, 1);
/// ```
pub fn read_values<T>(
    reader: impl BufRead,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> Result<ParsedLines<T>> {
    let mut parsed = ParsedLines::default();
    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        match parse(text) {
            Some(value) => parsed.values.push(value),
            None => {
                tracing::warn!("Invalid data found and skipped: {}", text);
                parsed.skipped.push(SkippedLine {
                    row,
                    text: text.to_string(),
                });
            }
        }
    }
    tracing::debug!(
        valid = parsed.values.len(),
        skipped = parsed.skipped.len(),
        "finished reading lines"
    );
    Ok(parsed)
}
