//! Float list reading and statistics report writing.

use std::io::{BufRead, Write};

use crate::{
    stats::Statistics,
    utils::{read_values, strip_digit_separators, ParsedLines, ReadError},
};

/// Default name of the statistics report file.
pub const DEFAULT_REPORT_NAME: &str = "StatisticsResults.txt";

/// Parses a float in decimal, exponent, `inf` or `nan` form.
///
/// Digits may be grouped with single underscores placed between two digits
/// (`1_000.5`). Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```ignore
/// use filecrunch::stats::io::parse_float;
///
/// assert_eq!(parse_float("1_000.5"), Some(1000.5));
/// assert_eq!(parse_float("1_.5"), None);
/// ```
pub fn parse_float(text: &str) -> Option<f64> {
    strip_digit_separators(text.trim())?.parse().ok()
}

/// Provides static methods for reading float lists.
#[derive(Debug, Default)]
pub struct FloatReader {}

impl FloatReader {
    /// Reads one float per line. Other lines are logged and skipped.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use filecrunch::stats::io::FloatReader;
    ///
    /// let parsed = FloatReader::read_file("1.5\nabc\n-2e3\n".as_bytes())?;
    /// assert_eq!(parsed.values, vec![1.5, -2000.0]);
    /// assert_eq!(parsed.skipped.len(), 1);
    /// ```
    pub fn read_file(reader: impl BufRead) -> Result<ParsedLines<f64>, ReadError> {
        read_values(reader, parse_float)
    }
}

/// Provides static methods for writing statistics reports.
pub struct StatisticsWriter {}

impl StatisticsWriter {
    /// Writes a `Key: value` line per statistic.
    pub fn write_file(stats: &Statistics, writer: &mut dyn Write) -> std::io::Result<()> {
        for (key, value) in stats.fields() {
            writeln!(writer, "{key}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_float, FloatReader, StatisticsWriter};
    use crate::{stats::Statistics, unwrap_assert};

    #[test]
    fn read_mixed() {
        let input = "1\n 2.5 \nabc\n\n1e2\ninf\n";
        let parsed = FloatReader::read_file(input.as_bytes()).unwrap();

        assert_eq!(parsed.values, vec![1.0, 2.5, 100.0, f64::INFINITY]);
        let skipped: Vec<_> = parsed.skipped.iter().map(|s| s.row).collect();
        assert_eq!(skipped, vec![2, 3]);
    }

    #[test]
    fn parse_grouped_digits() {
        assert_eq!(parse_float("1_000.5"), Some(1000.5));
        assert_eq!(parse_float(" -2_5e1_0 "), Some(-25e10));
        assert_eq!(parse_float("nan").map(f64::is_nan), Some(true));
        assert_eq!(parse_float("-inf"), Some(f64::NEG_INFINITY));
        for text in ["1__0.5", "_1.0", "1_.5", "1._5", "1_e5", "in_f", ""] {
            assert_eq!(parse_float(text), None, "{text:?}");
        }
    }

    #[test]
    fn read_grouped_digits() {
        let parsed = FloatReader::read_file("1_000.5\n2\n1__0\n".as_bytes()).unwrap();

        assert_eq!(parsed.values, vec![1000.5, 2.0]);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].text, "1__0");
    }

    #[test]
    fn write_report() {
        let stats = Statistics::compute(&[2.0, 4.0, 4.0, 6.0]).unwrap();
        let mut buf: Vec<u8> = vec![];
        let res = StatisticsWriter::write_file(&stats, &mut buf);

        assert!(res.is_ok());
        unwrap_assert!(
            String::from_utf8(buf),
            "Count: 4\n\
             Mean: 4.0\n\
             Median: 4.0\n\
             Mode: 4.0\n\
             Standard Deviation: 1.632993161855452\n\
             Variance: 2.6666666666666665\n"
        );
    }
}
