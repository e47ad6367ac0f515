//! Integer list reading and conversion report writing.

use std::io::{BufRead, Write};

use num_bigint::BigInt;

use crate::{
    numconv::Conversion,
    utils::{read_values, strip_digit_separators, ParsedLines, ReadError},
};

/// Default name of the conversion report file.
pub const DEFAULT_REPORT_NAME: &str = "ConversionResults.txt";

/// Header line of the conversion report.
pub const REPORT_HEADER: &str = "Number, Binary, Hexadecimal";

/// Parses a decimal integer of any size.
///
/// Accepts an optional sign followed by ASCII digits, which may be grouped
/// with single underscores (`1_000`). Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```ignore
/// use filecrunch::numconv::{io::parse_integer, BigInt};
///
/// assert_eq!(parse_integer("-1_000"), Some(BigInt::from(-1000)));
/// assert_eq!(parse_integer("3.5"), None);
/// ```
pub fn parse_integer(text: &str) -> Option<BigInt> {
    let text = strip_digit_separators(text.trim())?;
    let digits = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(&text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(text.as_bytes(), 10)
}

/// Provides static methods for reading integer lists.
#[derive(Debug, Default)]
pub struct IntegerReader {}

impl IntegerReader {
    /// Reads one integer per line. Other lines are logged and skipped.
    pub fn read_file(reader: impl BufRead) -> Result<ParsedLines<BigInt>, ReadError> {
        read_values(reader, parse_integer)
    }
}

/// Provides static methods for writing conversion reports.
pub struct ConversionWriter {}

impl ConversionWriter {
    /// Writes the report header and one `number, binary, hexadecimal` row per
    /// conversion.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use filecrunch::numconv::{io::ConversionWriter, convert_all, BigInt};
    ///
    /// let conversions = convert_all(&[BigInt::from(-1)]);
    /// let mut writer: Vec<u8> = vec![];
    ///
    /// ConversionWriter::write_file(&conversions, &mut writer)?;
    /// assert_eq!(writer, b"Number, Binary, Hexadecimal\n-1, 1111111111, FFFFFFFFFF\n");
    /// ```
    pub fn write_file(conversions: &[Conversion], writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{REPORT_HEADER}")?;
        for conversion in conversions {
            writeln!(
                writer,
                "{}, {}, {}",
                conversion.number, conversion.binary, conversion.hexadecimal
            )?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod examples {
    use crate as filecrunch;

    #[test]
    fn parse_integer() {
        use filecrunch::numconv::{io::parse_integer, BigInt};

        assert_eq!(parse_integer("-1_000"), Some(BigInt::from(-1000)));
        assert_eq!(parse_integer("3.5"), None);
    }

    #[test]
    fn write_file() -> std::io::Result<()> {
        use filecrunch::numconv::{convert_all, io::ConversionWriter, BigInt};

        let conversions = convert_all(&[BigInt::from(-1)]);
        let mut writer: Vec<u8> = vec![];

        ConversionWriter::write_file(&conversions, &mut writer)?;
        assert_eq!(
            writer,
            b"Number, Binary, Hexadecimal\n-1, 1111111111, FFFFFFFFFF\n"
        );
        Ok(())
    }
}
