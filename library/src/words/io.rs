//! Text reading and word count report writing.

use std::io::{Read, Write};

use crate::{utils::ReadError, words::WordCount};

/// Default name of the word count report file.
pub const DEFAULT_REPORT_NAME: &str = "WordCountResults.txt";

/// Provides static methods for reading text into a [`WordCount`].
#[derive(Debug, Default)]
pub struct WordCountReader {}

impl WordCountReader {
    /// Reads the whole text and counts it.
    pub fn read_file(reader: &mut dyn Read) -> Result<WordCount, ReadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let count = WordCount::from_text(&text);
        tracing::debug!(
            entries = count.len(),
            skipped = count.skipped().len(),
            "finished counting words"
        );
        Ok(count)
    }
}

/// Label of the grand total line.
pub const GRAND_TOTAL_KEY: &str = "Grand Total";

/// Provides static methods for writing word count reports.
pub struct WordCountWriter {}

impl WordCountWriter {
    /// Writes a `word: count` line per entry by descending count. The grand
    /// total is ranked among the entries and follows any entry with an equal
    /// count.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use filecrunch::words::{io::WordCountWriter, WordCount};
    ///
    /// let count = WordCount::from_text("b a b");
    /// let mut writer: Vec<u8> = vec![];
    ///
    /// WordCountWriter::write_file(&count, &mut writer)?;
    /// assert_eq!(writer, b"Grand Total: 3\nb: 2\na: 1\n(Blank): 0\n");
    /// ```
    pub fn write_file(count: &WordCount, writer: &mut dyn Write) -> std::io::Result<()> {
        let total = count.grand_total();
        let mut entries = count.sorted();
        let at = entries.partition_point(|&(_, n)| n >= total);
        entries.insert(at, (GRAND_TOTAL_KEY, total));
        for (word, n) in entries {
            writeln!(writer, "{word}: {n}")?;
        }
        Ok(())
    }

    /// Writes the entries by descending count, then the grand total.
    pub fn write_summary(count: &WordCount, writer: &mut dyn Write) -> std::io::Result<()> {
        for (word, n) in count.sorted() {
            writeln!(writer, "{word}: {n}")?;
        }
        writeln!(writer, "{GRAND_TOTAL_KEY}: {}", count.grand_total())
    }
}
