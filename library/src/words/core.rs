//! Word frequency counting.

use indexmap::IndexMap;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Key under which blank lines are counted.
pub const BLANK_KEY: &str = "(Blank)";

/// Occurrence counts of words and blank lines, in first-seen order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordCount {
    counts: IndexMap<String, usize>,
    skipped: Vec<String>,
}

impl Default for WordCount {
    fn default() -> Self {
        let mut counts = IndexMap::new();
        counts.insert(BLANK_KEY.to_string(), 0);
        Self {
            counts,
            skipped: vec![],
        }
    }
}

impl WordCount {
    /// Counts all lines of a text. Lines are separated by `\n`, so text
    /// ending with a newline has a final blank line.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use filecrunch::words::WordCount;
    ///
    /// let count = WordCount::from_text("to be or\nnot to be 2b\n");
    /// assert_eq!(count.get("to"), Some(2));
    /// assert_eq!(count.blank(), 1);
    /// assert_eq!(count.skipped(), ["2b"]);
    /// assert_eq!(count.grand_total(), 7);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut count = Self::default();
        for line in text.split('\n') {
            count.add_line(line);
        }
        count
    }

    /// Counts a single line. A line with nothing but whitespace is blank,
    /// otherwise each token made only of letters counts as a word and any
    /// other token is logged and skipped.
    pub fn add_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            *self.counts.entry(BLANK_KEY.to_string()).or_insert(0) += 1;
            return;
        }
        for token in line.split_whitespace() {
            if token.chars().all(is_letter) {
                *self.counts.entry(token.to_string()).or_insert(0) += 1;
            } else {
                tracing::warn!("Invalid data found and skipped: {}", token);
                self.skipped.push(token.to_string());
            }
        }
    }

    /// Occurrences of a word (or [`BLANK_KEY`]).
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of blank lines.
    pub fn blank(&self) -> usize {
        self.get(BLANK_KEY).unwrap_or_default()
    }

    /// Number of distinct entries, including [`BLANK_KEY`].
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tokens rejected as words, in text order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Entries by descending count. Equal counts keep first-seen order.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Sum of all counts, blank lines included.
    pub fn grand_total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Whether a char is in one of the letter categories (Lu, Ll, Lt, Lm, Lo).
/// Letter numbers and combining marks are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
