//! Statistics computation.

use std::fmt::Display;

use indexmap::IndexMap;

use crate::utils::format_float;

/// The error type for statistics computation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There are no data points to describe.
    #[error("Cannot compute statistics of an empty data set")]
    EmptyData,
}

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

/// The most frequent value of a data set.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// First value to reach the highest frequency.
    Value(f64),
    /// Every value occurs exactly once.
    NotAvailable,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Value(x) => write!(f, "{}", format_float(*x)),
            Mode::NotAvailable => write!(f, "NA"),
        }
    }
}

/// Descriptive statistics of a data set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub variance: f64,
    pub standard_deviation: f64,
}

impl Statistics {
    /// Describes a non-empty data set.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use filecrunch::stats::{Mode, Statistics};
    ///
    /// let stats = Statistics::compute(&[1.0, 2.0, 2.0, 5.0])?;
    /// assert_eq!(stats.count, 4);
    /// assert_eq!(stats.mean, 2.5);
    /// assert_eq!(stats.median, 2.0);
    /// assert_eq!(stats.mode, Mode::Value(2.0));
    /// assert_eq!(stats.variance, 3.0);
    /// ```
    pub fn compute(data: &[f64]) -> Result<Self> {
        let median = median(data).ok_or(Error::EmptyData)?;
        let mean = mean(data);
        let variance = variance(data, mean);
        Ok(Self {
            count: data.len(),
            mean,
            median,
            mode: mode(data),
            variance,
            standard_deviation: standard_deviation(variance),
        })
    }

    /// Report keys and rendered values, in report order.
    pub fn fields(&self) -> [(&'static str, String); 6] {
        [
            ("Count", self.count.to_string()),
            ("Mean", format_float(self.mean)),
            ("Median", format_float(self.median)),
            ("Mode", self.mode.to_string()),
            ("Standard Deviation", format_float(self.standard_deviation)),
            ("Variance", format_float(self.variance)),
        ]
    }
}

/// Arithmetic mean, 0 for no data.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Middle value of the sorted data, or the average of the two middle values
/// for an even count.
pub fn median(data: &[f64]) -> Option<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        n if n % 2 == 0 => Some((sorted[mid] + sorted[mid - 1]) / 2.0),
        _ => Some(sorted[mid]),
    }
}

/// First value (in data order) with the highest frequency.
///
/// Gives [`Mode::NotAvailable`] when there are as many such values as data
/// points, which means no value repeats.
pub fn mode(data: &[f64]) -> Mode {
    // Keyed by bit pattern, with both zeros folded together.
    let mut frequency: IndexMap<u64, (f64, usize)> = IndexMap::new();
    for &x in data {
        let key = if x == 0.0 { 0f64.to_bits() } else { x.to_bits() };
        frequency.entry(key).or_insert((x, 0)).1 += 1;
    }
    let max = frequency.values().map(|(_, n)| *n).max().unwrap_or(0);
    let modes: Vec<f64> = frequency
        .values()
        .filter(|(_, n)| *n == max)
        .map(|(x, _)| *x)
        .collect();
    match modes.first() {
        Some(&x) if modes.len() != data.len() => Mode::Value(x),
        _ => Mode::NotAvailable,
    }
}

/// Sample variance (n - 1 divisor). 0 when there are fewer than two data
/// points.
pub fn variance(data: &[f64], mean: f64) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64
}

pub fn standard_deviation(variance: f64) -> f64 {
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::{mean, median, mode, standard_deviation, variance, Error, Mode, Statistics};

    #[test]
    fn mean_values() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[4.0]), 4.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn median_values() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[-1.0, 10.0]), Some(4.5));
    }

    #[test]
    fn mode_values() {
        assert_eq!(mode(&[]), Mode::NotAvailable);
        assert_eq!(mode(&[1.0]), Mode::NotAvailable);
        assert_eq!(mode(&[1.0, 2.0, 3.0]), Mode::NotAvailable);
        assert_eq!(mode(&[3.0, 1.0, 3.0, 2.0]), Mode::Value(3.0));
        // Ties go to the value seen first.
        assert_eq!(mode(&[2.0, 1.0, 1.0, 2.0]), Mode::Value(2.0));
        // Every value repeating the same number of times still has a mode.
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), Mode::Value(1.0));
        assert_eq!(mode(&[0.0, -0.0, 5.0]), Mode::Value(0.0));
    }

    #[test]
    fn variance_values() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(variance(&data, mean(&data)), 32.0 / 7.0);
        assert_eq!(variance(&[], 0.0), 0.0);
        assert_eq!(variance(&[42.0], 42.0), 0.0);
        assert_eq!(standard_deviation(16.0), 4.0);
    }

    #[test]
    fn compute() {
        let stats = Statistics::compute(&[5.0, 1.0, 3.0, 3.0, 8.0]).unwrap();
        assert_eq!(
            stats,
            Statistics {
                count: 5,
                mean: 4.0,
                median: 3.0,
                mode: Mode::Value(3.0),
                variance: 7.0,
                standard_deviation: 7f64.sqrt(),
            }
        );
    }

    #[test]
    fn compute_empty() {
        assert!(matches!(Statistics::compute(&[]), Err(Error::EmptyData)));
    }

    #[test]
    fn fields() {
        let stats = Statistics::compute(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let fields = stats.fields();
        let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["Count", "Mean", "Median", "Mode", "Standard Deviation", "Variance"]
        );
        assert_eq!(fields[0].1, "4");
        assert_eq!(fields[1].1, "2.5");
        assert_eq!(fields[3].1, "NA");
    }
}
