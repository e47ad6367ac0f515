//! Execution time report line.

use std::{io::Write, time::Duration};

/// Formats the execution time line appended to every report.
///
/// # Examples
///
/// ```ignore
/// use std::time::Duration;
/// use filecrunch::utils::execution_time_line;
///
/// let line = execution_time_line(Duration::from_millis(1234));
/// assert_eq!(line, "Execution Time: 1.23 seconds");
/// ```
pub fn execution_time_line(elapsed: Duration) -> String {
    format!("Execution Time: {:.2} seconds", elapsed.as_secs_f64())
}

/// Writes the execution time line.
pub fn write_execution_time(writer: &mut dyn Write, elapsed: Duration) -> std::io::Result<()> {
    writeln!(writer, "{}", execution_time_line(elapsed))
}
