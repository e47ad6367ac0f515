use std::{path::PathBuf, time::Instant};

use filecrunch::stats::{
    io::{FloatReader, StatisticsWriter, DEFAULT_REPORT_NAME},
    Statistics,
};

use crate::{
    utils::{open_input, write_report},
    Error, Result, RunCommand,
};

#[derive(clap::Args)]
pub struct StatsCommand {
    /// Path to an input file with one number per line.
    input: PathBuf,
    /// Path to an output report file.
    #[arg(short, long, default_value = DEFAULT_REPORT_NAME)]
    output: PathBuf,
}

impl RunCommand for StatsCommand {
    fn run(self) -> Result<()> {
        let started = Instant::now();
        let reader = open_input(&self.input)?;
        let parsed = FloatReader::read_file(reader).map_err(|source| Error::Read {
            path: self.input.clone(),
            source,
        })?;
        if parsed.values.is_empty() {
            return Err(Error::NoValidData(self.input));
        }
        let stats = Statistics::compute(&parsed.values)?;
        StatisticsWriter::write_file(&stats, &mut std::io::stdout().lock())?;
        write_report(&self.output, started, |writer| {
            StatisticsWriter::write_file(&stats, writer)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use filecrunch::utils::{ExitStatus, EXIT_NO_DATA};

    use super::StatsCommand;
    use crate::{Error, RunCommand};

    #[test]
    fn writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("numbers.txt");
        fs::write(&input, "4\n2\nbad\n4\n6\n").unwrap();
        let cmd = StatsCommand {
            input,
            output: dir.path().join("stats.txt"),
        };
        cmd.run().unwrap();

        let report = fs::read_to_string(dir.path().join("stats.txt")).unwrap();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(
            lines[..6],
            [
                "Count: 4",
                "Mean: 4.0",
                "Median: 4.0",
                "Mode: 4.0",
                "Standard Deviation: 1.632993161855452",
                "Variance: 2.6666666666666665",
            ]
        );
        assert!(lines[6].starts_with("Execution Time: "));
    }

    #[test]
    fn empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        fs::write(&input, "").unwrap();
        let cmd = StatsCommand {
            input,
            output: dir.path().join("stats.txt"),
        };
        let res = cmd.run();

        assert!(matches!(res, Err(Error::NoValidData(_))));
        assert_eq!(res.unwrap_err().exit_code(), EXIT_NO_DATA);
        assert!(!dir.path().join("stats.txt").exists());
    }
}
