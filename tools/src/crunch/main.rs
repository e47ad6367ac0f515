//! Number conversion, statistics and word count multitool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use filecrunch::{
    make_app,
    utils::{ExitStatus, ReadError, EXIT_INPUT, EXIT_NO_DATA, EXIT_OUTPUT},
};

mod convert;
mod stats;
mod utils;
mod words;

use convert::ConvertCommand;
use stats::StatsCommand;
use words::WordsCommand;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open {}: {}", .path.display(), .source)]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: ReadError },
    #[error("No valid data found in {}", .0.display())]
    NoValidData(PathBuf),
    #[error("Cannot write {}: {}", .path.display(), .source)]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Console(#[from] std::io::Error),
    #[error("{0}")]
    Stats(#[from] filecrunch::stats::Error),
}

impl ExitStatus for Error {
    fn exit_code(&self) -> i32 {
        match self {
            Error::Input { .. } | Error::Read { .. } => EXIT_INPUT,
            Error::NoValidData(_) | Error::Stats(_) => EXIT_NO_DATA,
            Error::Output { .. } | Error::Console(_) => EXIT_OUTPUT,
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Parser)]
#[command(name = "crunch")]
#[command(version = "1.0")]
#[command(about = "Convert numbers, describe data and count words in text files.", long_about = None)]
struct Args {
    #[command(subcommand)]
    /// Mode of operation.
    command: Commands,
    /// Only report errors.
    #[arg(short, long, global = true, default_value_t = false, conflicts_with = "verbose")]
    quiet: bool,
    /// Also report debug information.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

/// Modes of operation.
#[derive(Subcommand)]
enum Commands {
    /// Convert integers to binary and hexadecimal.
    Convert(ConvertCommand),
    /// Compute descriptive statistics of numbers.
    Stats(StatsCommand),
    /// Count word occurrences in a text.
    Words(WordsCommand),
}

impl Commands {
    fn run(self, quiet: bool, verbose: bool) -> Result<()> {
        utils::init_logging(quiet, verbose);
        match self {
            Commands::Convert(x) => x.run(),
            Commands::Stats(x) => x.run(),
            Commands::Words(x) => x.run(),
        }
    }
}

trait RunCommand {
    fn run(self) -> Result<()>;
}

make_app!(Args, quiet, verbose);

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use filecrunch::utils::{ExitStatus, EXIT_INPUT, EXIT_NO_DATA, EXIT_OUTPUT};

    use super::{Args, Commands, Error};

    fn io_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "not found")
    }

    #[test]
    fn exit_codes() {
        let input = Error::Input {
            path: "in.txt".into(),
            source: io_error(),
        };
        let output = Error::Output {
            path: "out.txt".into(),
            source: io_error(),
        };
        assert_eq!(input.exit_code(), EXIT_INPUT);
        assert_eq!(Error::NoValidData(PathBuf::new()).exit_code(), EXIT_NO_DATA);
        assert_eq!(output.exit_code(), EXIT_OUTPUT);
        assert_ne!(EXIT_INPUT, EXIT_NO_DATA);
    }

    #[test]
    fn error_messages() {
        let err = Error::Input {
            path: "missing.txt".into(),
            source: io_error(),
        };
        assert_eq!(err.to_string(), "Cannot open missing.txt: not found");
        let err = Error::NoValidData("data.txt".into());
        assert_eq!(err.to_string(), "No valid data found in data.txt");
    }

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from(["crunch", "-q", "convert", "in.txt", "--parallel"]).unwrap();
        assert!(args.quiet);
        assert!(matches!(args.command, Commands::Convert(_)));

        let args = Args::try_parse_from(["crunch", "words", "in.txt", "-o", "out.txt", "-v"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.command, Commands::Words(_)));

        assert!(Args::try_parse_from(["crunch", "stats"]).is_err());
        assert!(Args::try_parse_from(["crunch", "-q", "-v", "stats", "in.txt"]).is_err());
    }
}
