use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Write},
    path::Path,
    time::Instant,
};

use filecrunch::utils::{execution_time_line, write_execution_time};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::{Error, Result};

/// Installs the stderr log subscriber.
pub fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    // Fails only if a subscriber is already installed, which is fine.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    OpenOptions::new()
        .read(true)
        .open(path)
        .map(BufReader::new)
        .map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })
}

/// Creates the report file, fills it with `write`, then appends the time
/// elapsed since `started`. The time is echoed to the console.
pub fn write_report<F>(path: &Path, started: Instant, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let output = |source: std::io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(output)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(output)?;
    let elapsed = started.elapsed();
    write_execution_time(&mut writer, elapsed).map_err(output)?;
    writer.flush().map_err(output)?;
    println!("Results written to {}", path.display());
    println!("{}", execution_time_line(elapsed));
    Ok(())
}
