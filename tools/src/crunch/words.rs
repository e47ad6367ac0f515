use std::{path::PathBuf, time::Instant};

use filecrunch::words::io::{WordCountReader, WordCountWriter, DEFAULT_REPORT_NAME};

use crate::{
    utils::{open_input, write_report},
    Error, Result, RunCommand,
};

#[derive(clap::Args)]
pub struct WordsCommand {
    /// Path to an input text file.
    input: PathBuf,
    /// Path to an output report file.
    #[arg(short, long, default_value = DEFAULT_REPORT_NAME)]
    output: PathBuf,
}

impl RunCommand for WordsCommand {
    fn run(self) -> Result<()> {
        let started = Instant::now();
        let mut reader = open_input(&self.input)?;
        let count = WordCountReader::read_file(&mut reader).map_err(|source| Error::Read {
            path: self.input.clone(),
            source,
        })?;
        if count.grand_total() == 0 {
            return Err(Error::NoValidData(self.input));
        }
        WordCountWriter::write_summary(&count, &mut std::io::stdout().lock())?;
        write_report(&self.output, started, |writer| {
            WordCountWriter::write_file(&count, writer)
        })
    }
}
