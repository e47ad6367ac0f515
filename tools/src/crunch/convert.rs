use std::{path::PathBuf, time::Instant};

use filecrunch::numconv::{
    convert_all,
    io::{ConversionWriter, IntegerReader, DEFAULT_REPORT_NAME},
    par_convert_all,
};

use crate::{
    utils::{open_input, write_report},
    Error, Result, RunCommand,
};

#[derive(clap::Args)]
pub struct ConvertCommand {
    /// Path to an input file with one integer per line.
    input: PathBuf,
    /// Path to an output report file.
    #[arg(short, long, default_value = DEFAULT_REPORT_NAME)]
    output: PathBuf,
    /// Encode numbers on all available cores.
    #[arg(short, long, default_value_t = false)]
    parallel: bool,
}

impl RunCommand for ConvertCommand {
    fn run(self) -> Result<()> {
        let started = Instant::now();
        let reader = open_input(&self.input)?;
        let parsed = IntegerReader::read_file(reader).map_err(|source| Error::Read {
            path: self.input.clone(),
            source,
        })?;
        if parsed.values.is_empty() {
            return Err(Error::NoValidData(self.input));
        }
        tracing::info!("Converting {} numbers", parsed.values.len());
        let conversions = if self.parallel {
            par_convert_all(&parsed.values)
        } else {
            convert_all(&parsed.values)
        };
        for conversion in &conversions {
            println!("{conversion}");
        }
        write_report(&self.output, started, |writer| {
            ConversionWriter::write_file(&conversions, writer)
        })
    }
}
