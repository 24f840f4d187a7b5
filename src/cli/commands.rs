use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;

use crate::inspector::{InspectConfig, scan_file};

/// Takes no arguments: the input file and threshold are compiled in
#[derive(Parser)]
#[command(name = "feature-inspector")]
#[command(version = "0.1.0")]
#[command(
    about = "Print properties, geometry and history counts for oversized GeoJSON lines in ./tmp2",
    long_about = None
)]
pub struct Cli {}

pub fn run() -> Result<()> {
    let _cli = Cli::parse();
    inspect(&InspectConfig::default())
}

fn inspect(config: &InspectConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    scan_file(config, &mut out)?;
    Ok(())
}
