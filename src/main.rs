use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use taxi_csv2json::convert_path;

#[derive(clap::Parser, Debug)]
#[command(
    name = "taxi-csv2json",
    about = "Converts headerless taxi trip CSV to newline-delimited JSON"
)]
struct Args {
    /// Input CSV file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output NDJSON file path (optional, defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let source = args
        .input
        .as_deref()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());

    convert_path(args.input.as_deref(), args.output.as_deref())
        .with_context(|| format!("Failed to convert {source} to NDJSON"))?;

    Ok(())
}
