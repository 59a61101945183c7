use anyhow::{Context, Result};
use clap::Parser as _;
use geoguesser_points::io::write_records;
use geoguesser_points::{DefaultsArgs, GpxParser, Parser, build_records};
use std::path::PathBuf;
use tracing::{Level, info};

/// Print every track point of a GPX file as a GeoGuessr location list
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GPX file to convert
    #[arg(value_name = "GPX_FILE")]
    input: PathBuf,

    #[command(flatten)]
    defaults: DefaultsArgs,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the JSON document, so logs go to stderr
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let parser = GpxParser;
    info!("--- Running {} ---", parser.name());

    let points = parser
        .parse(&args.input)
        .with_context(|| format!("could not convert {}", args.input.display()))?;
    let records = build_records(points, &args.defaults.into_defaults());

    write_records(&records, std::io::stdout().lock())?;
    Ok(())
}
