//! Dump `n,length,spelling` rows for a range into a CSV table, resuming
//! after the largest `n` already present in the file.
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use wordlength::io_utils::{io_cli_error, simple_cli_error, wordlength_cli_error};
use wordlength::{measure, EnglishSpeller};

#[derive(Parser)]
struct Args {
    /// First integer of the table
    #[arg(long, default_value_t = 0)]
    start: u64,
    /// One past the last integer of the table
    #[arg(long)]
    stop: u64,
    /// Output CSV file
    #[arg(long, default_value = "length_table.csv")]
    out: PathBuf,
    /// Flush and report every this many rows
    #[arg(long, default_value_t = 100_000)]
    flush_every: u64,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Largest `n` in an existing table, if any.
fn last_index(path: &Path) -> Result<Option<u64>, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(None);
    }
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    let mut last = None;
    for row in rdr.records() {
        let row = row?;
        if let Some(Ok(n)) = row.get(0).map(str::parse::<u64>) {
            last = Some(last.map_or(n, |l: u64| l.max(n)));
        }
    }
    Ok(last)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.flush_every == 0 {
        return Err(simple_cli_error("--flush-every must be at least 1").into());
    }

    let start = match last_index(&args.out)? {
        Some(n) => args.start.max(n + 1),
        None => args.start,
    };
    println!("Starting from: {}", start);

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&args.out)
        .map_err(|e| io_cli_error("opening table", &args.out, e))?;
    let mut wtr = csv::Writer::from_writer(file);

    for n in start..args.stop {
        let (spelling, len) =
            measure(&EnglishSpeller, n).map_err(|e| wordlength_cli_error("spelling", e.into()))?;
        wtr.write_record(&[n.to_string(), len.to_string(), spelling])?;
        if n % args.flush_every == 0 {
            wtr.flush()?;
            println!("Progress: {}", n);
        }
    }
    wtr.flush()?;
    Ok(())
}
