use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use wordlength::io_utils::{io_cli_error, simple_cli_error, wordlength_cli_error};
use wordlength::report::{render_debug, render_records, write_csv, write_json};
use wordlength::{
    measure, naive_search, scan_parallel, CancelToken, EnglishSpeller, LengthDiscoveryScanner,
    LengthRecord, ScanConfig, ScanObserver, ScanOutcome, ScanRange,
};

#[derive(Parser)]
#[command(name = "wordlength", about = "Smallest integers by spelled-out length")]
struct Cli {
    /// Log discoveries and progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a range and record the first integer of each new length
    Scan(ScanArgs),
    /// Restart from zero for every target length (slow cross-check)
    Naive {
        /// Largest target length to search for
        #[arg(long)]
        max_length: usize,
        #[arg(long, default_value_t = wordlength::DEFAULT_IGNORE_UP_TO)]
        ignore_up_to: usize,
        /// Give up on a target after this many integers
        #[arg(long, default_value_t = 1_000_000)]
        limit: u64,
    },
    /// Print the stripped spelling and its length
    Spell {
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
}

#[derive(Args)]
struct ScanArgs {
    /// First integer to examine
    #[arg(long, default_value_t = 0)]
    start: u64,
    /// One past the last integer to examine
    #[arg(long)]
    stop: u64,
    /// Treat lengths up to this value as already found
    #[arg(long, default_value_t = wordlength::DEFAULT_IGNORE_UP_TO)]
    ignore_up_to: usize,
    /// Number of worker threads; results are merged by minimum witness
    #[arg(long, default_value_t = 1)]
    workers: usize,
    /// Integers between progress and cancellation checks
    #[arg(long)]
    check_every: Option<u64>,
    /// Wall-clock budget in seconds
    #[arg(long)]
    max_seconds: Option<f64>,
    /// Stop after examining this many integers
    #[arg(long)]
    max_iterations: Option<u64>,
    /// Show a progress bar on stderr
    #[arg(long)]
    progress: bool,
    /// Print the full summary after the scan
    #[arg(long)]
    debug: bool,
    /// Write records to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the full result to a JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

struct BarObserver {
    bar: ProgressBar,
}

impl ScanObserver for BarObserver {
    fn on_progress(&mut self, _next: u64, percent: u64) {
        self.bar.set_position(percent);
    }

    fn on_discovery(&mut self, record: &LengthRecord, _missing: &[usize]) {
        self.bar
            .set_message(format!("length {} at {}", record.length, record.witness));
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Scan(args) => run_scan(args),
        Command::Naive {
            max_length,
            ignore_up_to,
            limit,
        } => {
            let result = naive_search(&EnglishSpeller, ignore_up_to, max_length, limit)
                .map_err(|e| wordlength_cli_error("naive search", e))?;
            let mut out = io::stdout().lock();
            for (len, (n, spelling)) in &result.found {
                writeln!(out, "{len} {n} \"{spelling}\"")?;
            }
            for len in &result.unreachable {
                writeln!(out, "{len} none below {limit}")?;
            }
            Ok(())
        }
        Command::Spell { numbers } => {
            let mut out = io::stdout().lock();
            for n in numbers {
                let (spelling, len) = measure(&EnglishSpeller, n)
                    .map_err(|e| wordlength_cli_error("spell", e.into()))?;
                writeln!(out, "{n} {len} \"{spelling}\"")?;
            }
            Ok(())
        }
    }
}

fn run_scan(args: ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let range =
        ScanRange::new(args.start, args.stop).map_err(|e| wordlength_cli_error("scan", e))?;

    let mut config = ScanConfig::default()
        .with_ignore_up_to(args.ignore_up_to)
        .with_workers(args.workers);
    if let Some(every) = args.check_every {
        config = config.with_check_interval(every);
    }
    if let Some(secs) = args.max_seconds {
        let budget = Duration::try_from_secs_f64(secs)
            .map_err(|_| simple_cli_error("--max-seconds must be a non-negative number"))?;
        config = config.with_max_duration(budget);
    }
    if let Some(max) = args.max_iterations {
        config = config.with_max_iterations(max);
    }

    let discovery = if config.workers > 1 {
        if args.progress {
            tracing::warn!("progress bar is only shown for single-worker scans");
        }
        scan_parallel(&EnglishSpeller, range, &config, &CancelToken::new())
    } else {
        let mut scanner = LengthDiscoveryScanner::new(&EnglishSpeller, config);
        if args.progress {
            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::with_template("{bar:40} {pos:>3}% {msg}")
                    .map_err(|e| simple_cli_error(&e.to_string()))?,
            );
            let mut observer = BarObserver { bar };
            let result = scanner.scan_with(range, &mut observer);
            observer.bar.finish_and_clear();
            result
        } else {
            scanner.scan(range)
        }
    }
    .map_err(|e| wordlength_cli_error("scan", e))?;

    let mut out = io::stdout().lock();
    out.write_all(render_records(&discovery).as_bytes())?;
    if args.debug {
        out.write_all(render_debug(&discovery).as_bytes())?;
    }
    if let ScanOutcome::Cancelled { reason, next } = discovery.outcome() {
        eprintln!("scan stopped early ({reason:?}); integers from {next} on were not examined");
    }

    if let Some(path) = &args.csv {
        let file = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        write_csv(&discovery, file).map_err(|e| wordlength_cli_error("writing csv", e))?;
    }
    if let Some(path) = &args.json {
        let file = File::create(path).map_err(|e| io_cli_error("creating json", path, e))?;
        write_json(&discovery, file).map_err(|e| wordlength_cli_error("writing json", e))?;
    }
    Ok(())
}
