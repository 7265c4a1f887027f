//! agingsim - count page faults of an access trace under aging replacement.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use agingsim::trace::read_trace_file;
use agingsim::{sweep, FrameCapacity, Result, Simulation};

/// Simulate aging-counter page replacement over an access trace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File of whitespace-separated page identifiers
    trace: PathBuf,

    /// Number of physical frames (positive integer)
    #[arg(value_parser = parse_capacity, allow_negative_numbers = true)]
    frames: FrameCapacity,

    /// Also print hit/fault/eviction statistics
    #[arg(short, long)]
    stats: bool,

    /// Additional frame counts to simulate, comma separated
    #[arg(long, value_delimiter = ',', value_parser = parse_capacity)]
    sweep: Vec<FrameCapacity>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_capacity(value: &str) -> std::result::Result<FrameCapacity, String> {
    value.parse().map_err(|e: agingsim::Error| e.to_string())
}

fn run(args: &Args) -> Result<()> {
    let trace = read_trace_file(&args.trace)?;

    let mut sim = Simulation::new(args.frames);
    let faults = sim.run(trace.iter().copied());
    println!("Page Faults: {}", faults);

    if args.stats {
        println!("{}", sim.stats());
    }

    if !args.sweep.is_empty() {
        for result in sweep(&trace, &args.sweep) {
            println!(
                "Frames: {} Page Faults: {}",
                result.capacity.get(),
                result.faults()
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    debug!("{:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
