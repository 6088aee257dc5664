// src/main.rs
// ============================================================================
// BIN-R8TOR4 CLI
// ============================================================================
//
// Uso:
//   bin_r8tor4 -i data_f64.dat -o data_f32.dat
//   bin_r8tor4 -i data_f32.dat -o data_f64.dat --reverse
//
// ============================================================================

use anyhow::Result;
use clap::Parser;

use bin_r8tor4::{pipeline, Args, Config};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::from(args);

    println!("Starting...");
    println!("    ----> converting {}", config.direction);
    println!("    ----> reading original data from binary file : {}", config.input.display());

    let verbose = config.verbose;
    let report = pipeline::run(&config, |outcome| {
        if verbose {
            println!();
            println!(
                "  the size of data read from file is {}   <-- check if it is the number as expected.",
                outcome.samples.len()
            );
            if outcome.trailing_bytes > 0 {
                println!("  {} trailing bytes were ignored", outcome.trailing_bytes);
            }
            println!();
        }
        println!("    ----> writing data to binary file : {}", config.output.display());
    })?;

    if verbose {
        println!(
            "  {} bytes read, {} bytes written",
            report.bytes_read, report.bytes_written
        );
        if report.stats.is_lossless() {
            println!("  lossless");
        } else {
            println!(
                "  overflowed to infinity: {}, inexact: {}",
                report.stats.overflowed, report.stats.inexact
            );
        }
    }

    Ok(())
}
