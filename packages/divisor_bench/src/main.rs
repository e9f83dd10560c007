#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the divisor_bench tool.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use divisor_bench::{
    NUMBER_COUNT, NUMBERS_FILE_NAME, ReadErrorPolicy, RunInput, parse_budget, run, write_report,
};
use tracing::Level;

/// Counts how many numbers in numbers.dat are divided exactly by each divisor in 2..1023,
/// visiting the given number of (divisor, number) pairs, and reports the time taken.
#[derive(FromArgs)]
struct Args {
    /// what to do if numbers.dat cannot be fully read (fail-fast, continue-with-zeros)
    #[argh(option)]
    on_read_error: Option<ReadErrorPolicy>,

    /// log progress to standard error
    #[argh(switch)]
    verbose: bool,

    /// how many (divisor, number) pairs to visit, a positive base-10 integer
    #[argh(positional)]
    budget: String,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let env_args: Vec<String> = std::env::args().collect();
    let str_args: Vec<&str> = env_args.iter().map(String::as_str).collect();

    let program_name = str_args.first().copied().unwrap_or("divisor_bench");

    let args: Args = match Args::from_args(&[program_name], str_args.get(1..).unwrap_or(&[])) {
        Ok(args) => args,
        Err(early_exit) => {
            // Standard output is reserved for results, so only requested help goes there.
            return if early_exit.status.is_ok() {
                println!("{}", early_exit.output);
                ExitCode::SUCCESS
            } else {
                eprintln!("{}", early_exit.output);
                ExitCode::FAILURE
            };
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let budget = match parse_budget(&args.budget) {
        Ok(budget) => budget,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let input = RunInput {
        numbers_path: PathBuf::from(NUMBERS_FILE_NAME),
        number_count: NUMBER_COUNT,
        budget,
        on_read_error: args.on_read_error.unwrap_or_default(),
    };

    match run(&input) {
        Ok(report) => match write_report(&report, &mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: failed to write results: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
