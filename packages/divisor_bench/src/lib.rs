#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A divisibility-counting micro-benchmark.
//!
//! The benchmark loads a fixed array of little-endian 32-bit integers from `numbers.dat` and
//! then tests every divisor in `2..1023` against every number, counting the pairs where the
//! divisor is smaller than the number and divides it exactly. The caller decides how many pairs
//! are visited in total; the divisor sweep repeats as often as needed to use up that budget.
//!
//! Despite what the output says, nothing here tests primality. The "primes" wording of the
//! first result line is kept so that existing result parsers keep working.
//!
//! ```
//! use divisor_bench::{IterationBudget, NumberArray, run_sweep, write_report};
//! use std::num::NonZero;
//!
//! let numbers = NumberArray::from(vec![10, 7, 9, 4]);
//! let budget = IterationBudget::new(NonZero::new(4).unwrap());
//!
//! let report = run_sweep(&numbers, budget);
//! assert_eq!(report.match_count(), 2);
//!
//! write_report(&report, &mut std::io::stdout()).unwrap();
//! ```
//!
//! The binary entry point is in `main.rs`.

mod benchmark;
mod error;
mod iterations;
mod loading;
mod output;
mod pal;
mod types;

pub use benchmark::*;
pub use error::*;
pub use iterations::*;
pub use loading::{NUMBER_COUNT, NUMBERS_FILE_NAME, NumberArray, load_numbers};
use loading::load_numbers_with_filesystem;
pub use output::*;
use pal::{Filesystem, FilesystemFacade};
pub use types::*;

/// Core logic of the tool, extracted for testability.
///
/// Loads the numbers, runs the timed sweep and returns the result without printing anything.
///
/// # Errors
///
/// Returns an error if the numbers file cannot be fully read and the input asks to fail fast.
#[doc(hidden)]
pub fn run(input: &RunInput) -> Result<BenchmarkReport> {
    run_with_filesystem(input, &FilesystemFacade::target())
}

/// Internal implementation of `run` that accepts a filesystem abstraction.
fn run_with_filesystem(input: &RunInput, fs: &impl Filesystem) -> Result<BenchmarkReport> {
    let numbers = load_numbers_with_filesystem(
        &input.numbers_path,
        input.number_count,
        input.on_read_error,
        fs,
    )?;

    Ok(run_sweep(&numbers, input.budget))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod mock_tests {
    use std::io;
    use std::path::PathBuf;
    use std::thread;
    use std::time::Duration;

    use new_zealand::nz;

    use super::*;
    use crate::pal::MockFilesystem;

    fn input(number_count: usize, on_read_error: ReadErrorPolicy) -> RunInput {
        RunInput {
            numbers_path: PathBuf::from(NUMBERS_FILE_NAME),
            number_count,
            budget: IterationBudget::new(nz!(4)),
            on_read_error,
        }
    }

    #[test]
    fn mock_run_small_array() {
        let mut mock = MockFilesystem::new();
        mock.expect_read_prefix().returning(|_, _| {
            Ok([10_i32, 7, 9, 4]
                .iter()
                .flat_map(|value| value.to_le_bytes())
                .collect())
        });
        let fs = FilesystemFacade::from_mock(mock);

        let report = run_with_filesystem(&input(4, ReadErrorPolicy::FailFast), &fs).unwrap();

        assert_eq!(report.match_count(), 2);
        assert_eq!(report.pairs_visited(), 4);
    }

    #[test]
    fn mock_load_time_is_not_measured() {
        const LOAD_DELAY: Duration = Duration::from_millis(250);

        let mut mock = MockFilesystem::new();
        mock.expect_read_prefix().returning(|_, max_len| {
            thread::sleep(LOAD_DELAY);
            Ok(vec![0; max_len])
        });
        let fs = FilesystemFacade::from_mock(mock);

        let report = run_with_filesystem(&input(4, ReadErrorPolicy::FailFast), &fs).unwrap();

        assert!(report.elapsed() < LOAD_DELAY);
    }

    #[test]
    fn mock_read_failure_stops_before_sweep() {
        let mut mock = MockFilesystem::new();
        mock.expect_read_prefix()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::NotFound, "not found")));
        let fs = FilesystemFacade::from_mock(mock);

        let result = run_with_filesystem(&input(4, ReadErrorPolicy::FailFast), &fs);

        assert!(matches!(result, Err(Error::FileRead { .. })));
    }

    #[test]
    fn mock_read_failure_tolerated_in_legacy_mode() {
        let mut mock = MockFilesystem::new();
        mock.expect_read_prefix()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::NotFound, "not found")));
        let fs = FilesystemFacade::from_mock(mock);

        let report =
            run_with_filesystem(&input(4, ReadErrorPolicy::ContinueWithZeros), &fs).unwrap();

        // Zeros never match but still use up the budget.
        assert_eq!(report.match_count(), 0);
        assert_eq!(report.pairs_visited(), 4);
    }
}
