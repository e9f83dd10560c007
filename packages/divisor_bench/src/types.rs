// Public API types for divisor_bench.
//
// These types are used by main.rs and exposed via the crate's public API.

use std::fmt;
use std::path::PathBuf;

use crate::IterationBudget;

/// What to do when the numbers file is missing, unreadable or shorter than expected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum ReadErrorPolicy {
    /// Report the error and stop before any timed computation.
    #[default]
    FailFast,

    /// Log the error and continue with every unread value set to zero.
    ///
    /// This matches the lenient behavior of the historical tool. Zero is never greater than a
    /// divisor, so the missing values never produce matches but still consume budget.
    ContinueWithZeros,
}

impl std::str::FromStr for ReadErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail-fast" => Ok(Self::FailFast),
            "continue-with-zeros" => Ok(Self::ContinueWithZeros),
            _ => Err(format!(
                "Invalid read error policy: '{s}'. Valid options are: fail-fast, continue-with-zeros"
            )),
        }
    }
}

impl fmt::Display for ReadErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail-fast"),
            Self::ContinueWithZeros => write!(f, "continue-with-zeros"),
        }
    }
}

/// Input parameters for the `run` function.
///
/// This is the parsed and validated input that the core logic operates on.
#[doc(hidden)]
#[derive(Clone, Debug)]
#[allow(
    clippy::exhaustive_structs,
    reason = "This is a hidden struct for internal/test use only"
)]
pub struct RunInput {
    /// Path to the file holding the numbers.
    pub numbers_path: PathBuf,
    /// How many numbers the file is expected to hold.
    pub number_count: usize,
    /// How many (divisor, number) pairs to visit.
    pub budget: IterationBudget,
    /// What to do if the numbers file cannot be fully read.
    pub on_read_error: ReadErrorPolicy,
}
