use std::fmt;
use std::num::NonZero;

use crate::{Error, Result};

/// The total number of (divisor, number) pair visits a benchmark run is allowed to perform.
///
/// The budget is always positive. A run visits exactly this many pairs unless the number array
/// is empty, restarting the divisor sweep as many times as necessary.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IterationBudget(NonZero<u64>);

impl IterationBudget {
    /// Creates a budget permitting `pairs` pair visits.
    #[must_use]
    pub const fn new(pairs: NonZero<u64>) -> Self {
        Self(pairs)
    }

    /// The number of pair visits this budget permits.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for IterationBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses an iteration budget from its command line form.
///
/// The value must be a base-10 integer greater than zero. A leading sign is accepted, which
/// means that negative values are recognized as numbers and rejected for being non-positive.
///
/// # Errors
///
/// Returns [`Error::InvalidBudget`] if the value is not an integer, is zero or negative, or
/// does not fit in 64 bits.
pub fn parse_budget(value: &str) -> Result<IterationBudget> {
    let invalid = |problem: String| Error::InvalidBudget {
        value: value.to_string(),
        problem,
    };

    // i128 so that negative values and values just beyond u64 both parse and get a precise message.
    let parsed: i128 = value
        .parse()
        .map_err(|e| invalid(format!("not a base-10 integer ({e})")))?;

    if parsed <= 0 {
        return Err(invalid("the budget must be greater than zero".to_string()));
    }

    let pairs = u64::try_from(parsed)
        .ok()
        .and_then(NonZero::new)
        .ok_or_else(|| invalid(format!("the budget must not exceed {}", u64::MAX)))?;

    Ok(IterationBudget::new(pairs))
}
