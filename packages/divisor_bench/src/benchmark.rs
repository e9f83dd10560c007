use std::time::Instant;

use tracing::debug;

use crate::{BenchmarkReport, IterationBudget, NumberArray};

/// The smallest divisor tested against each number.
pub const FIRST_DIVISOR: i32 = 2;

/// The exclusive upper bound of the divisor range.
pub const DIVISOR_LIMIT: i32 = 1023;

/// Runs the timed divisor sweep over `numbers` until `budget` pair visits have been made.
///
/// Divisors are visited in ascending order and, for each divisor, numbers are visited in array
/// order. When the last divisor has been tested against the last number, the sweep starts over
/// from the first divisor. A pair counts as a match if the divisor is smaller than the number
/// and divides it exactly.
///
/// Only the sweep itself is timed. An empty array permits no visits, so the sweep ends at once.
#[must_use]
pub fn run_sweep(numbers: &NumberArray, budget: IterationBudget) -> BenchmarkReport {
    debug!(%budget, numbers = numbers.len(), "starting divisor sweep");

    let start = Instant::now();
    let tally = count_matches(numbers.as_slice(), budget);
    let elapsed = start.elapsed();

    debug!(
        match_count = tally.match_count,
        pairs_visited = tally.pairs_visited,
        ?elapsed,
        "divisor sweep finished"
    );

    BenchmarkReport::new(tally.match_count, tally.pairs_visited, elapsed)
}

#[derive(Debug, Default, Eq, PartialEq)]
struct Tally {
    match_count: u64,
    pairs_visited: u64,
}

#[expect(
    clippy::arithmetic_side_effects,
    reason = "the match count never exceeds the visits, which never exceed the budget"
)]
#[expect(
    clippy::modulo_arithmetic,
    reason = "divisor and dividend are both positive here"
)]
fn count_matches(numbers: &[i32], budget: IterationBudget) -> Tally {
    if numbers.is_empty() {
        return Tally::default();
    }

    let mut remaining = budget.get();
    let mut match_count = 0_u64;

    loop {
        for divisor in FIRST_DIVISOR..DIVISOR_LIMIT {
            for &number in numbers {
                if divisor < number && number % divisor == 0 {
                    match_count += 1;
                }

                remaining -= 1;

                if remaining == 0 {
                    return Tally {
                        match_count,
                        pairs_visited: budget.get(),
                    };
                }
            }
        }
    }
}
