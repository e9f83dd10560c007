use std::io::{self, Write};
use std::time::Duration;

/// The outcome of one benchmark run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BenchmarkReport {
    match_count: u64,
    pairs_visited: u64,
    elapsed: Duration,
}

impl BenchmarkReport {
    pub(crate) const fn new(match_count: u64, pairs_visited: u64, elapsed: Duration) -> Self {
        Self {
            match_count,
            pairs_visited,
            elapsed,
        }
    }

    /// How many visited (divisor, number) pairs were exact divisions.
    #[must_use]
    pub const fn match_count(&self) -> u64 {
        self.match_count
    }

    /// How many (divisor, number) pairs were visited.
    #[must_use]
    pub const fn pairs_visited(&self) -> u64 {
        self.pairs_visited
    }

    /// Wall-clock time spent in the divisor sweep, excluding loading.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Writes the two result lines of a benchmark run.
///
/// The first line still calls matches "primes", which is what existing result parsers look for.
/// The elapsed time is truncated to whole microseconds.
///
/// # Errors
///
/// Returns any error produced by the underlying writer.
pub fn write_report(report: &BenchmarkReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Found {} primes.", report.match_count)?;
    writeln!(out, "Took {} microseconds.", report.elapsed.as_micros())?;

    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn render(report: &BenchmarkReport) -> String {
        let mut out = Vec::new();
        write_report(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_exactly_two_lines() {
        let report = BenchmarkReport::new(2, 4, Duration::from_micros(1500));

        assert_eq!(render(&report), "Found 2 primes.\nTook 1500 microseconds.\n");
    }

    #[test]
    fn truncates_to_whole_microseconds() {
        let report = BenchmarkReport::new(0, 1, Duration::from_nanos(2_999));

        assert_eq!(render(&report), "Found 0 primes.\nTook 2 microseconds.\n");
    }

    #[test]
    fn large_values_are_not_abbreviated() {
        let report = BenchmarkReport::new(
            1_234_567_890,
            1_000_000_000_000,
            Duration::from_secs(3_600),
        );

        assert_eq!(
            render(&report),
            "Found 1234567890 primes.\nTook 3600000000 microseconds.\n"
        );
    }
}
