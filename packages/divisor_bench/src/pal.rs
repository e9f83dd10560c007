// Platform abstraction layer for divisor_bench.
//
// Abstracts the filesystem access of the number loader so that short reads, missing files and
// slow devices can be simulated in tests. Three layers: abstraction (trait) → facade (enum) →
// real implementation.

mod filesystem;

pub(crate) use filesystem::*;
