// Real filesystem implementation that delegates to std::fs.
//
// This is a trivial forwarder to system APIs and is excluded from coverage and mutation testing.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::pal::Filesystem;

/// Real filesystem implementation that uses the operating system's filesystem.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetFilesystem;

// Trivial forwarder to system APIs - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Filesystem for BuildTargetFilesystem {
    fn read_prefix(&self, path: &Path, max_len: usize) -> io::Result<Vec<u8>> {
        let file = File::open(path)?;

        let mut buffer = Vec::with_capacity(max_len);
        file.take(u64::try_from(max_len).unwrap_or(u64::MAX)).read_to_end(&mut buffer)?;

        Ok(buffer)
    }
}
