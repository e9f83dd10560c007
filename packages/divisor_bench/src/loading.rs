use std::path::Path;

use tracing::{debug, warn};

use crate::pal::{Filesystem, FilesystemFacade};
use crate::{Error, ReadErrorPolicy, Result};

/// How many numbers a complete numbers file holds.
pub const NUMBER_COUNT: usize = 1_573_888;

/// The name of the numbers file, resolved against the working directory.
pub const NUMBERS_FILE_NAME: &str = "numbers.dat";

const BYTES_PER_NUMBER: usize = size_of::<i32>();

/// The immutable array of numbers that the benchmark divides.
///
/// Values are kept in file order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberArray {
    values: Box<[i32]>,
}

impl NumberArray {
    /// Decodes an array from consecutive little-endian 32-bit groups.
    ///
    /// Any trailing bytes that do not form a complete group are ignored.
    #[must_use]
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let values = bytes
            .chunks_exact(BYTES_PER_NUMBER)
            .map(|chunk| {
                let mut group = [0_u8; BYTES_PER_NUMBER];
                group.copy_from_slice(chunk);
                i32::from_le_bytes(group)
            })
            .collect();

        Self { values }
    }

    /// The numbers, in file order.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// The number of values in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no values at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<i32>> for NumberArray {
    fn from(values: Vec<i32>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }
}

/// Loads `number_count` little-endian 32-bit integers from the start of the file at `path`.
///
/// Bytes beyond the expected length are never read.
///
/// # Errors
///
/// Returns [`Error::FileRead`] if the file cannot be opened or read and [`Error::Truncated`] if
/// it holds fewer than `number_count * 4` bytes. Under [`ReadErrorPolicy::ContinueWithZeros`]
/// neither is returned: the problem is logged and the missing bytes are treated as zero.
pub fn load_numbers(
    path: &Path,
    number_count: usize,
    policy: ReadErrorPolicy,
) -> Result<NumberArray> {
    load_numbers_with_filesystem(path, number_count, policy, &FilesystemFacade::target())
}

pub(crate) fn load_numbers_with_filesystem(
    path: &Path,
    number_count: usize,
    policy: ReadErrorPolicy,
    fs: &impl Filesystem,
) -> Result<NumberArray> {
    let expected = number_count.saturating_mul(BYTES_PER_NUMBER);

    debug!(path = %path.display(), expected, "loading numbers");

    let bytes = match fs.read_prefix(path, expected) {
        Ok(mut bytes) if bytes.len() < expected => {
            tolerate(
                Error::Truncated {
                    path: path.to_path_buf(),
                    expected,
                    actual: bytes.len(),
                },
                policy,
            )?;

            bytes.resize(expected, 0);
            bytes
        }
        Ok(bytes) => bytes,
        Err(source) => {
            tolerate(
                Error::FileRead {
                    path: path.to_path_buf(),
                    source,
                },
                policy,
            )?;

            vec![0; expected]
        }
    };

    let numbers = NumberArray::from_le_bytes(&bytes);

    debug!(count = numbers.len(), "numbers loaded");

    Ok(numbers)
}

fn tolerate(error: Error, policy: ReadErrorPolicy) -> Result<()> {
    match policy {
        ReadErrorPolicy::FailFast => Err(error),
        ReadErrorPolicy::ContinueWithZeros => {
            warn!(%error, "continuing with zero-filled numbers");
            Ok(())
        }
    }
}
