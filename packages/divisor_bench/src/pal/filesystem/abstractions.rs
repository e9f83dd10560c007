use std::fmt::Debug;
use std::io;
use std::path::Path;

/// Abstraction over the filesystem operations used by the number loader.
///
/// This trait is automatically mocked by mockall in test builds, generating `MockFilesystem`.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Filesystem: Debug + Send + Sync + 'static {
    /// Reads at most `max_len` bytes from the start of the file at `path`.
    ///
    /// Returns fewer than `max_len` bytes only if the file is shorter than that. The file is
    /// closed before this returns, whether or not reading succeeded.
    fn read_prefix(&self, path: &Path, max_len: usize) -> io::Result<Vec<u8>>;
}
