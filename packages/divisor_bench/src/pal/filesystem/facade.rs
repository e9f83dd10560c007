// The number loader is written against this facade so that tests can substitute a mock that
// returns short files, errors or slow reads.

use std::any::type_name;
use std::fmt;
use std::io;
use std::path::Path;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockFilesystem;
use crate::pal::{BuildTargetFilesystem, Filesystem};

/// Filesystem used by the number loader.
///
/// Production builds only ever hold the `Target` variant.
#[derive(Clone)]
pub(crate) enum FilesystemFacade {
    /// Real filesystem implementation.
    Target(&'static BuildTargetFilesystem),

    /// Mock filesystem for testing.
    #[cfg(test)]
    Mock(Arc<MockFilesystem>),
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl fmt::Debug for FilesystemFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Self::Target(_) => "Target",
            #[cfg(test)]
            Self::Mock(_) => "Mock",
        };

        f.debug_tuple(type_name::<Self>()).field(&variant).finish()
    }
}

static BUILD_TARGET_FILESYSTEM: BuildTargetFilesystem = BuildTargetFilesystem;

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl FilesystemFacade {
    pub(crate) const fn target() -> Self {
        Self::Target(&BUILD_TARGET_FILESYSTEM)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockFilesystem) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

// Pass-through only.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Filesystem for FilesystemFacade {
    fn read_prefix(&self, path: &Path, max_len: usize) -> io::Result<Vec<u8>> {
        match self {
            Self::Target(fs) => fs.read_prefix(path, max_len),
            #[cfg(test)]
            Self::Mock(mock) => mock.read_prefix(path, max_len),
        }
    }
}
