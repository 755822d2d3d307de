//! Upload size ceilings.
//!
//! The inspector and the builder trust their input sizes; whatever decodes
//! uploads is expected to run these checks first.

use crate::ArchiveError;
use crate::Result;

/// Default per-file ceiling: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default aggregate ceiling: 50 MiB.
pub const DEFAULT_MAX_TOTAL_SIZE: u64 = 50 * 1024 * 1024;

/// Per-file and aggregate upload ceilings.
///
/// # Examples
///
/// ```
/// use arcpack_core::UploadLimits;
///
/// let limits = UploadLimits::default();
/// assert!(limits.check_file("a.pdf", 1024).is_ok());
/// assert!(limits.check_file("huge.pdf", 11 * 1024 * 1024).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    /// Maximum size of one file in bytes.
    pub max_file_size: u64,

    /// Maximum size of all files of one request in bytes.
    pub max_total_size: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_total_size: DEFAULT_MAX_TOTAL_SIZE,
        }
    }
}

impl UploadLimits {
    /// Rejects a single file above the per-file ceiling.
    pub fn check_file(&self, name: &str, size: u64) -> Result<()> {
        if size > self.max_file_size {
            return Err(ArchiveError::FileTooLarge {
                name: name.to_string(),
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Checks every file, then the aggregate.
    ///
    /// Returns the aggregate size on success.
    pub fn check_batch<'a, I>(&self, files: I) -> Result<u64>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut total: u64 = 0;
        for (name, size) in files {
            self.check_file(name, size)?;
            total = total.saturating_add(size);
            if total > self.max_total_size {
                return Err(ArchiveError::TotalSizeTooLarge {
                    total,
                    max: self.max_total_size,
                });
            }
        }
        Ok(total)
    }
}
