//! Archive inventory with derived totals.

use serde::Serialize;

use crate::ArchiveError;
use crate::Result;
use crate::model::EntryDescriptor;
use crate::validation::validate_entry_descriptor;

/// Inventory of the file entries found in a container.
///
/// `total_size` and `total_files` are always derived from `entries`; there is
/// no way to set them directly. An inventory returned by this crate is
/// validated and holds at least one entry.
///
/// Serializes to the JSON document used by transports:
///
/// ```json
/// {
///   "filename": "photos.zip",
///   "archive_size": 2048,
///   "total_size": 4096,
///   "total_files": 2,
///   "files": [{ "file_path": "a.png", "size": 2048, "mimetype": "image/png" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveInventory {
    filename: String,
    archive_size: u64,
    total_size: u64,
    total_files: usize,
    #[serde(rename = "files")]
    entries: Vec<EntryDescriptor>,
}

impl ArchiveInventory {
    /// Builds a validated inventory from entries in container order.
    ///
    /// # Errors
    ///
    /// - `EmptyFilename` if `filename` is empty
    /// - `EmptyInventory` if `entries` is empty
    /// - `InvalidEntry` if any entry fails validation
    ///
    /// # Examples
    ///
    /// ```
    /// use arcpack_core::ArchiveInventory;
    /// use arcpack_core::EntryDescriptor;
    ///
    /// let inventory = ArchiveInventory::from_entries(
    ///     "bundle.zip",
    ///     300,
    ///     vec![
    ///         EntryDescriptor::new("a.pdf", 100, "application/pdf"),
    ///         EntryDescriptor::new("b.png", 250, "image/png"),
    ///     ],
    /// )?;
    /// assert_eq!(inventory.total_size(), 350);
    /// assert_eq!(inventory.total_files(), 2);
    /// # Ok::<(), arcpack_core::ArchiveError>(())
    /// ```
    pub fn from_entries(
        filename: impl Into<String>,
        archive_size: u64,
        entries: Vec<EntryDescriptor>,
    ) -> Result<Self> {
        let mut inventory = Self {
            filename: filename.into(),
            archive_size,
            total_size: 0,
            total_files: 0,
            entries,
        };
        inventory.recompute_totals()?;
        inventory.validate()?;
        Ok(inventory)
    }

    fn recompute_totals(&mut self) -> Result<()> {
        self.total_size = self
            .entries
            .iter()
            .try_fold(0u64, |acc, entry| acc.checked_add(entry.size))
            .ok_or_else(|| {
                ArchiveError::CorruptContainer("total uncompressed size overflows".to_string())
            })?;
        self.total_files = self.entries.len();
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.filename.is_empty() {
            return Err(ArchiveError::EmptyFilename);
        }
        if self.entries.is_empty() {
            return Err(ArchiveError::EmptyInventory);
        }
        for entry in &self.entries {
            validate_entry_descriptor(entry).map_err(|reason| ArchiveError::InvalidEntry {
                path: entry.path.clone(),
                reason,
            })?;
        }
        Ok(())
    }

    /// Name of the inspected container.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Byte length of the raw container.
    pub fn archive_size(&self) -> u64 {
        self.archive_size
    }

    /// Sum of all entry sizes.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Number of entries.
    pub fn total_files(&self) -> usize {
        self.total_files
    }

    /// Entries in container directory order.
    pub fn entries(&self) -> &[EntryDescriptor] {
        &self.entries
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ValidationError;

    fn entry(path: &str, size: u64) -> EntryDescriptor {
        EntryDescriptor::new(path, size, "application/octet-stream")
    }

    #[test]
    fn test_totals_are_derived() {
        let inventory = ArchiveInventory::from_entries(
            "a.zip",
            10,
            vec![entry("a", 1), entry("b", 2), entry("c", 0)],
        )
        .unwrap();
        assert_eq!(inventory.total_size(), 3);
        assert_eq!(inventory.total_files(), 3);
        assert_eq!(inventory.archive_size(), 10);
        assert_eq!(inventory.filename(), "a.zip");
    }

    #[test]
    fn test_empty_entries_rejected() {
        let result = ArchiveInventory::from_entries("a.zip", 22, Vec::new());
        assert!(matches!(result, Err(ArchiveError::EmptyInventory)));
    }

    #[test]
    fn test_empty_filename_rejected() {
        let result = ArchiveInventory::from_entries("", 22, vec![entry("a", 1)]);
        assert!(matches!(result, Err(ArchiveError::EmptyFilename)));
    }

    #[test]
    fn test_invalid_entry_rejected() {
        let result = ArchiveInventory::from_entries("a.zip", 22, vec![entry("", 1)]);
        assert!(matches!(
            result,
            Err(ArchiveError::InvalidEntry {
                reason: ValidationError::EmptyPath,
                ..
            })
        ));
    }

    #[test]
    fn test_total_overflow_rejected() {
        let result =
            ArchiveInventory::from_entries("a.zip", 22, vec![entry("a", u64::MAX), entry("b", 1)]);
        assert!(matches!(result, Err(ArchiveError::CorruptContainer(_))));
    }

    #[test]
    fn test_json_shape() {
        let inventory = ArchiveInventory::from_entries(
            "docs.zip",
            120,
            vec![EntryDescriptor::new("dir/a.pdf", 42, "application/pdf")],
        )
        .unwrap();

        let value = serde_json::to_value(&inventory).unwrap();
        assert_eq!(value["filename"], "docs.zip");
        assert_eq!(value["archive_size"], 120);
        assert_eq!(value["total_size"], 42);
        assert_eq!(value["total_files"], 1);
        assert_eq!(value["files"][0]["file_path"], "dir/a.pdf");
        assert_eq!(value["files"][0]["size"], 42);
        assert_eq!(value["files"][0]["mimetype"], "application/pdf");
    }
}
