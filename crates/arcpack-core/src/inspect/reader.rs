//! ZIP central directory reader.

use std::io::Cursor;

use zip::ZipArchive;

use crate::ArchiveError;
use crate::CodecConfig;
use crate::Result;
use crate::model::ArchiveInventory;
use crate::model::EntryDescriptor;
use crate::validation::Validator;

/// Inventories the file entries of an in-memory ZIP container.
///
/// Entries are reported in central directory order. Directory entries are
/// skipped. An entry that cannot be read or fails validation is logged and
/// dropped; the rest of the container is still reported.
///
/// Each entry's local header is read to reach its metadata, so an entry
/// whose local header is damaged is dropped even when its central directory
/// record is intact.
///
/// # Arguments
///
/// * `data` - Raw container bytes
/// * `filename` - Name the container was uploaded under; an empty name is
///   replaced by the configured default archive name
/// * `config` - Content-type table used to describe entries
///
/// # Errors
///
/// Returns error if:
/// - `data` is empty (`EmptyInput`)
/// - `data` is not a ZIP container (`CorruptContainer`)
/// - no file entry survives validation (`EmptyInventory`)
pub fn inspect_archive(data: &[u8], filename: &str, config: &CodecConfig) -> Result<ArchiveInventory> {
    if data.is_empty() {
        return Err(ArchiveError::EmptyInput);
    }
    let filename = if filename.is_empty() {
        config.default_archive_name.as_str()
    } else {
        filename
    };

    let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
        tracing::debug!(filename = %filename, error = %e, "failed to open zip archive");
        ArchiveError::CorruptContainer(e.to_string())
    })?;

    let entries = collect_entries(&mut archive, &config.validator());

    tracing::debug!(
        filename = %filename,
        archive_size = data.len(),
        directory_records = archive.len(),
        retained = entries.len(),
        "inspected archive"
    );

    ArchiveInventory::from_entries(filename, data.len() as u64, entries)
}

fn collect_entries<R: std::io::Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    validator: &Validator<'_>,
) -> Vec<EntryDescriptor> {
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        // Raw access reads headers only; nothing is decompressed.
        let descriptor = match archive.by_index_raw(index) {
            Ok(file) if file.is_dir() => continue,
            Ok(file) => validator.describe_entry(file.name(), file.size()),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable archive entry");
                continue;
            }
        };

        if let Err(e) = validator.validate_entry_descriptor(&descriptor) {
            tracing::warn!(
                path = %descriptor.path,
                error = %e,
                "invalid file in archive"
            );
            continue;
        }

        entries.push(descriptor);
    }

    entries
}
