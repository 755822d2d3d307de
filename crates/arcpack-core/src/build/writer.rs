//! ZIP container writer.

use std::collections::HashSet;
use std::io::Cursor;
use std::io::Seek;
use std::io::Write;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::ArchiveError;
use crate::CodecConfig;
use crate::Result;
use crate::ValidationError;
use crate::build::BuiltArchive;
use crate::error::BuildStage;
use crate::model::FileRecord;
use crate::path::normalize_entry_path;

/// Packages records into a ZIP container, one entry per record in input
/// order.
///
/// Records are validated first; missing content types are filled in on the
/// records themselves. Entry names are the records' names after
/// [`normalize_entry_path`], so inspecting the result reports the same paths.
/// Content is deflated with the default level.
///
/// # Errors
///
/// Returns error if:
/// - `records` is empty (`EmptyFileList`)
/// - a record fails validation, its name normalizes to nothing, or two
///   names normalize to the same path (`InvalidRecord`, naming the first
///   such record)
/// - the writer fails (`WriteFailure`)
///
/// No bytes are returned on any error.
pub fn build_archive(records: &mut [FileRecord], config: &CodecConfig) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(ArchiveError::EmptyFileList);
    }

    let validator = config.validator();
    let mut seen = HashSet::with_capacity(records.len());
    for record in records.iter_mut() {
        validator
            .validate_file_record(record)
            .map_err(|reason| ArchiveError::invalid_record(record.name(), reason))?;
        let path = normalize_entry_path(record.name());
        if path.is_empty() {
            return Err(ArchiveError::invalid_record(
                record.name(),
                ValidationError::EmptyPath,
            ));
        }
        if seen.contains(&path) {
            return Err(ArchiveError::invalid_record(
                record.name(),
                ValidationError::DuplicatePath { path },
            ));
        }
        seen.insert(path);
    }

    let cursor = write_container(Cursor::new(Vec::new()), records)?;
    Ok(cursor.into_inner())
}

/// Like [`build_archive`], returning the bytes with a download name.
///
/// An empty `name` falls back to the configured default archive name.
pub fn build_named(
    records: &mut [FileRecord],
    name: &str,
    config: &CodecConfig,
) -> Result<BuiltArchive> {
    let bytes = build_archive(records, config)?;
    let name = if name.is_empty() {
        config.default_archive_name.clone()
    } else {
        name.to_string()
    };
    Ok(BuiltArchive::new(name, bytes))
}

/// Writes validated records and finalizes the container.
///
/// The writer is finished on every path; on failure the partial output is
/// dropped.
fn write_container<W: Write + Seek>(writer: W, records: &[FileRecord]) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for record in records {
        if let Err(source) = write_entry(&mut zip, record, options) {
            abandon(zip);
            return Err(ArchiveError::WriteFailure {
                stage: BuildStage::Entry(record.name().to_string()),
                source,
            });
        }
    }

    let writer = zip.finish().map_err(|e| ArchiveError::WriteFailure {
        stage: BuildStage::Finalizing,
        source: std::io::Error::other(e),
    })?;

    tracing::debug!(entries = records.len(), "finalized zip archive");

    Ok(writer)
}

fn write_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    record: &FileRecord,
    options: SimpleFileOptions,
) -> std::io::Result<()> {
    let entry_name = normalize_entry_path(record.name());

    zip.start_file(entry_name.as_str(), options)
        .map_err(|e| std::io::Error::other(format!("failed to start file in ZIP: {e}")))?;
    zip.write_all(record.content())?;

    tracing::debug!(
        entry = %entry_name,
        size = record.size(),
        content_type = %record.content_type(),
        "wrote archive entry"
    );

    Ok(())
}

fn abandon<W: Write + Seek>(zip: ZipWriter<W>) {
    if let Err(e) = zip.finish() {
        tracing::error!(error = %e, "failed to close zip writer");
    }
}
