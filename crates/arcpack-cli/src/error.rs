//! Error conversion utilities for CLI.
//!
//! Converts arcpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use arcpack_core::ArchiveError;
use arcpack_core::ValidationError;
use std::path::Path;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, target: &Path) -> anyhow::Error {
    match err {
        ArchiveError::EmptyInput => {
            anyhow!("Archive '{}' is empty", target.display())
        }
        ArchiveError::CorruptContainer(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: Only ZIP archives are supported; the file may be corrupted or truncated.",
                target.display(),
                reason
            )
        }
        ArchiveError::EmptyInventory => {
            anyhow!(
                "Archive '{}' contains no valid files\n\
                 HINT: Directory entries and entries without a usable path are not reported.",
                target.display()
            )
        }
        ArchiveError::InvalidRecord {
            name,
            reason: ValidationError::DuplicatePath { path },
        } => {
            anyhow!(
                "Input '{}' would be stored as '{}', which is already taken\n\
                 HINT: Rename one of the files or use --name-as-given.",
                name,
                path
            )
        }
        ArchiveError::ContentTypeNotAllowed { name, content_type } => {
            anyhow!(
                "File type not supported: '{}' ({})\n\
                 HINT: Allowed types are DOCX, XML, JPEG, PNG and PDF. Use --allow-any-type to package anything.",
                name,
                content_type
            )
        }
        ArchiveError::FileTooLarge { name, size, max } => {
            anyhow!(
                "File '{}' is too large: {} bytes (limit {} bytes)\n\
                 HINT: Use --max-file-size to raise the limit.",
                name,
                size,
                max
            )
        }
        ArchiveError::TotalSizeTooLarge { total, max } => {
            anyhow!(
                "Input files are too large together: {} bytes (limit {} bytes)\n\
                 HINT: Use --max-total-size to raise the limit.",
                total,
                max
            )
        }
        ArchiveError::WriteFailure { .. } => anyhow::Error::from(err)
            .context(format!("Failed to write archive '{}'", target.display())),
        _ => anyhow::Error::from(err).context(format!("Error processing '{}'", target.display())),
    }
}

/// Adds context to a core result about the archive being processed
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    target: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_corrupt_container() {
        let err = ArchiveError::CorruptContainer("could not find EOCD".to_string());
        let converted = convert_archive_error(err, Path::new("broken.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Invalid archive"));
        assert!(msg.contains("broken.zip"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_policy_error() {
        let err = ArchiveError::ContentTypeNotAllowed {
            name: "notes.txt".to_string(),
            content_type: "text/plain; charset=utf-8".to_string(),
        };
        let converted = convert_archive_error(err, Path::new("out.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("not supported"));
        assert!(msg.contains("--allow-any-type"));
    }

    #[test]
    fn test_convert_invalid_record_keeps_source() {
        let err = ArchiveError::invalid_record("a.bin", ValidationError::EmptyContent);
        let converted = convert_archive_error(err, Path::new("out.zip"));
        let msg = format!("{converted:#}");
        assert!(msg.contains("out.zip"));
        assert!(msg.contains("a.bin"));
        assert!(msg.contains("file content is required"));
    }

    #[test]
    fn test_convert_duplicate_path_suggests_flag() {
        let err = ArchiveError::invalid_record(
            "two/cv.pdf",
            ValidationError::DuplicatePath {
                path: "cv.pdf".to_string(),
            },
        );
        let converted = convert_archive_error(err, Path::new("out.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("already taken"));
        assert!(msg.contains("--name-as-given"));
    }
}
