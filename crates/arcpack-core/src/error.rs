//! Error types for archive inspection and packaging.

use std::fmt;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Reason a single file record or archive entry is not admissible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// File name is empty.
    #[error("file name cannot be empty")]
    EmptyName,

    /// File content has zero length.
    #[error("file content is required")]
    EmptyContent,

    /// Normalized entry path is empty.
    #[error("file path is required")]
    EmptyPath,

    /// No content type was given and none could be derived from the name.
    #[error("cannot resolve content type for '{name}'")]
    UnresolvableContentType {
        /// Name or path the derivation was attempted on.
        name: String,
    },

    /// Another record in the same batch normalizes to this path.
    #[error("duplicate file path '{path}'")]
    DuplicatePath {
        /// Normalized path shared by both records.
        path: String,
    },
}

/// Step of an archive build at which a write failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStage {
    /// Writing the header or content of the named entry.
    Entry(String),
    /// Writing the central directory and trailer.
    Finalizing,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry(name) => write!(f, "entry '{name}'"),
            Self::Finalizing => write!(f, "archive trailer"),
        }
    }
}

/// Broad category of an [`ArchiveError`].
///
/// Lets a transport tell "your file is broken" apart from "your file type is
/// not supported" and from failures of the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Caller-supplied data violates a precondition.
    InputShape,
    /// Bytes do not parse as a container.
    Format,
    /// Well-formed data that the content-type policy rejects.
    Policy,
    /// Every entry of a parseable container was individually rejected.
    Aggregate,
    /// Upload ceilings exceeded.
    Limit,
    /// The underlying writer could not complete.
    Resource,
}

/// Errors returned by inspection, packaging and upload checks.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Inspection was given zero bytes.
    #[error("archive data is empty")]
    EmptyInput,

    /// Bytes could not be parsed as a ZIP container.
    #[error("invalid zip archive: {0}")]
    CorruptContainer(String),

    /// No file entries survived inspection.
    #[error("archive contains no valid files")]
    EmptyInventory,

    /// Inventory has no archive file name.
    #[error("archive file name cannot be empty")]
    EmptyFilename,

    /// An inventory entry failed re-validation.
    #[error("invalid file detail '{path}': {reason}")]
    InvalidEntry {
        /// Entry path as stored in the inventory.
        path: String,
        /// Underlying validation failure.
        #[source]
        reason: ValidationError,
    },

    /// Packaging was given no files.
    #[error("files list cannot be empty")]
    EmptyFileList,

    /// A file record failed validation.
    #[error("invalid file '{name}': {reason}")]
    InvalidRecord {
        /// File name as given by the caller.
        name: String,
        /// Underlying validation failure.
        #[source]
        reason: ValidationError,
    },

    /// Content type is well-formed but not on the allow-list.
    #[error("content type '{content_type}' is not allowed for '{name}'")]
    ContentTypeNotAllowed {
        /// File name.
        name: String,
        /// Rejected content type.
        content_type: String,
    },

    /// A single upload exceeds the per-file ceiling.
    #[error("file '{name}' is {size} bytes, exceeding the {max} byte limit")]
    FileTooLarge {
        /// File name.
        name: String,
        /// File size in bytes.
        size: u64,
        /// Per-file ceiling in bytes.
        max: u64,
    },

    /// Uploads together exceed the aggregate ceiling.
    #[error("total upload size {total} bytes exceeds the {max} byte limit")]
    TotalSizeTooLarge {
        /// Aggregate size in bytes (saturated on overflow).
        total: u64,
        /// Aggregate ceiling in bytes.
        max: u64,
    },

    /// A mail message has no recipients.
    #[error("no recipients provided")]
    NoRecipients,

    /// A recipient is not a well-formed email address.
    #[error("invalid email format: {address}")]
    InvalidRecipient {
        /// Address as given.
        address: String,
    },

    /// A mail message has an empty subject.
    #[error("subject cannot be empty")]
    EmptySubject,

    /// The container writer failed.
    #[error("failed to write {stage}: {source}")]
    WriteFailure {
        /// Step at which the write failed.
        stage: BuildStage,
        /// I/O-level cause.
        #[source]
        source: std::io::Error,
    },
}

impl ArchiveError {
    /// Wraps a validation failure with the name of the offending record.
    pub fn invalid_record(name: impl Into<String>, reason: ValidationError) -> Self {
        Self::InvalidRecord {
            name: name.into(),
            reason,
        }
    }

    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcpack_core::ArchiveError;
    /// use arcpack_core::ErrorClass;
    ///
    /// assert_eq!(ArchiveError::EmptyInput.class(), ErrorClass::InputShape);
    /// assert_eq!(
    ///     ArchiveError::CorruptContainer("bad magic".into()).class(),
    ///     ErrorClass::Format
    /// );
    /// ```
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::EmptyInput
            | Self::EmptyFilename
            | Self::EmptyFileList
            | Self::NoRecipients
            | Self::InvalidRecipient { .. }
            | Self::EmptySubject => ErrorClass::InputShape,
            Self::CorruptContainer(_) => ErrorClass::Format,
            Self::EmptyInventory => ErrorClass::Aggregate,
            Self::InvalidEntry { reason, .. } | Self::InvalidRecord { reason, .. } => {
                match reason {
                    ValidationError::UnresolvableContentType { .. } => ErrorClass::Policy,
                    _ => ErrorClass::InputShape,
                }
            }
            Self::ContentTypeNotAllowed { .. } => ErrorClass::Policy,
            Self::FileTooLarge { .. } | Self::TotalSizeTooLarge { .. } => ErrorClass::Limit,
            Self::WriteFailure { .. } => ErrorClass::Resource,
        }
    }

    /// Returns `true` if the caller's input caused the failure.
    ///
    /// Only writer failures are attributed to the environment.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self.class(), ErrorClass::Resource)
    }

    /// HTTP status a transport should answer this error with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.class() {
            ErrorClass::InputShape | ErrorClass::Format => 400,
            ErrorClass::Limit => 413,
            ErrorClass::Policy => 415,
            ErrorClass::Aggregate => 422,
            ErrorClass::Resource => 500,
        }
    }

    /// Returns the file name this error refers to, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::InvalidRecord { name, .. }
            | Self::ContentTypeNotAllowed { name, .. }
            | Self::FileTooLarge { name, .. }
            | Self::WriteFailure {
                stage: BuildStage::Entry(name),
                ..
            } => Some(name),
            Self::InvalidEntry { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchiveError::EmptyFileList;
        assert_eq!(err.to_string(), "files list cannot be empty");
    }

    #[test]
    fn test_invalid_record_names_file() {
        let err = ArchiveError::invalid_record("report.pdf", ValidationError::EmptyContent);
        assert_eq!(
            err.to_string(),
            "invalid file 'report.pdf': file content is required"
        );
        assert_eq!(err.file_name(), Some("report.pdf"));
    }

    #[test]
    fn test_classes() {
        assert_eq!(ArchiveError::EmptyInventory.class(), ErrorClass::Aggregate);
        assert_eq!(
            ArchiveError::invalid_record(
                "x.unknownext",
                ValidationError::UnresolvableContentType {
                    name: "x.unknownext".into()
                }
            )
            .class(),
            ErrorClass::Policy
        );
        assert_eq!(
            ArchiveError::invalid_record("", ValidationError::EmptyName).class(),
            ErrorClass::InputShape
        );
        assert_eq!(
            ArchiveError::TotalSizeTooLarge { total: 2, max: 1 }.class(),
            ErrorClass::Limit
        );
    }

    #[test]
    fn test_write_failure_is_server_side() {
        let err = ArchiveError::WriteFailure {
            stage: BuildStage::Entry("a.txt".into()),
            source: std::io::Error::other("disk full"),
        };
        assert!(!err.is_client_error());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.file_name(), Some("a.txt"));
        assert_eq!(
            err.to_string(),
            "failed to write entry 'a.txt': disk full"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ArchiveError::EmptyInput.status_code(), 400);
        assert_eq!(
            ArchiveError::CorruptContainer("x".into()).status_code(),
            400
        );
        assert_eq!(ArchiveError::EmptyInventory.status_code(), 422);
        assert_eq!(
            ArchiveError::ContentTypeNotAllowed {
                name: "a.txt".into(),
                content_type: "text/plain".into(),
            }
            .status_code(),
            415
        );
        assert!(ArchiveError::EmptyInput.is_client_error());
    }

    #[test]
    fn test_duplicate_path_is_client_error() {
        let err = ArchiveError::invalid_record(
            "./a.pdf",
            ValidationError::DuplicatePath {
                path: "a.pdf".into(),
            },
        );
        assert_eq!(err.class(), ErrorClass::InputShape);
        assert!(err.is_client_error());
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_string(),
            "invalid file './a.pdf': duplicate file path 'a.pdf'"
        );
    }

    #[test]
    fn test_mail_errors_are_input_shape() {
        for err in [
            ArchiveError::NoRecipients,
            ArchiveError::EmptySubject,
            ArchiveError::InvalidRecipient {
                address: "nobody".into(),
            },
        ] {
            assert_eq!(err.class(), ErrorClass::InputShape);
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.file_name(), None);
        }
    }
}
