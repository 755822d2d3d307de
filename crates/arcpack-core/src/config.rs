//! Configuration shared by inspection and packaging.

use crate::content_type::AllowedTypeSet;
use crate::content_type::ContentTypeTable;
use crate::limits::UploadLimits;
use crate::validation::Validator;

/// Archive name used when the caller gives none.
pub const DEFAULT_ARCHIVE_NAME: &str = "archive.zip";

/// Lookup tables, upload ceilings and naming defaults.
///
/// Pass by reference; the tables are read-only once built and can be shared
/// between threads.
///
/// # Examples
///
/// ```
/// use arcpack_core::CodecConfig;
/// use arcpack_core::ContentTypeTable;
/// use arcpack_core::UploadLimits;
///
/// let config = CodecConfig::default()
///     .with_content_types(ContentTypeTable::standard().with_mapping("log", "text/plain"))
///     .with_limits(UploadLimits {
///         max_file_size: 1024,
///         max_total_size: 4096,
///     });
/// assert_eq!(config.limits.max_file_size, 1024);
/// ```
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Extension to content-type table used for derivation.
    pub content_types: ContentTypeTable,

    /// Content types admissible for packaging.
    pub allowed_types: AllowedTypeSet,

    /// Content types admissible as mail attachments.
    pub attachment_types: AllowedTypeSet,

    /// Upload ceilings enforced before inspection or packaging.
    pub limits: UploadLimits,

    /// Name given to built archives when none is supplied.
    pub default_archive_name: String,
}

impl Default for CodecConfig {
    /// Standard tables, 10 MiB / 50 MiB limits, `archive.zip`.
    fn default() -> Self {
        Self {
            content_types: ContentTypeTable::standard(),
            allowed_types: AllowedTypeSet::standard(),
            attachment_types: AllowedTypeSet::attachments(),
            limits: UploadLimits::default(),
            default_archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
        }
    }
}

impl CodecConfig {
    /// Replaces the content-type table.
    #[must_use]
    pub fn with_content_types(mut self, table: ContentTypeTable) -> Self {
        self.content_types = table;
        self
    }

    /// Replaces the allow-list.
    #[must_use]
    pub fn with_allowed_types(mut self, allowed: AllowedTypeSet) -> Self {
        self.allowed_types = allowed;
        self
    }

    /// Replaces the mail attachment allow-list.
    #[must_use]
    pub fn with_attachment_types(mut self, allowed: AllowedTypeSet) -> Self {
        self.attachment_types = allowed;
        self
    }

    /// Replaces the upload ceilings.
    #[must_use]
    pub fn with_limits(mut self, limits: UploadLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the default archive name.
    #[must_use]
    pub fn with_default_archive_name(mut self, name: impl Into<String>) -> Self {
        self.default_archive_name = name.into();
        self
    }

    /// Returns a validator over this configuration's tables.
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(
            &self.content_types,
            &self.allowed_types,
            &self.attachment_types,
        )
    }
}
