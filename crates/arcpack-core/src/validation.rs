//! Admissibility rules shared by the inspector, the builder and any
//! attachment sender.

use std::sync::LazyLock;

use regex::Regex;

use crate::ArchiveError;
use crate::Result;
use crate::ValidationError;
use crate::content_type::AllowedTypeSet;
use crate::content_type::ContentTypeTable;
use crate::model::EntryDescriptor;
use crate::model::FileRecord;
use crate::model::MailMessage;
use crate::path::normalize_entry_path;

static RECIPIENT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// Returns `true` if `address` looks like a deliverable email address.
///
/// ```
/// use arcpack_core::validation::is_valid_recipient;
///
/// assert!(is_valid_recipient("hr@example.com"));
/// assert!(!is_valid_recipient("hr@localhost"));
/// ```
pub fn is_valid_recipient(address: &str) -> bool {
    RECIPIENT_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(address))
}

/// Validates file records and entry descriptors against injected tables.
///
/// # Examples
///
/// ```
/// use arcpack_core::AllowedTypeSet;
/// use arcpack_core::ContentTypeTable;
/// use arcpack_core::FileRecord;
/// use arcpack_core::Validator;
///
/// let table = ContentTypeTable::standard();
/// let allowed = AllowedTypeSet::standard();
/// let attachments = AllowedTypeSet::attachments();
/// let validator = Validator::new(&table, &allowed, &attachments);
///
/// let mut record = FileRecord::new("report.pdf", b"%PDF".to_vec());
/// validator.validate_file_record(&mut record)?;
/// assert_eq!(record.content_type(), "application/pdf");
/// assert!(validator.is_allowed_content_type(record.content_type()));
/// # Ok::<(), arcpack_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    content_types: &'a ContentTypeTable,
    allowed: &'a AllowedTypeSet,
    attachment_types: &'a AllowedTypeSet,
}

impl<'a> Validator<'a> {
    /// Creates a validator over the given tables.
    pub const fn new(
        content_types: &'a ContentTypeTable,
        allowed: &'a AllowedTypeSet,
        attachment_types: &'a AllowedTypeSet,
    ) -> Self {
        Self {
            content_types,
            allowed,
            attachment_types,
        }
    }

    /// Checks that a record is admissible, deriving its content type if
    /// missing.
    ///
    /// Only the content type is ever written, and only when it was empty.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if the name is empty
    /// - `EmptyContent` if the content has zero length
    /// - `UnresolvableContentType` if no type was given and the extension has
    ///   no mapping
    pub fn validate_file_record(
        &self,
        record: &mut FileRecord,
    ) -> std::result::Result<(), ValidationError> {
        if record.name().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if record.content().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        if record.content_type().is_empty() {
            let derived = self.content_types.lookup(record.name()).ok_or_else(|| {
                ValidationError::UnresolvableContentType {
                    name: record.name().to_string(),
                }
            })?;
            record.set_content_type(derived);
        }
        Ok(())
    }

    /// Checks an entry descriptor. See [`validate_entry_descriptor`].
    pub fn validate_entry_descriptor(
        &self,
        entry: &EntryDescriptor,
    ) -> std::result::Result<(), ValidationError> {
        validate_entry_descriptor(entry)
    }

    /// Returns `true` if `content_type` is on the allow-list.
    pub fn is_allowed_content_type(&self, content_type: &str) -> bool {
        self.allowed.contains(content_type)
    }

    /// Rejects a validated record whose content type is not on the
    /// allow-list.
    pub fn ensure_allowed(&self, record: &FileRecord) -> Result<()> {
        if self.is_allowed_content_type(record.content_type()) {
            return Ok(());
        }
        tracing::warn!(
            filename = %record.name(),
            content_type = %record.content_type(),
            "content type not allowed"
        );
        Err(ArchiveError::ContentTypeNotAllowed {
            name: record.name().to_string(),
            content_type: record.content_type().to_string(),
        })
    }

    /// Validates every record, then applies the allow-list.
    ///
    /// # Errors
    ///
    /// - `EmptyFileList` if `records` is empty
    /// - `InvalidRecord` naming the first record that fails validation
    /// - `ContentTypeNotAllowed` naming the first record with a type off the
    ///   allow-list
    pub fn admit(&self, records: &mut [FileRecord]) -> Result<()> {
        if records.is_empty() {
            return Err(ArchiveError::EmptyFileList);
        }
        for record in records.iter_mut() {
            self.validate_file_record(record)
                .map_err(|reason| ArchiveError::invalid_record(record.name(), reason))?;
            self.ensure_allowed(record)?;
        }
        Ok(())
    }

    /// Returns `true` if `content_type` may be sent as a mail attachment.
    pub fn is_allowed_attachment_type(&self, content_type: &str) -> bool {
        self.attachment_types.contains(content_type)
    }

    /// Checks that a mail message may be handed to a transport.
    ///
    /// The attachment's content type is derived if missing, as for packaging,
    /// then checked against the attachment allow-list.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    /// - `NoRecipients` if the recipient list is empty
    /// - `InvalidRecipient` naming the first malformed address
    /// - `EmptySubject` if the subject is empty
    /// - `InvalidRecord` if the attachment fails validation
    /// - `ContentTypeNotAllowed` if the attachment type is not on the
    ///   attachment allow-list
    pub fn admit_mail(&self, message: &mut MailMessage) -> Result<()> {
        if message.recipients().is_empty() {
            return Err(ArchiveError::NoRecipients);
        }
        if let Some(address) = message
            .recipients()
            .iter()
            .find(|address| !is_valid_recipient(address))
        {
            return Err(ArchiveError::InvalidRecipient {
                address: address.clone(),
            });
        }
        if message.subject().is_empty() {
            return Err(ArchiveError::EmptySubject);
        }

        let attachment = &mut message.attachment;
        self.validate_file_record(attachment)
            .map_err(|reason| ArchiveError::invalid_record(attachment.name(), reason))?;
        if !self.is_allowed_attachment_type(attachment.content_type()) {
            tracing::warn!(
                filename = %attachment.name(),
                content_type = %attachment.content_type(),
                "attachment type not allowed"
            );
            return Err(ArchiveError::ContentTypeNotAllowed {
                name: attachment.name().to_string(),
                content_type: attachment.content_type().to_string(),
            });
        }
        Ok(())
    }

    /// Builds a descriptor for a raw container entry name.
    ///
    /// The path is normalized and the content type derived from the cleaned
    /// path, falling back to `application/octet-stream`.
    pub fn describe_entry(&self, raw_name: &str, size: u64) -> EntryDescriptor {
        let path = normalize_entry_path(raw_name);
        let content_type = self.content_types.lookup_or_default(&path).to_string();
        EntryDescriptor::new(path, size, content_type)
    }
}

/// Checks that an entry descriptor is admissible.
///
/// Sizes are unsigned, so the only failures are an empty path or an empty
/// content type.
pub fn validate_entry_descriptor(
    entry: &EntryDescriptor,
) -> std::result::Result<(), ValidationError> {
    if entry.path.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    if entry.content_type.is_empty() {
        return Err(ValidationError::UnresolvableContentType {
            name: entry.path.clone(),
        });
    }
    Ok(())
}
