//! In-memory file records.

/// An in-memory file to be packaged.
///
/// The content type may be left empty at construction; validation fills it
/// in from the name's extension exactly once.
///
/// # Examples
///
/// ```
/// use arcpack_core::FileRecord;
///
/// let record = FileRecord::new("report.pdf", b"%PDF-1.7".to_vec());
/// assert_eq!(record.size(), 8);
/// assert!(record.content_type().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: String,
    content: Vec<u8>,
    content_type: String,
}

impl FileRecord {
    /// Creates a record with no content type.
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            content_type: String::new(),
        }
    }

    /// Sets the content type claimed by the uploader.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// File name, used as the archive path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content type, empty until given or derived.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Size of the content in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub(crate) fn set_content_type(&mut self, content_type: &str) {
        self.content_type = content_type.to_string();
    }
}
