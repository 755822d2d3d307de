//! Finished archive handed back to transports.

use crate::content_type::ZIP_CONTENT_TYPE;

/// A finished container with the metadata a transport needs to send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltArchive {
    /// File name offered to the recipient.
    pub name: String,

    /// Always `application/zip`.
    pub content_type: &'static str,

    /// Finalized container bytes.
    pub bytes: Vec<u8>,
}

impl BuiltArchive {
    pub(crate) fn new(name: String, bytes: Vec<u8>) -> Self {
        Self {
            name,
            content_type: ZIP_CONTENT_TYPE,
            bytes,
        }
    }

    /// Container length in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// `Content-Disposition` header value for an attachment download.
    ///
    /// Quotes and backslashes in the name are escaped.
    pub fn content_disposition(&self) -> String {
        let escaped = self.name.replace('\\', "\\\\").replace('"', "\\\"");
        format!("attachment; filename=\"{escaped}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition() {
        let archive = BuiltArchive::new("bundle.zip".to_string(), vec![1, 2, 3]);
        assert_eq!(
            archive.content_disposition(),
            "attachment; filename=\"bundle.zip\""
        );
        assert_eq!(archive.size(), 3);
        assert_eq!(archive.content_type, "application/zip");
    }

    #[test]
    fn test_content_disposition_escapes_quotes() {
        let archive = BuiltArchive::new("a\"b.zip".to_string(), Vec::new());
        assert_eq!(
            archive.content_disposition(),
            "attachment; filename=\"a\\\"b.zip\""
        );
    }
}
