//! Content-type lookup tables.
//!
//! Both tables are plain values handed to [`Validator`](crate::Validator) at
//! construction. Nothing here is global, so tests can substitute fixed tables.

use std::collections::HashMap;
use std::collections::HashSet;

/// Content type reported for entries whose extension has no mapping.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type of the containers produced by the builder.
pub const ZIP_CONTENT_TYPE: &str = "application/zip";

/// DOCX content type.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const STANDARD_MAPPINGS: &[(&str, &str)] = &[
    // Documents
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    ("docx", DOCX_CONTENT_TYPE),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("rtf", "application/rtf"),
    // Markup and text
    ("xml", "application/xml"),
    ("json", "application/json"),
    ("html", "text/html; charset=utf-8"),
    ("htm", "text/html; charset=utf-8"),
    ("css", "text/css; charset=utf-8"),
    ("js", "text/javascript; charset=utf-8"),
    ("txt", "text/plain; charset=utf-8"),
    ("csv", "text/csv; charset=utf-8"),
    ("md", "text/markdown; charset=utf-8"),
    // Images
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("svg", "image/svg+xml"),
    ("bmp", "image/bmp"),
    ("ico", "image/vnd.microsoft.icon"),
    // Audio
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("flac", "audio/flac"),
    ("aac", "audio/aac"),
    // Video
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("mkv", "video/x-matroska"),
    // Archives
    ("zip", ZIP_CONTENT_TYPE),
    ("tar", "application/x-tar"),
    ("gz", "application/gzip"),
    ("7z", "application/x-7z-compressed"),
    // Fonts
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("wasm", "application/wasm"),
];

const STANDARD_ALLOWED: &[&str] = &[
    DOCX_CONTENT_TYPE,
    "application/xml",
    "image/jpeg",
    "image/png",
    "application/pdf",
];

const ATTACHMENT_ALLOWED: &[&str] = &[DOCX_CONTENT_TYPE, "application/pdf"];

/// Returns the lowercase extension of the last path segment, if any.
///
/// A leading dot alone (`.bashrc`) does not count as an extension.
pub fn extension_of(name: &str) -> Option<String> {
    let file_name = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Strips parameters and lowercases a content type (`Image/JPEG; q=1` ->
/// `image/jpeg`).
pub fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase()
}

/// Extension to content-type lookup table.
///
/// # Examples
///
/// ```
/// use arcpack_core::ContentTypeTable;
///
/// let table = ContentTypeTable::standard();
/// assert_eq!(table.lookup("report.PDF"), Some("application/pdf"));
/// assert_eq!(table.lookup("x.unknownext"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentTypeTable {
    by_extension: HashMap<String, String>,
}

impl ContentTypeTable {
    /// Table with no mappings.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table covering common document, image, media, archive and text types.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_MAPPINGS
            .iter()
            .fold(Self::empty(), |table, (ext, ty)| table.with_mapping(ext, ty))
    }

    /// Adds or replaces the mapping for `extension` (leading dot optional).
    #[must_use]
    pub fn with_mapping(mut self, extension: &str, content_type: &str) -> Self {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        self.by_extension.insert(ext, content_type.to_string());
        self
    }

    /// Looks up the content type for the extension of `name`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let ext = extension_of(name)?;
        self.by_extension.get(&ext).map(String::as_str)
    }

    /// Looks up the content type for `name`, falling back to
    /// [`OCTET_STREAM`].
    pub fn lookup_or_default(&self, name: &str) -> &str {
        self.lookup(name).unwrap_or(OCTET_STREAM)
    }

    /// Number of mapped extensions.
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    /// Returns `true` if no extension is mapped.
    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

/// Content types admissible for packaging and mail attachments.
///
/// Membership ignores parameters and case.
#[derive(Debug, Clone, Default)]
pub struct AllowedTypeSet {
    types: HashSet<String>,
}

impl AllowedTypeSet {
    /// The standard allow-list: DOCX, XML, JPEG, PNG and PDF.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_types(STANDARD_ALLOWED.iter().copied())
    }

    /// The mail attachment allow-list: DOCX and PDF.
    #[must_use]
    pub fn attachments() -> Self {
        Self::from_types(ATTACHMENT_ALLOWED.iter().copied())
    }

    /// Builds a set from arbitrary content types.
    pub fn from_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            types: types.into_iter().map(|t| essence(t.as_ref())).collect(),
        }
    }

    /// Returns `true` if `content_type` is on the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcpack_core::AllowedTypeSet;
    ///
    /// let allowed = AllowedTypeSet::standard();
    /// assert!(allowed.contains("application/pdf"));
    /// assert!(allowed.contains("IMAGE/PNG"));
    /// assert!(!allowed.contains("text/plain; charset=utf-8"));
    /// ```
    pub fn contains(&self, content_type: &str) -> bool {
        self.types.contains(&essence(content_type))
    }

    /// Number of allowed types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if nothing is allowed.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("report.pdf"), Some("pdf".to_string()));
        assert_eq!(extension_of("dir.d/photo.JPG"), Some("jpg".to_string()));
        assert_eq!(extension_of("dir\\notes.txt"), Some("txt".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of("Makefile"), None);
        assert_eq!(extension_of(".bashrc"), None);
        assert_eq!(extension_of("trailing."), None);
        assert_eq!(extension_of("dir.d/noext"), None);
    }

    #[test]
    fn test_standard_lookup() {
        let table = ContentTypeTable::standard();
        assert_eq!(table.lookup("a.docx"), Some(DOCX_CONTENT_TYPE));
        assert_eq!(table.lookup("a.jpeg"), Some("image/jpeg"));
        assert_eq!(table.lookup("a.xml"), Some("application/xml"));
        assert_eq!(table.lookup("noext"), None);
        assert_eq!(table.lookup_or_default("blob.bin"), OCTET_STREAM);
    }

    #[test]
    fn test_with_mapping_overrides() {
        let table = ContentTypeTable::empty()
            .with_mapping(".dat", "application/x-dat")
            .with_mapping("DAT", "application/x-data");
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("file.dat"), Some("application/x-data"));
    }

    #[test]
    fn test_empty_table() {
        let table = ContentTypeTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("report.pdf"), None);
    }

    #[test]
    fn test_standard_allowed_set() {
        let allowed = AllowedTypeSet::standard();
        assert_eq!(allowed.len(), 5);
        assert!(allowed.contains(DOCX_CONTENT_TYPE));
        assert!(allowed.contains("application/xml"));
        assert!(allowed.contains("image/jpeg"));
        assert!(allowed.contains("image/png"));
        assert!(allowed.contains("application/pdf"));
        assert!(!allowed.contains(ZIP_CONTENT_TYPE));
        assert!(!allowed.contains(""));
    }

    #[test]
    fn test_attachment_set_is_narrower() {
        let attachments = AllowedTypeSet::attachments();
        assert_eq!(attachments.len(), 2);
        assert!(attachments.contains(DOCX_CONTENT_TYPE));
        assert!(attachments.contains("application/pdf"));
        assert!(!attachments.contains("image/png"));
        assert!(!attachments.contains("application/xml"));
    }

    #[test]
    fn test_essence() {
        assert_eq!(essence("Text/HTML; charset=utf-8"), "text/html");
        assert_eq!(essence(" image/png "), "image/png");
    }
}
