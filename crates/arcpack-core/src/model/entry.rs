//! Archive entry metadata.

use serde::Serialize;

/// Metadata of a single file entry inside a container.
///
/// Directory entries never become descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDescriptor {
    /// Normalized path relative to the archive root.
    #[serde(rename = "file_path")]
    pub path: String,

    /// Uncompressed size in bytes.
    pub size: u64,

    /// Content type derived from the path's extension.
    #[serde(rename = "mimetype")]
    pub content_type: String,
}

impl EntryDescriptor {
    /// Creates a descriptor from already-normalized parts.
    pub fn new(path: impl Into<String>, size: u64, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size,
            content_type: content_type.into(),
        }
    }
}
