//! In-memory ZIP fixtures for tests.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed
/// under exactly the given names.
///
/// # Examples
///
/// ```
/// use arcpack_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[("file.txt", b"hello"), ("dir/nested.txt", b"world!")]);
/// assert_eq!(&zip_data[0..4], b"PK\x03\x04");
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    entries
        .iter()
        .fold(ZipTestBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data)
        })
        .build()
}

/// Builder for ZIP test archives with directories and arbitrary raw names.
///
/// # Examples
///
/// ```
/// use arcpack_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_directory("dir/")
///     .add_file("dir/file.txt", b"content")
///     .add_file("../escape.txt", b"raw name kept")
///     .build();
/// ```
pub struct ZipTestBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl ZipTestBuilder {
    /// Creates a builder that stores entries uncompressed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Stored)
                .unix_permissions(0o644),
        }
    }

    /// Deflates entries added after this call.
    #[must_use]
    pub fn deflated(mut self) -> Self {
        self.options = self
            .options
            .compression_method(CompressionMethod::Deflated);
        self
    }

    /// Adds a file under `path`, written verbatim as the entry name.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        self.writer.start_file(path, self.options).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry. A trailing `/` is appended if missing.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        self.writer.add_directory(path, self.options).unwrap();
        self
    }

    /// Finishes the archive and returns its bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
