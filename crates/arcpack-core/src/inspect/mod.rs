//! Archive inspection without extraction.
//!
//! Reads a container's central directory from memory into an
//! [`ArchiveInventory`](crate::ArchiveInventory). Entry contents are never
//! decompressed and nothing is written to disk.
//!
//! # Examples
//!
//! ```
//! use arcpack_core::CodecConfig;
//! use arcpack_core::inspect_archive;
//! use arcpack_core::test_utils::create_test_zip;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = create_test_zip(&[("report.pdf", b"%PDF-1.7")]);
//! let inventory = inspect_archive(&bytes, "upload.zip", &CodecConfig::default())?;
//!
//! assert_eq!(inventory.total_files(), 1);
//! assert_eq!(inventory.entries()[0].content_type, "application/pdf");
//! # Ok(())
//! # }
//! ```

pub mod reader;

pub use reader::inspect_archive;
