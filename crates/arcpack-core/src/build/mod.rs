//! In-memory ZIP packaging.
//!
//! Every record is validated before anything is written, so a build either
//! yields a complete container or no bytes at all.
//!
//! # Examples
//!
//! ```
//! use arcpack_core::CodecConfig;
//! use arcpack_core::FileRecord;
//! use arcpack_core::build_named;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut records = vec![
//!     FileRecord::new("report.pdf", b"%PDF-1.7".to_vec()),
//!     FileRecord::new("scan.png", b"\x89PNG".to_vec()),
//! ];
//! let archive = build_named(&mut records, "", &CodecConfig::default())?;
//!
//! assert_eq!(archive.name, "archive.zip");
//! assert_eq!(archive.content_disposition(), "attachment; filename=\"archive.zip\"");
//! # Ok(())
//! # }
//! ```

pub mod output;
pub mod writer;

pub use output::BuiltArchive;
pub use writer::build_archive;
pub use writer::build_named;
