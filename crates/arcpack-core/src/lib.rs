//! In-memory ZIP inspection and packaging with upload validation.
//!
//! `arcpack-core` turns uploaded bytes into a typed inventory of the files a
//! ZIP container holds, and turns a set of uploaded files into a new ZIP
//! container. Neither direction touches the filesystem. The same validation
//! rules decide whether a file may go out as a mail attachment.
//!
//! # Examples
//!
//! ```
//! use arcpack_core::CodecConfig;
//! use arcpack_core::FileRecord;
//! use arcpack_core::build_archive;
//! use arcpack_core::inspect_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CodecConfig::default();
//!
//! let mut records = vec![FileRecord::new("docs/report.pdf", b"%PDF-1.7".to_vec())];
//! let bytes = build_archive(&mut records, &config)?;
//!
//! let inventory = inspect_archive(&bytes, "reports.zip", &config)?;
//! println!(
//!     "{} holds {} files, {} bytes",
//!     inventory.filename(),
//!     inventory.total_files(),
//!     inventory.total_size()
//! );
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod build;
pub mod config;
pub mod content_type;
pub mod error;
pub mod inspect;
pub mod limits;
pub mod model;
pub mod path;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod validation;

// Re-export main API types
pub use build::BuiltArchive;
pub use build::build_archive;
pub use build::build_named;
pub use config::CodecConfig;
pub use content_type::AllowedTypeSet;
pub use content_type::ContentTypeTable;
pub use error::ArchiveError;
pub use error::BuildStage;
pub use error::ErrorClass;
pub use error::Result;
pub use error::ValidationError;
pub use inspect::inspect_archive;
pub use limits::UploadLimits;
pub use model::ArchiveInventory;
pub use model::EntryDescriptor;
pub use model::FileRecord;
pub use model::MailMessage;
pub use path::normalize_entry_path;
pub use validation::Validator;
