//! Data model shared by the inspector and the builder.
//!
//! - [`FileRecord`]: an in-memory file handed to the builder
//! - [`EntryDescriptor`]: metadata of one file entry found by the inspector
//! - [`ArchiveInventory`]: the inspector's aggregate result
//! - [`MailMessage`]: a file addressed to recipients

pub mod entry;
pub mod inventory;
pub mod mail;
pub mod record;

pub use entry::EntryDescriptor;
pub use inventory::ArchiveInventory;
pub use mail::MailMessage;
pub use record::FileRecord;
