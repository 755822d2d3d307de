//! Output formatter trait for CLI results.

use anyhow::Result;
use arcpack_core::ArchiveInventory;
use serde::Serialize;
use std::path::Path;

/// Outcome of a `create` run, independent of presentation.
#[derive(Debug, Clone, Serialize)]
pub struct CreationSummary {
    pub archive_name: String,
    pub files_added: usize,
    pub bytes_read: u64,
    pub archive_size: u64,
    pub content_disposition: String,
}

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the file listing of an inspected archive
    fn format_inventory_short(&self, inventory: &ArchiveInventory) -> Result<()>;

    /// Format the detailed listing with sizes and content types
    fn format_inventory_long(&self, inventory: &ArchiveInventory, human_readable: bool)
    -> Result<()>;

    /// Format creation result
    fn format_creation_result(&self, output_path: &Path, summary: &CreationSummary)
    -> Result<()>;

    /// Format error message for the failed operation
    fn format_error(&self, operation: &str, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
