//! JSON output formatter for machine-readable results.

use super::formatter::CreationSummary;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use arcpack_core::ArchiveInventory;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_inventory_short(&self, inventory: &ArchiveInventory) -> Result<()> {
        Self::output(&JsonOutput::success("inspect", inventory))
    }

    fn format_inventory_long(
        &self,
        inventory: &ArchiveInventory,
        _human_readable: bool,
    ) -> Result<()> {
        Self::output(&JsonOutput::success("inspect", inventory))
    }

    fn format_creation_result(&self, output_path: &Path, summary: &CreationSummary) -> Result<()> {
        #[derive(Serialize)]
        struct CreationOutput<'a> {
            output_path: String,
            #[serde(flatten)]
            summary: &'a CreationSummary,
        }

        let data = CreationOutput {
            output_path: output_path.display().to_string(),
            summary,
        };

        Self::output(&JsonOutput::success("create", data))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        // Warnings go to stderr so stdout holds a single document.
        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        if let Ok(json) = serde_json::to_string(&output) {
            let _ = writeln!(io::stderr(), "{json}");
        }
    }
}
