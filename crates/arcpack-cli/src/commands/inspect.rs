//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use arcpack_core::CodecConfig;
use arcpack_core::inspect_archive;
use std::fs;

pub fn execute(
    args: &InspectArgs,
    config: &CodecConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let filename = args
        .archive
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let metadata = fs::metadata(&args.archive)
        .with_context(|| format!("Cannot access archive '{}'", args.archive.display()))?;
    add_archive_context(
        config.limits.check_file(&filename, metadata.len()),
        &args.archive,
    )?;

    let data = fs::read(&args.archive)
        .with_context(|| format!("Failed to read archive '{}'", args.archive.display()))?;

    let inventory = add_archive_context(inspect_archive(&data, &filename, config), &args.archive)?;

    if args.long {
        formatter.format_inventory_long(&inventory, args.human_readable)
    } else {
        formatter.format_inventory_short(&inventory)
    }
}
