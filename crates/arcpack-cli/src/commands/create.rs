//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::add_archive_context;
use crate::output::CreationSummary;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use arcpack_core::CodecConfig;
use arcpack_core::FileRecord;
use arcpack_core::build_named;
use std::fs;
use std::path::Path;

pub fn execute(
    args: &CreateArgs,
    config: &CodecConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "Output file '{}' already exists\n\
             HINT: Use --force to overwrite.",
            args.output.display()
        );
    }

    let mut sources = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Cannot access input '{}'", path.display()))?;
        if !metadata.is_file() {
            bail!("Input '{}' is not a regular file", path.display());
        }
        sources.push((entry_name(path, args.name_as_given), metadata.len()));
    }

    // Limits are checked before any content is read.
    let bytes_read = add_archive_context(
        config
            .limits
            .check_batch(sources.iter().map(|(name, size)| (name.as_str(), *size))),
        &args.output,
    )?;

    let mut records = Vec::with_capacity(sources.len());
    for (path, (name, _)) in args.files.iter().zip(sources) {
        let content =
            fs::read(path).with_context(|| format!("Failed to read input '{}'", path.display()))?;
        records.push(FileRecord::new(name, content));
    }

    if args.allow_any_type {
        formatter.format_warning("Content-type allow-list disabled");
    } else {
        add_archive_context(config.validator().admit(&mut records), &args.output)?;
    }

    let archive_name = args
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let archive = add_archive_context(
        build_named(&mut records, &archive_name, config),
        &args.output,
    )?;

    fs::write(&args.output, &archive.bytes)
        .with_context(|| format!("Failed to write archive '{}'", args.output.display()))?;

    let summary = CreationSummary {
        files_added: records.len(),
        bytes_read,
        archive_size: archive.size(),
        content_disposition: archive.content_disposition(),
        archive_name: archive.name,
    };

    formatter.format_creation_result(&args.output, &summary)
}

/// Name under which an input file is stored in the archive.
fn entry_name(path: &Path, name_as_given: bool) -> String {
    if name_as_given {
        return path.to_string_lossy().into_owned();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
