//! CLI argument parsing using clap.

use arcpack_core::CodecConfig;
use arcpack_core::UploadLimits;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Maximum size of a single input file (default 10M)
    #[arg(long, global = true, value_parser = parse_byte_size)]
    pub max_file_size: Option<u64>,

    /// Maximum combined size of all input files (default 50M)
    #[arg(long, global = true, value_parser = parse_byte_size)]
    pub max_total_size: Option<u64>,
}

impl Cli {
    /// Builds the codec configuration from global flags.
    pub fn codec_config(&self) -> CodecConfig {
        let defaults = UploadLimits::default();
        CodecConfig::default().with_limits(UploadLimits {
            max_file_size: self.max_file_size.unwrap_or(defaults.max_file_size),
            max_total_size: self.max_total_size.unwrap_or(defaults.max_total_size),
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the files inside a ZIP archive without extracting
    Inspect(InspectArgs),
    /// Package files into a new ZIP archive
    Create(CreateArgs),
}

#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Show size and content type of each file
    #[arg(short, long)]
    pub long: bool,

    /// Show sizes in human-readable format
    #[arg(short = 'H', long)]
    pub human_readable: bool,
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Output archive file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Files to package
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Store each file under the path as given instead of its base name
    #[arg(long)]
    pub name_as_given: bool,

    /// Accept content types outside the allow-list
    #[arg(long)]
    pub allow_any_type: bool,

    /// Overwrite output file if exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}
