//! Human-readable output formatter with colors and styling.

use super::formatter::CreationSummary;
use super::formatter::OutputFormatter;
use anyhow::Result;
use arcpack_core::ArchiveInventory;
use console::Term;
use console::style;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn write_totals(&self, inventory: &ArchiveInventory) {
        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} files, {} ({} archive)",
            Self::format_number(inventory.total_files()),
            Self::format_size(inventory.total_size()),
            Self::format_size(inventory.archive_size())
        ));
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_inventory_short(&self, inventory: &ArchiveInventory) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in inventory.entries() {
            let _ = self.term.write_line(&entry.path);
        }

        if self.verbose {
            self.write_totals(inventory);
        }

        Ok(())
    }

    fn format_inventory_long(
        &self,
        inventory: &ArchiveInventory,
        human_readable: bool,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "Archive: {}",
                style(inventory.filename()).bold()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Archive: {}", inventory.filename()));
        }
        let _ = self.term.write_line("");

        for entry in inventory.entries() {
            let size_str = if human_readable {
                Self::format_size(entry.size)
            } else {
                entry.size.to_string()
            };

            let _ = self.term.write_line(&format!(
                "{:>10}  {:<24}  {}",
                size_str, entry.content_type, entry.path
            ));
        }

        self.write_totals(inventory);

        Ok(())
    }

    fn format_creation_result(&self, output_path: &Path, summary: &CreationSummary) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Archive created: {}",
                style("✓").green().bold(),
                output_path.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Archive created: {}", output_path.display()));
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "  Files added:      {}",
            Self::format_number(summary.files_added)
        ));
        let _ = self.term.write_line(&format!(
            "  Total size:       {}",
            Self::format_size(summary.bytes_read)
        ));
        let _ = self.term.write_line(&format!(
            "  Archive size:     {}",
            Self::format_size(summary.archive_size)
        ));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Disposition:      {}",
                summary.content_disposition
            ));
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(512), "512 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(HumanFormatter::format_size(1024), "1.0 KB");
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(HumanFormatter::format_size(10 * 1024 * 1024), "10.0 MB");
        assert_eq!(HumanFormatter::format_size(50 * 1024 * 1024), "50.0 MB");
    }

    #[test]
    fn test_format_size_gigabytes() {
        assert_eq!(HumanFormatter::format_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(HumanFormatter::format_number(0), "0");
        assert_eq!(HumanFormatter::format_number(999), "999");
        assert_eq!(HumanFormatter::format_number(1000), "1,000");
        assert_eq!(HumanFormatter::format_number(1_234_567), "1,234,567");
    }
}
