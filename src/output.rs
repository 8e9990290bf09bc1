//! Report rendering for the command line.

use std::io::Write;

use anyhow::Result;

use crate::config::{AppConfig, OutputFormat};
use crate::insights::Report;

/// Writes `report` to `out` in the configured format.
pub fn write_report<W: Write>(mut out: W, report: &Report, config: &AppConfig) -> Result<()> {
    match config.output_format {
        OutputFormat::Json => {
            if config.pretty {
                serde_json::to_writer_pretty(&mut out, report)?;
            } else {
                serde_json::to_writer(&mut out, report)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", report.summary)?;
            let top_tags = report.top_tags(config.top_tags);
            if !top_tags.is_empty() {
                writeln!(out, "Top tags:")?;
                for (tag, count) in top_tags {
                    writeln!(out, "  {}: {}", tag, count)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
