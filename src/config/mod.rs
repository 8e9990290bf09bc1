mod file_config;

pub use file_config::FileConfig;

use anyhow::{anyhow, Result};
use clap::ValueEnum;

pub const DEFAULT_TOP_TAGS: usize = 5;

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Summary line followed by the most frequent tags
    #[default]
    Text,
    /// The report serialized as JSON
    Json,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub output_format: OutputFormat,
    pub pretty: bool,
    pub top_tags: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            pretty: false,
            top_tags: DEFAULT_TOP_TAGS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub output_format: OutputFormat,
    pub pretty: bool,
    /// Number of tags listed under the summary in text output
    pub top_tags: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let output_format = match file.output_format {
            Some(s) => parse_output_format(&s)
                .ok_or_else(|| anyhow!("Invalid output_format in config file: {:?}", s))?,
            None => cli.output_format,
        };
        let pretty = file.pretty.unwrap_or(cli.pretty);
        let top_tags = file.top_tags.unwrap_or(cli.top_tags);

        Ok(Self {
            output_format,
            pretty,
            top_tags,
        })
    }
}

/// Uses clap's ValueEnum trait for parsing.
fn parse_output_format(s: &str) -> Option<OutputFormat> {
    OutputFormat::from_str(s, true).ok()
}
