use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli_style;
use cli_style::get_styles;

use voice_insights::config::{AppConfig, CliConfig, FileConfig, OutputFormat, DEFAULT_TOP_TAGS};
use voice_insights::output::write_report;
use voice_insights::{aggregate, load_entries, load_entries_from_reader, VoiceEntry};

const VERSION: &str = concat!(env!("APP_VERSION"), "-", env!("GIT_HASH"));

const STDIN_PATH: &str = "-";

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if s == STDIN_PATH || original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

/// Summarize an export of voice journal entries.
#[derive(Parser, Debug)]
#[command(styles = get_styles(), version = VERSION)]
struct CliArgs {
    /// Path to a JSON array of entries, or "-" to read from stdin.
    #[clap(value_parser = parse_path, default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Path to a TOML config file. Its values override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Output format of the report.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[clap(long)]
    pub pretty: bool,

    /// Number of most frequent tags listed under the summary in text output.
    #[clap(long, default_value_t = DEFAULT_TOP_TAGS)]
    pub top_tags: usize,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            output_format: self.format,
            pretty: self.pretty,
            top_tags: self.top_tags,
        }
    }
}

fn read_entries(input: &Path) -> Result<Option<Vec<VoiceEntry>>> {
    if input == Path::new(STDIN_PATH) {
        info!("Reading entries from stdin...");
        return load_entries_from_reader(io::stdin().lock())
            .context("Failed to load entries from stdin");
    }
    info!("Reading entries from {:?}...", input);
    load_entries(input).with_context(|| format!("Failed to load entries from {:?}", input))
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let entries = read_entries(&cli_args.input)?;
    let report = aggregate(entries.as_deref());
    info!(
        "Report ready: {} distinct tags",
        report.tag_frequencies.len()
    );

    write_report(io::stdout().lock(), &report, &config)
}
