//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use docbase_core::pipeline::{self, ExtractResult, ProgressReporter};
use docbase_shared::{AppConfig, ExtractConfig, init_config, load_config};
use docbase_storage::KnowledgeBase;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docbase — turn Markdown documentation trees into searchable knowledge bases.
#[derive(Parser)]
#[command(
    name = "docbase",
    version,
    about = "Turn Markdown documentation trees into flat, searchable JSON knowledge bases.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Extract a documentation tree into the knowledge base.
    Extract {
        /// Root directory of the Markdown documentation tree.
        root: PathBuf,

        /// Knowledge-base JSON file (defaults to config value).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Truncate the store before extracting.
        #[arg(long)]
        reset: bool,

        /// Path/name keyword routing files to the reference parser.
        #[arg(long)]
        keyword: Option<String>,

        /// Leading lines discarded from every section-style document.
        #[arg(long)]
        preamble_lines: Option<usize>,
    },

    /// Build a JSON catalog from a tree of sample projects.
    Samples {
        /// Root directory holding one sample project per subdirectory.
        root: PathBuf,

        /// Catalog JSON file (defaults to config value).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show record count and id range of a knowledge base.
    Stats {
        /// Knowledge-base JSON file (defaults to config value).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract {
            root,
            output,
            reset,
            keyword,
            preamble_lines,
        } => cmd_extract(root, output, reset, keyword, preamble_lines),
        Command::Samples { root, output } => cmd_samples(root, output),
        Command::Stats { output } => cmd_stats(output),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_extract(
    root: PathBuf,
    output: Option<PathBuf>,
    reset: bool,
    keyword: Option<String>,
    preamble_lines: Option<usize>,
) -> Result<()> {
    let config = load_config()?;

    let extract_config = ExtractConfig {
        root,
        output: output.unwrap_or_else(|| PathBuf::from(&config.extract.output)),
        preamble_lines: preamble_lines.unwrap_or(config.extract.preamble_lines),
        reference_keyword: keyword.unwrap_or_else(|| config.extract.reference_keyword.clone()),
        reset,
    };

    info!(
        root = %extract_config.root.display(),
        output = %extract_config.output.display(),
        reset,
        "extracting knowledge base"
    );

    let reporter = CliProgress::new();
    let result = pipeline::extract(&extract_config, &reporter)?;

    println!();
    println!("  Knowledge base updated!");
    println!("  Emitted:   {}", result.records_emitted);
    println!("  Processed: {}", result.files_processed);
    println!("  Skipped:   {}", result.files_skipped);
    println!("  Total:     {}", result.store_len);
    println!("  Path:      {}", result.store_path.display());
    println!("  Time:      {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_samples(root: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let output = output.unwrap_or_else(|| PathBuf::from(&config.samples.output));

    info!(root = %root.display(), output = %output.display(), "building samples catalog");

    let entries = docbase_samples::scan_samples(&root)?;
    docbase_samples::write_catalog(&output, &entries)?;

    println!();
    println!("  Samples catalog written!");
    println!("  Projects: {}", entries.len());
    println!("  Path:     {}", output.display());
    println!();

    Ok(())
}

fn cmd_stats(output: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let path = output.unwrap_or_else(|| PathBuf::from(&config.extract.output));

    if !path.exists() {
        return Err(eyre!("no knowledge base found at '{}'", path.display()));
    }

    let kb = KnowledgeBase::load(&path);
    println!("  Path:    {}", kb.path().display());
    println!("  Records: {}", kb.len());
    if let (Some(first), Some(last)) = (kb.records().first(), kb.records().last()) {
        println!("  Ids:     {}..{}", first.id, last.id);
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn file_started(&self, path: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Extracting [{current}/{total}] {path}"));
    }

    fn done(&self, _result: &ExtractResult) {
        self.spinner.finish_and_clear();
    }
}
