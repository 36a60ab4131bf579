//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use octodoc_core::pipeline::{
    GenerateConfig, GenerateResult, ProgressReporter, generate_docs,
};
use octodoc_shared::{AppConfig, init_config, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// octodoc — turn source doc-comments into Markdown documentation.
#[derive(Parser)]
#[command(
    name = "octodoc",
    version,
    about = "Convert leading doc-comments in source files into cross-linked Markdown pages.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Path to a config file (defaults to ~/.octodoc/octodoc.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Source directory to scan (overrides config).
    #[arg(long, global = true)]
    pub src: Option<PathBuf>,

    /// Output directory for generated pages (overrides config).
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands. Running with no subcommand generates docs.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate Markdown pages from source doc-comments (the default).
    Generate,

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
        0 => "octodoc=info",
        1 => "octodoc=debug",
        _ => "octodoc=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Command::Generate) => {
            cmd_generate(cli.config.as_deref(), cli.src, cli.out)
        }
        Some(Command::Config { action }) => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(cli.config.as_deref()),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(
    config_path: Option<&std::path::Path>,
    src: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = resolve_config(config_path)?;

    // CLI flags override config file values.
    let source_dir = src.unwrap_or_else(|| PathBuf::from(&config.paths.source_dir));
    let output_dir = out.unwrap_or_else(|| PathBuf::from(&config.paths.output_dir));

    let generate_config = GenerateConfig {
        source_dir,
        output_dir,
        language: config.language.clone(),
    };

    info!(
        source = %generate_config.source_dir.display(),
        output = %generate_config.output_dir.display(),
        "generating documentation"
    );

    let reporter = CliProgress::new();
    let result = generate_docs(&generate_config, &reporter)?;

    // Print summary
    println!();
    println!("  Documentation generated!");
    println!("  Pages:  {}", result.page_count);
    println!("  Output: {}", result.output_dir.display());
    println!("  Time:   {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = resolve_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

/// Load config from the explicit path if given, else the default location.
fn resolve_config(config_path: Option<&std::path::Path>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
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

    fn file_converted(&self, name: &str, current: usize, total: usize) {
        self.spinner.set_message(format!(
            "Converting [{current}/{total}] {name}"
        ));
    }

    fn done(&self, _result: &GenerateResult) {
        self.spinner.finish_and_clear();
    }
}
