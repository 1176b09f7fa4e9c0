//! solt - tokenize, highlight and detect Solidity sources.
//!
//! This is the main entry point for the solt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;
mod theme;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_detect, run_highlight, run_init, run_tokens, DetectArgs, HighlightArgs, InitArgs,
    TokensArgs,
};
use config::Config;
use error::{Result, SoltError};
use theme::Theme;

/// solt - Solidity syntax highlighting from the command line
///
/// solt lexes Solidity sources into highlighting tokens, prints them as a
/// listing or as ANSI-colored text, and recognizes Solidity files.
#[derive(Parser, Debug)]
#[command(name = "solt")]
#[command(author = "solhl Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and highlight Solidity sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SOLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SOLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SOLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the solt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    ///
    /// One line per token: `line:column`, the kind, and the quoted lexeme.
    Tokens(TokensCommand),

    /// Print a file with ANSI colors
    Highlight(HighlightCommand),

    /// Report whether files are Solidity
    ///
    /// Matches file names first, then sniffs the content. Exits with an
    /// error if any file is not recognized.
    Detect(DetectCommand),

    /// Write a default configuration file
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Keep adjacent tokens of the same kind apart
    #[arg(long)]
    raw: bool,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// File to highlight
    file: PathBuf,
}

/// Arguments for the detect subcommand.
#[derive(Parser, Debug)]
struct DetectCommand {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write `solt.toml` into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the solt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token listings or highlighted
/// output on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SoltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Highlight(args) => execute_highlight(args, no_color, config),
        Commands::Detect(args) => execute_detect(args, config),
        Commands::Init(args) => run_init(InitArgs {
            path: args.path,
            force: args.force,
        }),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    run_tokens(TokensArgs {
        files: args.files,
        coalesce: config.output.coalesce && !args.raw,
        jobs: args.jobs.unwrap_or(config.parallel.jobs),
    })
}

/// Execute the highlight command.
fn execute_highlight(args: HighlightCommand, no_color: bool, config: Config) -> Result<()> {
    run_highlight(HighlightArgs {
        file: args.file,
        color: config.output.color && !no_color,
        theme: Theme::from_entries(&config.theme)?,
    })
}

/// Execute the detect command.
fn execute_detect(args: DetectCommand, config: Config) -> Result<()> {
    run_detect(DetectArgs {
        files: args.files,
        jobs: args.jobs.unwrap_or(config.parallel.jobs),
    })
}
