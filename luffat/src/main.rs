//! Luffat CLI - dump tokens and collect names with the luffa scanner.
//!
//! This is the main entry point for the luffat CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use luffa_lex::CommentStyle;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_names, run_tokens, NamesArgs, OutputFormat, TokensArgs};
use config::Config;
use error::{LuffatError, Result};

/// Luffat - token dumper and name collector
///
/// Scans source files with a configurable comment syntax and punctuation
/// set, printing the tokens found or the unique names they contain.
#[derive(Parser, Debug)]
#[command(name = "luffat")]
#[command(author = "Luffa Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token dumper and name collector for the luffa scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LUFFAT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LUFFAT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LUFFAT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the luffat CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of the given files
    ///
    /// Each file stops at its first lexical error. The command fails if
    /// any file had one.
    Tokens(TokensCommand),

    /// List the unique names used in a directory
    ///
    /// Files with the chosen extension are tokenized in parallel and the
    /// first occurrence of each name is printed.
    Names(NamesCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Comment syntax (c, lua, none); overrides the configuration
    #[arg(long)]
    comments: Option<CommentStyle>,
}

/// Arguments for the names subcommand.
#[derive(Parser, Debug)]
struct NamesCommand {
    /// Directory to search
    dir: PathBuf,

    /// File extension to collect (default: from config)
    #[arg(short, long)]
    ext: Option<String>,

    /// Ignore names shorter than this
    #[arg(short, long)]
    min_length: Option<usize>,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,

    /// Comment syntax (c, lua, none); overrides the configuration
    #[arg(long)]
    comments: Option<CommentStyle>,
}

/// Main entry point for the luffat CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so command output can be piped.
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
        .map_err(|e| LuffatError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, &config),
        Commands::Names(args) => execute_names(args, verbose, &config),
    }
}

fn execute_tokens(args: TokensCommand, verbose: bool, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        files: args.files,
        format: args.format,
        comments: args.comments,
        verbose,
    };
    run_tokens(tokens_args, config)
}

fn execute_names(args: NamesCommand, verbose: bool, config: &Config) -> Result<()> {
    let names_args = NamesArgs {
        dir: args.dir,
        ext: args.ext,
        min_length: args.min_length,
        jobs: args.jobs,
        comments: args.comments,
        verbose,
    };
    run_names(names_args, config)
}
