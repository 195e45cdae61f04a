use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod build;
mod commands;
mod config;
mod letters;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    /// The command to execute
    #[command(subcommand)]
    command: MdwrapCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,

    /// Overwrite an existing config file and layout
    #[arg(short, long, default_value = "false")]
    force: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The directory to scan for documents (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// The layout template, overriding the config file
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// The path to the configuration file (defaults to mdwrap.yaml if present)
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct CleanArgs {
    /// The directory to clean (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// The path to the configuration file (defaults to mdwrap.yaml if present)
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Print what would be deleted without deleting anything
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Parser)]
struct LettersArgs {
    /// The word list to read, one word per line
    #[arg(short, long, default_value = letters::DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// The CSV file to write
    #[arg(short, long, default_value = letters::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

#[derive(Subcommand)]
enum MdwrapCommand {
    /// Create a starter layout and config file
    Init(InitArgs),

    /// Render every document in a directory into a templated page
    Build(BuildArgs),

    /// Delete pages generated from documents in a directory
    Clean(CleanArgs),

    /// Write a CSV of distinct words and their first two letters
    Letters(LettersArgs),
}

fn init_tracing(verbose: bool) -> Result<(), anyhow::Error> {
    let default_directive = if verbose { "mdwrap=debug" } else { "mdwrap=info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    match args.command {
        MdwrapCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        MdwrapCommand::Build(args) => {
            commands::build::run(&args).await?;
        }
        MdwrapCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
        MdwrapCommand::Letters(args) => {
            commands::letters::run(&args).await?;
        }
    }

    Ok(())
}
