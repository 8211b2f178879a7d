//! Uaspace CLI - Command line interface for the standard address space

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{browse, completions, dump, read, write};
use config::{config_file_path, Config};
use output::OutputFormat;
use uaspace_core::{AddressSpace, NamespaceBuilder};

#[derive(Parser)]
#[command(name = "uaspace")]
#[command(author, version, about = "Browse and read an in-memory OPC UA address space")]
pub struct Cli {
    /// Output format: table, json (defaults to the config value)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Config file path
    #[arg(long, global = true, env = "UASPACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Build the namespace without root folder attributes
    #[arg(long, global = true)]
    pub no_root_attributes: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the references of a node
    Browse(browse::BrowseArgs),
    /// Read attributes of a node
    Read(read::ReadArgs),
    /// Write an attribute of a node
    Write(write::WriteArgs),
    /// Print the namespace snapshot as JSON
    Dump,
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the built address space
pub struct AppContext {
    pub space: AddressSpace,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let root_attributes = config.root_attributes && !cli.no_root_attributes;
        let format = cli.format.as_deref().unwrap_or(&config.format);

        Self {
            space: NamespaceBuilder::new()
                .with_root_attributes(root_attributes)
                .build(),
            format: OutputFormat::from(format),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting uaspace CLI");

    let config_path = cli.config_path();

    match &cli.command {
        Commands::Config(args) => return commands::config::run(args, &config_path),
        Commands::Completions(args) => return completions::run(args),
        _ => {}
    }

    let config = Config::load_from(&config_path)?;
    let ctx = AppContext::new(&cli, &config);

    match &cli.command {
        Commands::Browse(args) => browse::run(args, &ctx)?,
        Commands::Read(args) => read::run(args, &ctx)?,
        Commands::Write(args) => write::run(args, &ctx)?,
        Commands::Dump => dump::run(&ctx)?,
        Commands::Config(_) | Commands::Completions(_) => {}
    }

    Ok(())
}
