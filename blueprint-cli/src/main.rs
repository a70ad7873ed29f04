//! blueprint CLI tool

#![forbid(unsafe_code)]

use anyhow::Result;
use blueprint::registry::TemplateRegistry;
use blueprint_cli_lib::commands::{CreateArgs, CreateCommand, ListCommand};
use blueprint_cli_lib::observability;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(version)]
#[command(about = "Scaffold Go web projects", long_about = None)]
struct Cli {
    /// Log collaborator commands and written files
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Go project
    Create(CreateArgs),
    /// List frameworks, drivers, features, frontends and build tools
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    match cli.command {
        Commands::Create(args) => {
            let config = args.load_config()?;
            let interactive = std::io::stdin().is_terminal();
            CreateCommand::new(&args, &config, interactive)?.execute()?;
        }
        Commands::List => {
            ListCommand::new(TemplateRegistry::global()).execute()?;
        }
    }

    Ok(())
}
