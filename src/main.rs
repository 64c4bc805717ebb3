//! Chisel - Module scaffolder for the bot workspace
//!
//! Carves a new module out of the fixed boilerplate and registers it in
//! the shared index file.
//!
//! # Usage
//! ```bash
//! chisel new Starboard
//! chisel list
//! chisel check
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

mod commands;
mod core;

#[derive(Parser)]
#[command(name = "chisel")]
#[command(about = "🗜️ Chisel - Module scaffolder for the bot workspace", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new module and register it in the index
    New {
        /// Module name, used verbatim as file stem and class name
        name: Option<String>,
    },

    /// List modules and their index status
    List,

    /// Verify that modules and index agree
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Banner
    if !cli.quiet {
        println!(
            "{}",
            "🗜️ Chisel - Module scaffolder".bright_cyan().bold()
        );
        println!("{}", "   Carving modules for the bot workspace".bright_black());
        println!();
    }

    match cli.command {
        Commands::New { name } => commands::new::run(name.as_deref(), cli.verbose)?,
        Commands::List => commands::list::run(cli.verbose)?,
        Commands::Check => commands::check::run(cli.verbose)?,
    }

    Ok(())
}
