mod cli;
mod config;
mod display;
mod error;
mod inspect;
mod models;
mod renderer;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::display::ColorMode;

#[derive(Parser)]
#[command(name = "sigcard")]
#[command(about = "Render callable signatures as Markdown cards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Render a signature card and display it
    Show {
        /// Textual signature declaration, e.g. "f(a, b: int = 5, *, c)"
        decl: Option<String>,

        /// Read a JSON signature descriptor instead of parsing a declaration
        #[arg(long, conflicts_with = "decl")]
        json: Option<PathBuf>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// When to use rich terminal rendering
        #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
        color: ColorMode,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize sigcard.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Show {
            decl,
            json,
            config,
            color,
        } => cli::show::run(decl, json, config, color),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
