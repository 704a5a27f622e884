//! Keyplate CLI binary
//!
//! Command-line front end for managing the Keyplate.toml device-secrets
//! configuration: creating the template, checking it, and generating the
//! header firmware builds include.
//!
//! # Usage
//!
//! ```bash
//! # Create a placeholder Keyplate.toml in the current directory
//! kp init
//!
//! # Validate the config (environment overrides included)
//! kp check --strict
//!
//! # Generate the C header the firmware includes
//! kp generate --format c --output include/secrets.h
//!
//! # Inspect the resolved config with secrets masked
//! kp show --json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;

use kp_cli::commands;
use kp_cli::logging::{setup_logs, LogLevel};
use kp_core::HeaderFormat;

#[derive(Parser)]
#[command(
    name = "kp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keyplate: typed secrets templates for embedded firmware"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a placeholder Keyplate.toml template
    Init {
        /// Directory (or .toml path) to create the template in
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate the configuration and report findings
    Check {
        /// Path to Keyplate.toml (default: nearest one upward from here)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Generate the secrets header firmware builds include
    Generate {
        /// Path to Keyplate.toml (default: nearest one upward from here)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output language
        #[arg(long, value_enum)]
        format: Format,
        /// Where to write the header (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the resolved configuration with secrets masked
    Show {
        /// Path to Keyplate.toml (default: nearest one upward from here)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    C,
    Rust,
}

impl From<Format> for HeaderFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::C => HeaderFormat::C,
            Format::Rust => HeaderFormat::Rust,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        LogLevel::Error
    } else {
        match cli.verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    };
    setup_logs(log_level)?;

    match cli.command {
        Commands::Init { path, force } => commands::init(&path, force),
        Commands::Check { config, strict } => {
            let passed = commands::check(config.as_deref(), strict)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Generate {
            config,
            format,
            output,
        } => commands::generate(config.as_deref(), format.into(), output.as_deref()),
        Commands::Show { config, json } => commands::show(config.as_deref(), json),
    }
}
