//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `drycontact show` - Build a card, apply operations and print it
//! - `drycontact profiles list|show|create|delete` - Manage card profiles

mod profiles;
mod show;

pub use profiles::{ProfilesAction, ProfilesCommand};
pub use show::ShowCommand;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// drycontact - inspect a dry-contact sensor I/O card model.
///
/// Builds an in-memory card, applies pin and port operations to it and
/// prints the resulting pin table.
#[derive(Parser, Debug)]
#[command(name = "drycontact")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dry-contact I/O card model and pin table viewer", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a card, apply operations and print its pin table
    #[command(alias = "s")]
    Show(ShowCommand),

    /// Manage card profiles
    #[command(alias = "p")]
    Profiles(ProfilesCommand),
}

/// Output format for a card.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pin table with a summary
    #[default]
    Plain,
    /// JSON snapshot
    Json,
    /// One CSV row per pin
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
