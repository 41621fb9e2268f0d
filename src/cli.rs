//! Command-line interface definition for turfrank

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use turfrank_core::error::TurfRankError;

/// Output format for turfrank commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = TurfRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(TurfRankError::UnknownFormat(other.to_string())),
        }
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}

/// Turf ranking and similarity over fitted recommendation artifacts
#[derive(Parser, Debug)]
#[command(name = "turfrank", version, about)]
pub struct Cli {
    /// Path to the JSON store document (turves, reviews, bookings)
    #[arg(long, global = true, env = "TURFRANK_DATA")]
    pub data: Option<PathBuf>,

    /// Directory holding the fitted artifacts
    #[arg(long, global = true, env = "TURFRANK_ARTIFACTS")]
    pub artifacts: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank all turfs by predicted score and return the top K
    TopRanked {
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Find turfs most similar to a reference turf
    Similar {
        /// Identifier of the reference turf
        turf_id: String,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the loaded artifact dimensions
    Artifacts,
}
