//! CLI commands and interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fracture-split")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display information about a mesh file
    Info {
        /// Path to the JSON mesh file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Split a mesh along a fracture defined by a per-cell attribute field
    Split {
        /// Path to the JSON mesh file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Name of the per-cell integer attribute driving detection
        #[arg(long)]
        field: String,

        /// Comma-separated admitted field values, e.g. "1,2"
        #[arg(long)]
        values: String,

        /// Output directory for the split meshes and report
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Show a progress bar while splitting
        #[arg(long)]
        progress: bool,

        /// Configuration file (JSON); overrides --field/--values if given
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a split configuration file without running the split
    CheckConfig {
        /// Path to the configuration JSON file
        #[arg(value_name = "FILE")]
        config: PathBuf,
    },
}
