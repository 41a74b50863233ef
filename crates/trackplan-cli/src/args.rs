//! Command-line argument definitions for the Trackplan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each subcommand works on a state file: a TOML document
//! holding the editable fields of one diagram.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for the Trackplan diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract title, work items and markers from a document's text layer
    Import {
        /// Fragment dump of the document (JSON)
        input: PathBuf,

        /// State file to update, created if missing
        #[arg(short, long, default_value = "trackplan.toml")]
        state: PathBuf,

        /// Print the reconstructed text of one page (starting at 1)
        #[arg(long, value_name = "PAGE")]
        dump_page: Option<usize>,
    },

    /// Lay out a diagram and write it to a file
    Render {
        /// State file to render
        state: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "out.svg")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,

        /// Sentence naming the route, e.g. "works between WAN:P11A and WAS:P11B"
        #[arg(long)]
        route: Option<String>,
    },

    /// Write the structured data payload of a diagram as JSON
    Export {
        /// State file to export
        state: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "track-data.json")]
        output: PathBuf,
    },

    /// Write a filled-in sample state file
    Example {
        /// Output file
        #[arg(short, long, default_value = "trackplan.toml")]
        output: PathBuf,
    },
}

/// Rendered output formats
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone SVG document
    Svg,
    /// Scene description as JSON
    Json,
}
