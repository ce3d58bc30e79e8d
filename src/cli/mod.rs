//! CLI module for Gala.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Gala - An Event-Host Chat Assistant
///
/// A CLI tool that answers questions about gala guests, weather, and
/// Hugging Face Hub stats, and helps plan the party itself.
#[derive(Parser, Debug)]
#[command(name = "gala")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Gala and verify configuration
    Init,

    /// Check configuration and connectivity requirements
    Doctor,

    /// Start an interactive chat session
    Chat {
        /// Assistant profile: host (guest info, weather, hub stats) or
        /// planner (menus, catering, themes)
        #[arg(short, long, default_value = "host")]
        assistant: String,

        /// Chat model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        question: String,

        /// Assistant profile: host or planner
        #[arg(short, long, default_value = "host")]
        assistant: String,

        /// Chat model to use
        #[arg(short, long)]
        model: Option<String>,

        /// Show the tool calls the agent made
        #[arg(short, long)]
        trace: bool,
    },

    /// Inspect the loaded guest list without the model
    Guests {
        #[command(subcommand)]
        action: GuestsAction,
    },

    /// Start the browser chat UI and JSON API
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "7860")]
        port: u16,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum GuestsAction {
    /// List all loaded guests
    List,

    /// Rank guests against a query
    Search {
        /// Search query (name, relation, keywords)
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "3")]
        limit: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
