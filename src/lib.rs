//! Gala - An Event-Host Chat Assistant
//!
//! A CLI tool that wires small lookup tools into an OpenAI-compatible
//! tool-calling chat loop to help run a gala event.
//!
//! # Overview
//!
//! Gala ships two assistants behind one binary:
//! - The **host** assistant answers questions about invited guests (via a
//!   BM25-ranked guest index), the weather at the venue, and model download
//!   stats on the Hugging Face Hub, falling back to web search.
//! - The **planner** assistant helps organize the party itself: menus,
//!   catering, themes, and web research.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `guests` - Guest dataset loading and the FTS5-backed retrieval index
//! - `tools` - Lookup tool implementations (weather, hub stats, search, ...)
//! - `agent` - Tool-calling loop, tool dispatch and assistant profiles
//! - `openai` - Chat-completions client construction
//! - `cli` - Command-line interface and the HTTP chat surface
//!
//! # Example
//!
//! ```rust,no_run
//! use gala::config::Settings;
//! use gala::agent::{Agent, Profile, ToolContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let client = gala::openai::create_client(&settings.model)?;
//!     let tools = ToolContext::new(None, &settings);
//!     let agent = Agent::new(client, tools, Profile::Planner, &settings.model.model);
//!
//!     let response = agent.run("Suggest a menu for a formal reception.").await?;
//!     println!("{}", response.content);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod guests;
pub mod openai;
pub mod tools;

pub use error::{GalaError, Result};
