//! Agent system: assistant profiles, tool dispatch, and the tool-calling loop.
//!
//! The model plans; this module only declares the tools, executes the calls
//! the model makes, and bounds the loop.

mod profile;
mod runner;
mod tools;

pub use profile::Profile;
pub use runner::{Agent, AgentResponse, ChatTurn, ToolCallRecord, TurnRole};
pub use tools::{
    parse_tool_call, tool_definitions, ToolCall, ToolContext, GUEST_PROMPT_MESSAGE,
    NO_GUEST_MATCH_MESSAGE,
};
