//! Ask command implementation.

use crate::agent::{Agent, Profile, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::output::content_preview;
use crate::cli::Output;
use crate::config::Settings;
use crate::error::{GalaError, Result};
use crate::openai::create_client;
use std::str::FromStr;

/// Run the ask command: one question, one answer.
pub async fn run_ask(
    question: &str,
    assistant: &str,
    model: Option<String>,
    trace: bool,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Chat, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'gala doctor' for detailed diagnostics.");
        return Err(e);
    }

    let profile = Profile::from_str(assistant).map_err(GalaError::Config)?;
    let model = model.unwrap_or_else(|| settings.model.model.clone());

    let guests = match profile {
        Profile::Host => Some(super::load_guests(&settings).await?),
        Profile::Planner => None,
    };

    let client = create_client(&settings.model)?;
    let tools = ToolContext::new(guests, &settings);
    let agent = Agent::new(client, tools, profile, &model);

    let spinner = Output::spinner("Thinking...");

    match agent.run(question).await {
        Ok(response) => {
            spinner.finish_and_clear();

            println!("\n{}\n", response.content);

            if trace && !response.tool_calls.is_empty() {
                Output::header("Tool calls");
                for record in &response.tool_calls {
                    Output::list_item(&format!(
                        "{} -> {}",
                        record,
                        content_preview(&record.result, 120)
                    ));
                }
                println!();
            }

            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate answer: {}", e));
            Err(e)
        }
    }
}
