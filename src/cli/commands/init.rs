//! Init command - first-run setup.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::{self, Write};

/// Run the init command for first-time setup.
pub fn run_init(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Gala Setup");
    println!();
    println!("Welcome to Gala! Let's make sure everything is configured correctly.\n");

    // Step 1: API token
    println!("{}", style("Step 1: Checking API configuration").bold().cyan());
    println!();

    let env_var = &settings.model.api_key_env;
    if std::env::var(env_var).map(|v| v.is_empty()).unwrap_or(true) {
        Output::warning(&format!("{} environment variable is not set.", env_var));
        println!();
        println!("  Gala needs a Hugging Face token to call the chat model.");
        println!(
            "  Get one from: {}",
            style("https://huggingface.co/settings/tokens").underlined()
        );
        println!();
        println!("  Set it in your shell configuration or a .env file:");
        println!("  {}", style(format!("export {}='hf_...'", env_var)).green());
        println!();

        if !prompt_continue("Continue without a token?")? {
            println!();
            Output::info("Setup cancelled. Set the token and run 'gala init' again.");
            return Ok(());
        }
    } else {
        Output::success("API token is set!");
    }

    println!();

    // Step 2: Config file
    println!("{}", style("Step 2: Writing configuration").bold().cyan());
    println!();

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::info(&format!("Config already exists at {}", config_path.display()));
    } else {
        settings.save()?;
        Output::success(&format!("Created default config at {}", config_path.display()));
    }

    println!();

    // Step 3: Next steps
    println!("{}", style("Step 3: Try it out").bold().cyan());
    println!();
    Output::kv("Chat with the host", "gala chat");
    Output::kv("Plan the party", "gala chat --assistant planner");
    Output::kv("Browse the guest list", "gala guests list");
    Output::kv("Browser UI", "gala serve");
    println!();

    Output::success("Setup complete.");

    Ok(())
}

/// Ask a yes/no question on stdin.
fn prompt_continue(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
