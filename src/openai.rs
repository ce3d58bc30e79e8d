//! Chat-completions client construction.
//!
//! Gala talks to any OpenAI-compatible endpoint; by default this is the
//! Hugging Face router, authenticated with the token named in the settings.

use crate::config::ModelSettings;
use crate::error::{GalaError, Result};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create a chat client from the model settings.
///
/// The API token is read from the environment variable named by
/// `api_key_env`; a missing or empty token is a configuration error.
pub fn create_client(settings: &ModelSettings) -> Result<Client<OpenAIConfig>> {
    let token = resolve_token(&settings.api_key_env)?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .build()?;

    let config = OpenAIConfig::new()
        .with_api_base(&settings.api_base)
        .with_api_key(token);

    Ok(Client::with_config(config).with_http_client(http_client))
}

/// Read the API token from the configured environment variable.
pub fn resolve_token(env_var: &str) -> Result<String> {
    match std::env::var(env_var) {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => Err(GalaError::Config(format!(
            "{env_var} is not set. Set it with: export {env_var}='hf_...'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_token_missing() {
        let err = resolve_token("GALA_TEST_TOKEN_THAT_DOES_NOT_EXIST").unwrap_err();
        assert!(err.to_string().contains("GALA_TEST_TOKEN_THAT_DOES_NOT_EXIST"));
    }
}
