//! Pre-flight checks before operations that need credentials.
//!
//! Validates configuration up front so a chat doesn't fail on the first
//! model call.

use crate::config::Settings;
use crate::error::Result;
use crate::openai;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Chatting requires an API token.
    Chat,
    /// Serving the HTTP UI requires an API token.
    Serve,
    /// Direct guest inspection has no credential requirements.
    Guests,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Chat | Operation::Serve => {
            openai::resolve_token(&settings.model.api_key_env)?;
        }
        Operation::Guests => {
            // No credential requirements; a public dataset or local file.
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guests_has_no_requirements() {
        let settings = Settings::default();
        assert!(check(Operation::Guests, &settings).is_ok());
    }

    #[test]
    fn test_chat_requires_token() {
        let mut settings = Settings::default();
        settings.model.api_key_env = "GALA_PREFLIGHT_TEST_UNSET_TOKEN".to_string();
        assert!(check(Operation::Chat, &settings).is_err());
    }
}
