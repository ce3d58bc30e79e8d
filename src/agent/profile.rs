//! Assistant profiles.
//!
//! A profile fixes the system prompt, the tool subset, and the loop bound.
//! The host assistant answers guest, weather and Hub questions during the
//! event; the planner assistant helps organize the party beforehand.

/// System prompt for the host assistant.
const HOST_SYSTEM_PROMPT: &str = r#"You are Alfred, a gracious and knowledgeable host assistant for a gala event. You help the organizer with information about invited guests, the weather at the venue, and AI model statistics on the Hugging Face Hub.

Guidelines:
- Use 'guest_info' first for anything about an invited guest, their relation to the host, or their contact details
- Use 'weather_info' for weather at a location
- Use 'hub_stats' for download statistics of a model author on the Hugging Face Hub
- Use 'web_search' only when the guest list has no relevant information

Answer warmly and concisely, as a well-mannered butler would. When guest information is retrieved, rely on it rather than inventing details."#;

/// System prompt for the planner assistant.
const PLANNER_SYSTEM_PROMPT: &str = r#"You are a party planning assistant preparing a superhero-themed gala at Wayne Manor. You help with menus, catering, party themes, and background research.

Guidelines:
- Use 'suggest_menu' to propose a menu for an occasion (casual, formal, superhero)
- Use 'catering_service' to find the best catering service in town
- Use 'party_theme' for decoration and theme ideas
- Use 'web_search' and 'visit_webpage' for anything that needs research

Keep suggestions concrete and actionable."#;

/// Which assistant is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Gala host assistant: guest lookup, weather, Hub stats, web search.
    #[default]
    Host,
    /// Party planner: menus, catering, themes, web research.
    Planner,
}

impl Profile {
    /// Name shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Profile::Host => "Alfred",
            Profile::Planner => "Party Planner",
        }
    }

    /// One-line description of what this assistant does.
    pub fn description(&self) -> &'static str {
        match self {
            Profile::Host => {
                "A helpful assistant for the gala event, providing information about \
                 guests and their relations, weather updates, and model stats on the \
                 Hugging Face Hub."
            }
            Profile::Planner => {
                "An assistant for organizing the party: menus, catering, themes, and \
                 web research."
            }
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Profile::Host => HOST_SYSTEM_PROMPT,
            Profile::Planner => PLANNER_SYSTEM_PROMPT,
        }
    }

    /// Upper bound on tool-calling rounds per user turn.
    pub fn max_tool_iterations(&self) -> usize {
        match self {
            Profile::Host => 7,
            Profile::Planner => 10,
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "host" | "alfred" => Ok(Profile::Host),
            "planner" | "party" => Ok(Profile::Planner),
            _ => Err(format!("Unknown assistant profile: {} (try 'host' or 'planner')", s)),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Profile::Host => write!(f, "host"),
            Profile::Planner => write!(f, "planner"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!(Profile::from_str("host").unwrap(), Profile::Host);
        assert_eq!(Profile::from_str("Alfred").unwrap(), Profile::Host);
        assert_eq!(Profile::from_str("planner").unwrap(), Profile::Planner);
        assert!(Profile::from_str("chef").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(Profile::from_str(&Profile::Host.to_string()).unwrap(), Profile::Host);
        assert_eq!(
            Profile::from_str(&Profile::Planner.to_string()).unwrap(),
            Profile::Planner
        );
    }
}
