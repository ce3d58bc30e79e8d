//! Tool declarations, parsing, and dispatch for the assistants.

use super::Profile;
use crate::config::Settings;
use crate::error::{GalaError, Result};
use crate::guests::GuestIndex;
use crate::tools::{hub, party, search, weather, webpage};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Fixed reply for an empty retriever query.
pub const GUEST_PROMPT_MESSAGE: &str = "Please provide a guest name or relation to search for.";

/// Fixed reply when retrieval finds nothing.
pub const NO_GUEST_MATCH_MESSAGE: &str = "No matching guest information found.";

/// Available tools across both assistants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Retrieve guest information from the invitee index.
    GuestInfo { query: String },

    /// Dummy weather for a location.
    WeatherInfo { location: String },

    /// Most downloaded Hub model for an author.
    HubStats { author: String },

    /// Web search.
    WebSearch { query: String },

    /// Fetch a webpage as readable text.
    VisitWebpage { url: String },

    /// Menu for an occasion.
    SuggestMenu { occasion: String },

    /// Best catering service in town.
    CateringService { query: String },

    /// Party theme for a category.
    PartyTheme { category: String },
}

/// Tool execution context shared by a session.
pub struct ToolContext {
    guests: Option<Arc<GuestIndex>>,
    http: reqwest::Client,
    settings: Settings,
}

impl ToolContext {
    /// Create a new tool context. The guest index is only needed for the
    /// host assistant; pass `None` for the planner.
    pub fn new(guests: Option<Arc<GuestIndex>>, settings: &Settings) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gala/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            guests,
            http,
            settings: settings.clone(),
        }
    }

    /// Execute a tool call and return the result as a string.
    pub async fn execute(&self, tool: &ToolCall) -> Result<String> {
        match tool {
            ToolCall::GuestInfo { query } => self.execute_guest_info(query),
            ToolCall::WeatherInfo { location } => self.execute_weather(location),
            ToolCall::HubStats { author } => self.execute_hub_stats(author).await,
            ToolCall::WebSearch { query } => self.execute_web_search(query).await,
            ToolCall::VisitWebpage { url } => Ok(webpage::visit_webpage(
                &self.http,
                url,
                self.settings.web.max_page_chars,
            )
            .await),
            ToolCall::SuggestMenu { occasion } => Ok(party::suggest_menu(occasion)),
            ToolCall::CateringService { query } => Ok(party::catering_service(query)),
            ToolCall::PartyTheme { category } => Ok(party::party_theme(category)),
        }
    }

    fn execute_guest_info(&self, query: &str) -> Result<String> {
        if query.trim().is_empty() {
            return Ok(GUEST_PROMPT_MESSAGE.to_string());
        }

        let index = self
            .guests
            .as_ref()
            .ok_or_else(|| GalaError::Retrieval("guest index is not loaded".to_string()))?;

        let hits = index.search(query, self.settings.guests.max_results)?;

        if hits.is_empty() {
            return Ok(NO_GUEST_MATCH_MESSAGE.to_string());
        }

        Ok(hits
            .iter()
            .map(|hit| hit.document.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    fn execute_weather(&self, location: &str) -> Result<String> {
        if location.trim().is_empty() {
            return Err(GalaError::InvalidInput(
                "location must not be empty".to_string(),
            ));
        }

        Ok(weather::dummy_weather(location.trim()))
    }

    async fn execute_hub_stats(&self, author: &str) -> Result<String> {
        if author.trim().is_empty() {
            return Err(GalaError::InvalidInput(
                "author must not be empty".to_string(),
            ));
        }

        // Lookup failures are folded into the result text, not propagated.
        Ok(hub::hub_stats(&self.http, author.trim()).await)
    }

    async fn execute_web_search(&self, query: &str) -> Result<String> {
        let hits = search::web_search(
            &self.http,
            &self.settings.web.search_endpoint,
            query,
            self.settings.web.max_results,
        )
        .await?;

        Ok(search::format_results(&hits))
    }
}

/// OpenAI function/tool definitions for an assistant profile.
pub fn tool_definitions(profile: Profile) -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    fn tool(name: &str, description: &str, parameters: serde_json::Value) -> ChatCompletionTool {
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: name.to_string(),
                description: Some(description.to_string()),
                parameters: Some(parameters),
                strict: None,
            },
        }
    }

    let guest_info = tool(
        "guest_info",
        "Retrieves detailed information about gala guests based on their name, relation, \
         description or email. Useful for providing context about guests during the event.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The name or relation of the guest you want information about"
                }
            },
            "required": ["query"]
        }),
    );

    let weather_info = tool(
        "weather_info",
        "Fetches dummy weather information for a given location during the gala event.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The location to get weather information for"
                }
            },
            "required": ["location"]
        }),
    );

    let hub_stats = tool(
        "hub_stats",
        "Fetches the most downloaded model from a specific author on the Hugging Face Hub.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "author": {
                    "type": "string",
                    "description": "The username of the model author/organization to find models from"
                }
            },
            "required": ["author"]
        }),
    );

    // The host demotes web search below guest lookup; the planner uses it
    // as a first-class research tool.
    let web_search_description = match profile {
        Profile::Host => {
            "A tool to search the web for any topic or person, but of lower priority than \
             the guest info tool; use it only if the guest info tool has no relevant \
             information."
        }
        Profile::Planner => "A tool to search the web for any topic.",
    };

    let web_search = tool(
        "web_search",
        web_search_description,
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        }),
    );

    let visit_webpage = tool(
        "visit_webpage",
        "Visits a webpage at the given URL and returns its content as readable text.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The URL of the webpage to visit"
                }
            },
            "required": ["url"]
        }),
    );

    let suggest_menu = tool(
        "suggest_menu",
        "Suggests a menu for the party based on the occasion.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "occasion": {
                    "type": "string",
                    "description": "The type of occasion: casual, formal, or superhero"
                }
            },
            "required": ["occasion"]
        }),
    );

    let catering_service = tool(
        "catering_service",
        "Returns the highest-rated catering service in town.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "What you are looking for in a catering service"
                }
            },
            "required": ["query"]
        }),
    );

    let party_theme = tool(
        "party_theme",
        "Suggests a superhero party theme for a category: 'classic heroes', \
         'villain masquerade', or 'futuristic gotham'.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "The theme category"
                }
            },
            "required": ["category"]
        }),
    );

    match profile {
        Profile::Host => vec![guest_info, weather_info, hub_stats, web_search],
        Profile::Planner => vec![
            web_search,
            visit_webpage,
            suggest_menu,
            catering_service,
            party_theme,
        ],
    }
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| GalaError::Agent(format!("Invalid tool arguments: {}", e)))?;

    fn required(args: &serde_json::Value, key: &str) -> Result<String> {
        args[key]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| GalaError::Agent(format!("Missing '{}' argument", key)))
    }

    match name {
        "guest_info" => Ok(ToolCall::GuestInfo {
            query: required(&args, "query")?,
        }),
        "weather_info" => Ok(ToolCall::WeatherInfo {
            location: required(&args, "location")?,
        }),
        "hub_stats" => Ok(ToolCall::HubStats {
            author: required(&args, "author")?,
        }),
        "web_search" => Ok(ToolCall::WebSearch {
            query: required(&args, "query")?,
        }),
        "visit_webpage" => Ok(ToolCall::VisitWebpage {
            url: required(&args, "url")?,
        }),
        "suggest_menu" => Ok(ToolCall::SuggestMenu {
            occasion: required(&args, "occasion")?,
        }),
        "catering_service" => Ok(ToolCall::CateringService {
            query: required(&args, "query")?,
        }),
        "party_theme" => Ok(ToolCall::PartyTheme {
            category: required(&args, "category")?,
        }),
        _ => Err(GalaError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guests::GuestRecord;

    fn context_with_guests() -> ToolContext {
        let records = vec![
            GuestRecord {
                name: "Ada Lovelace".to_string(),
                relation: "best friend".to_string(),
                description: "Renowned mathematician and first programmer.".to_string(),
                email: "ada.lovelace@example.com".to_string(),
            },
            GuestRecord {
                name: "Dr. Nikola Tesla".to_string(),
                relation: "old friend from university days".to_string(),
                description: "Inventor working on a wireless energy system.".to_string(),
                email: "nikola.tesla@gmail.com".to_string(),
            },
        ];
        let index = GuestIndex::build(&records).unwrap();
        ToolContext::new(Some(Arc::new(index)), &Settings::default())
    }

    #[test]
    fn test_parse_guest_info() {
        let tool = parse_tool_call("guest_info", r#"{"query": "Lady Ada Lovelace"}"#).unwrap();
        match tool {
            ToolCall::GuestInfo { query } => assert_eq!(query, "Lady Ada Lovelace"),
            _ => panic!("Expected GuestInfo tool"),
        }
    }

    #[test]
    fn test_parse_weather_info_missing_argument() {
        let err = parse_tool_call("weather_info", r#"{}"#).unwrap_err();
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn test_parse_unknown_tool() {
        assert!(parse_tool_call("teleport", r#"{}"#).is_err());
    }

    #[test]
    fn test_parse_invalid_json_arguments() {
        assert!(parse_tool_call("guest_info", "not json").is_err());
    }

    #[tokio::test]
    async fn test_guest_info_empty_query_prompts() {
        let ctx = context_with_guests();
        let result = ctx
            .execute(&ToolCall::GuestInfo { query: "  ".to_string() })
            .await
            .unwrap();
        assert_eq!(result, GUEST_PROMPT_MESSAGE);
    }

    #[tokio::test]
    async fn test_guest_info_returns_matching_documents() {
        let ctx = context_with_guests();
        let result = ctx
            .execute(&ToolCall::GuestInfo { query: "Ada Lovelace".to_string() })
            .await
            .unwrap();
        assert!(result.contains("Name: Ada Lovelace"));
        assert!(result.contains("Email: ada.lovelace@example.com"));
    }

    #[tokio::test]
    async fn test_guest_info_no_match_message() {
        let ctx = context_with_guests();
        let result = ctx
            .execute(&ToolCall::GuestInfo { query: "Clark Kent".to_string() })
            .await
            .unwrap();
        assert_eq!(result, NO_GUEST_MATCH_MESSAGE);
    }

    #[tokio::test]
    async fn test_weather_info_blank_location_is_invalid() {
        let ctx = ToolContext::new(None, &Settings::default());
        let result = ctx
            .execute(&ToolCall::WeatherInfo { location: "".to_string() })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_pure_planner_tools_execute_without_index() {
        let ctx = ToolContext::new(None, &Settings::default());

        let menu = ctx
            .execute(&ToolCall::SuggestMenu { occasion: "formal".to_string() })
            .await
            .unwrap();
        assert_eq!(menu, "3-course dinner with wine and dessert.");

        let catering = ctx
            .execute(&ToolCall::CateringService { query: "gala".to_string() })
            .await
            .unwrap();
        assert_eq!(catering, "Gotham Catering Co.");
    }

    #[test]
    fn test_profiles_expose_disjoint_tool_surfaces() {
        let host: Vec<String> = tool_definitions(Profile::Host)
            .into_iter()
            .map(|t| t.function.name)
            .collect();
        let planner: Vec<String> = tool_definitions(Profile::Planner)
            .into_iter()
            .map(|t| t.function.name)
            .collect();

        assert!(host.contains(&"guest_info".to_string()));
        assert!(!planner.contains(&"guest_info".to_string()));
        assert!(planner.contains(&"suggest_menu".to_string()));
        assert!(host.contains(&"web_search".to_string()));
        assert!(planner.contains(&"web_search".to_string()));
    }
}
