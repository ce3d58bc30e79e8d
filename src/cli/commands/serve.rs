//! Browser chat UI and JSON API.
//!
//! The chat endpoint is stateless: each request carries the prior transcript
//! turns, so nothing is persisted server-side.

use crate::agent::{Agent, ChatTurn, Profile, ToolContext, TurnRole};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::guests::GuestIndex;
use crate::openai::create_client;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    settings: Settings,
    guests: Arc<GuestIndex>,
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
}

/// Run the HTTP chat server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    if let Err(e) = preflight::check(Operation::Serve, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'gala doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let guests = super::load_guests(&settings).await?;
    let client = create_client(&settings.model)?;

    let state = Arc::new(AppState {
        settings,
        guests,
        client,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/guests", get(list_guests))
        .route("/api/chat", post(chat))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Gala Chat Server");
    println!();
    Output::success(&format!("Chat UI on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Chat UI", "GET  /");
    Output::kv("Health", "GET  /health");
    Output::kv("Guests", "GET  /api/guests");
    Output::kv("Chat", "POST /api/chat");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct ChatRequest {
    /// Assistant profile; defaults to the host.
    #[serde(default)]
    assistant: Option<String>,
    /// Full transcript, ending with the user turn to answer.
    messages: Vec<ChatTurn>,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
    assistant: String,
    tool_calls: Vec<ToolCallInfo>,
}

#[derive(Serialize)]
struct ToolCallInfo {
    name: String,
    arguments: String,
    result: String,
}

#[derive(Serialize)]
struct GuestsResponse {
    guests: Vec<String>,
    total: usize,
    loaded_at: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn index() -> impl IntoResponse {
    Html(CHAT_PAGE)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_guests(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.guests.names() {
        Ok(names) => Json(GuestsResponse {
            total: names.len(),
            guests: names,
            loaded_at: state.guests.loaded_at().to_rfc3339(),
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let profile = match req.assistant.as_deref() {
        None => Profile::Host,
        Some(name) => match Profile::from_str(name) {
            Ok(profile) => profile,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e }))
                    .into_response()
            }
        },
    };

    if !matches!(req.messages.last(), Some(turn) if turn.role == TurnRole::User) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "transcript must end with a user turn".to_string(),
            }),
        )
            .into_response();
    }

    let guests = match profile {
        Profile::Host => Some(state.guests.clone()),
        Profile::Planner => None,
    };

    let tools = ToolContext::new(guests, &state.settings);
    let agent = Agent::new(
        state.client.clone(),
        tools,
        profile,
        &state.settings.model.model,
    );

    match agent.respond(&req.messages).await {
        Ok(response) => Json(ChatResponse {
            reply: response.content,
            assistant: profile.display_name().to_string(),
            tool_calls: response
                .tool_calls
                .into_iter()
                .map(|record| ToolCallInfo {
                    name: record.name,
                    arguments: record.arguments,
                    result: record.result,
                })
                .collect(),
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Embedded single-page chat UI.
const CHAT_PAGE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Gala Chat</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
  h1 { font-size: 1.3rem; }
  #log { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; min-height: 320px; }
  .turn { margin: 0.5rem 0; white-space: pre-wrap; }
  .user { color: #14532d; }
  .assistant { color: #1e3a8a; }
  .tools { color: #888; font-size: 0.85rem; }
  form { display: flex; gap: 0.5rem; margin-top: 1rem; }
  input[type=text] { flex: 1; padding: 0.5rem; }
</style>
</head>
<body>
<h1>Gala Chat</h1>
<label>
  Assistant:
  <select id="assistant">
    <option value="host">Alfred (host)</option>
    <option value="planner">Party Planner</option>
  </select>
</label>
<div id="log"></div>
<form id="form">
  <input id="input" type="text" autocomplete="off" placeholder="Ask about a guest, the weather, ...">
  <button>Send</button>
</form>
<script>
const log = document.getElementById('log');
const transcript = [];

function show(role, text) {
  const div = document.createElement('div');
  div.className = 'turn ' + role;
  div.textContent = (role === 'user' ? 'You: ' : 'Assistant: ') + text;
  log.appendChild(div);
  log.scrollTop = log.scrollHeight;
}

document.getElementById('form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const input = document.getElementById('input');
  const text = input.value.trim();
  if (!text) return;
  input.value = '';

  transcript.push({ role: 'user', content: text });
  show('user', text);

  const res = await fetch('/api/chat', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({
      assistant: document.getElementById('assistant').value,
      messages: transcript,
    }),
  });

  if (!res.ok) {
    const err = await res.json().catch(() => ({ error: res.statusText }));
    show('assistant', 'Error: ' + err.error);
    transcript.pop();
    return;
  }

  const data = await res.json();
  transcript.push({ role: 'assistant', content: data.reply });
  show('assistant', data.reply);

  if (data.tool_calls.length > 0) {
    const div = document.createElement('div');
    div.className = 'turn tools';
    div.textContent = 'tools: ' + data.tool_calls.map(t => t.name).join(', ');
    log.appendChild(div);
  }
});
</script>
</body>
</html>
"#;
