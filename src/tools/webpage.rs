//! Webpage reader: fetch a URL and render it as plain text.

use crate::error::{GalaError, Result};
use regex::Regex;
use url::Url;

/// Rendered line width for the text conversion.
const RENDER_WIDTH: usize = 100;

/// Fetch a page and return its readable text, truncated to `max_chars`.
///
/// Failures come back as the tool's result text so the agent can read and
/// react to them.
pub async fn visit_webpage(client: &reqwest::Client, url: &str, max_chars: usize) -> String {
    let body = match fetch_page(client, url).await {
        Ok(body) => body,
        Err(e) => return format!("Error fetching the webpage: {}", e),
    };

    match render_text(&body) {
        Ok(text) => truncate_content(&text, max_chars),
        Err(e) => format!("An unexpected error occurred: {}", e),
    }
}

async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let parsed = Url::parse(url)
        .map_err(|e| GalaError::InvalidInput(format!("invalid URL {:?}: {}", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(GalaError::InvalidInput(format!(
            "unsupported URL scheme: {}",
            parsed.scheme()
        )));
    }

    let body = client
        .get(parsed)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(body)
}

/// Render HTML to text and collapse runs of blank lines.
fn render_text(html: &str) -> Result<String> {
    let text = html2text::from_read(html.as_bytes(), RENDER_WIDTH)
        .map_err(|e| GalaError::InvalidInput(format!("cannot render page: {}", e)))?;

    let blank_runs = Regex::new(r"\n{3,}").expect("Invalid regex");
    Ok(blank_runs.replace_all(text.trim(), "\n\n").into_owned())
}

/// Cap content length, marking the cut.
fn truncate_content(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let head: String = text.chars().take(max_chars).collect();
    format!(
        "{}\n..._This content has been truncated to stay below {} characters_...",
        head, max_chars
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_collapses_blank_lines() {
        let html = "<h1>Title</h1><p>One</p><br><br><br><p>Two</p>";
        let text = render_text(html).unwrap();
        assert!(text.contains("Title"));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn test_truncate_content_short_text_unchanged() {
        assert_eq!(truncate_content("short", 100), "short");
    }

    #[test]
    fn test_truncate_content_marks_the_cut() {
        let long = "x".repeat(50);
        let out = truncate_content(&long, 10);
        assert!(out.starts_with("xxxxxxxxxx\n"));
        assert!(out.contains("truncated to stay below 10 characters"));
    }

    #[tokio::test]
    async fn test_visit_webpage_rejects_bad_scheme() {
        let client = reqwest::Client::new();
        let out = visit_webpage(&client, "ftp://example.com/file", 100).await;
        assert!(out.starts_with("Error fetching the webpage:"));
        assert!(out.contains("unsupported URL scheme"));
    }

    #[tokio::test]
    async fn test_visit_webpage_rejects_unparseable_url() {
        let client = reqwest::Client::new();
        let out = visit_webpage(&client, "not a url", 100).await;
        assert!(out.starts_with("Error fetching the webpage:"));
    }
}
