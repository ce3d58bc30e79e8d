//! Web search against the DuckDuckGo HTML endpoint.

use crate::error::Result;
use regex::Regex;
use tracing::debug;

/// Fixed message when a search yields nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found! Try a less restrictive/shorter query.";

/// One parsed search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Query the HTML endpoint and return up to `limit` parsed results.
pub async fn web_search(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchHit>> {
    let body = client
        .get(endpoint)
        .query(&[("q", query)])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let hits = parse_results(&body, limit);
    debug!("Web search for {:?} returned {} results", query, hits.len());

    Ok(hits)
}

/// Extract result anchors and snippets from the DuckDuckGo HTML page.
pub fn parse_results(html: &str, limit: usize) -> Vec<SearchHit> {
    let link_re = Regex::new(r#"(?s)<a[^>]*class="result__a"[^>]*href="([^"]+)"[^>]*>(.*?)</a>"#)
        .expect("Invalid regex");
    let snippet_re =
        Regex::new(r#"(?s)<a[^>]*class="result__snippet"[^>]*>(.*?)</a>"#).expect("Invalid regex");

    let snippets: Vec<String> = snippet_re
        .captures_iter(html)
        .map(|caps| strip_tags(&caps[1]))
        .collect();

    link_re
        .captures_iter(html)
        .take(limit)
        .enumerate()
        .map(|(i, caps)| SearchHit {
            title: strip_tags(&caps[2]),
            url: resolve_redirect(&caps[1]),
            snippet: snippets.get(i).cloned().unwrap_or_default(),
        })
        .collect()
}

/// Format hits the way the agent expects to read them.
pub fn format_results(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let body = hits
        .iter()
        .map(|hit| format!("[{}]({})\n{}", hit.title, hit.url, hit.snippet))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("## Search Results\n\n{}", body)
}

/// DuckDuckGo links point at a redirect URL carrying the target in the
/// `uddg` query parameter; unwrap it when present.
fn resolve_redirect(href: &str) -> String {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    if let Ok(parsed) = url::Url::parse(&absolute) {
        if let Some((_, target)) = parsed.query_pairs().find(|(k, _)| k == "uddg") {
            return target.into_owned();
        }
    }

    absolute
}

/// Drop markup and decode the entities DuckDuckGo emits.
fn strip_tags(fragment: &str) -> String {
    let tag_re = Regex::new(r"<[^>]*>").expect("Invalid regex");
    let text = tag_re.replace_all(fragment, "");

    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <div class="result results_links results_links_deep web-result">
          <h2 class="result__title">
            <a rel="nofollow" class="result__a"
               href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fllama&amp;rut=abc123">
               Meta <b>Llama</b> models</a>
          </h2>
          <a class="result__snippet"
             href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fllama&amp;rut=abc123">
             Open foundation models &amp; tools from <b>Meta</b>.</a>
        </div>
        <div class="result">
          <a rel="nofollow" class="result__a" href="https://example.org/direct">Direct result</a>
          <a class="result__snippet" href="https://example.org/direct">Second snippet</a>
        </div>
    "#;

    #[test]
    fn test_parse_results() {
        let hits = parse_results(FIXTURE, 10);
        assert_eq!(hits.len(), 2);

        assert_eq!(hits[0].title, "Meta Llama models");
        assert_eq!(hits[0].snippet, "Open foundation models & tools from Meta.");
        assert_eq!(hits[1].title, "Direct result");
        assert_eq!(hits[1].url, "https://example.org/direct");
    }

    #[test]
    fn test_redirect_unwrapping() {
        let hits = parse_results(FIXTURE, 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://example.com/llama");
    }

    #[test]
    fn test_format_results_empty_is_fixed_message() {
        assert_eq!(format_results(&[]), NO_RESULTS_MESSAGE);
    }

    #[test]
    fn test_format_results_numbered_markdown() {
        let hits = vec![SearchHit {
            title: "Title".to_string(),
            url: "https://example.com".to_string(),
            snippet: "Snippet".to_string(),
        }];

        let out = format_results(&hits);
        assert!(out.starts_with("## Search Results\n\n"));
        assert!(out.contains("[Title](https://example.com)\nSnippet"));
    }

    #[test]
    fn test_strip_tags_decodes_entities() {
        assert_eq!(strip_tags("<b>a</b> &amp; b &#x27;c&#x27;"), "a & b 'c'");
    }
}
