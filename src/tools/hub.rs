//! Hugging Face Hub model stats lookup.

use crate::error::Result;
use serde::Deserialize;

const MODELS_ENDPOINT: &str = "https://huggingface.co/api/models";

/// Subset of the Hub model listing we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct HubModel {
    #[serde(alias = "modelId")]
    pub id: String,
    #[serde(default)]
    pub downloads: u64,
}

/// Look up the most downloaded model for an author.
///
/// One call, sorted by downloads descending, limit 1. No retry.
pub async fn most_downloaded_model(
    client: &reqwest::Client,
    author: &str,
) -> Result<Option<HubModel>> {
    let models: Vec<HubModel> = client
        .get(MODELS_ENDPOINT)
        .query(&[
            ("author", author),
            ("sort", "downloads"),
            ("direction", "-1"),
            ("limit", "1"),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(models.into_iter().next())
}

/// Run the lookup and fold the outcome into a single result string.
///
/// Lookup failures are returned as the tool's result text rather than
/// propagated.
pub async fn hub_stats(client: &reqwest::Client, author: &str) -> String {
    match most_downloaded_model(client, author).await {
        Ok(model) => format_hub_stats(author, model),
        Err(e) => format!("Error fetching models for {}: {}", author, e),
    }
}

/// Format the lookup outcome.
pub fn format_hub_stats(author: &str, model: Option<HubModel>) -> String {
    match model {
        Some(model) => format!(
            "The most downloaded model by {} is {} with {} downloads.",
            author,
            model.id,
            group_thousands(model.downloads)
        ),
        None => format!("No models found for author {}.", author),
    }
}

/// Format an integer with `,` thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_model_listing() {
        let body = r#"[{"id": "meta-llama/Llama-3.1-8B-Instruct", "downloads": 12345678}]"#;
        let models: Vec<HubModel> = serde_json::from_str(body).unwrap();
        assert_eq!(models[0].id, "meta-llama/Llama-3.1-8B-Instruct");
        assert_eq!(models[0].downloads, 12_345_678);
    }

    #[test]
    fn test_decode_legacy_model_id_field() {
        let body = r#"[{"modelId": "bert-base-uncased"}]"#;
        let models: Vec<HubModel> = serde_json::from_str(body).unwrap();
        assert_eq!(models[0].id, "bert-base-uncased");
        assert_eq!(models[0].downloads, 0);
    }

    #[test]
    fn test_format_found() {
        let model = HubModel {
            id: "meta-llama/Llama-3.1-8B-Instruct".to_string(),
            downloads: 12_345_678,
        };
        assert_eq!(
            format_hub_stats("meta-llama", Some(model)),
            "The most downloaded model by meta-llama is meta-llama/Llama-3.1-8B-Instruct \
             with 12,345,678 downloads."
        );
    }

    #[test]
    fn test_format_not_found_is_fixed_message() {
        assert_eq!(
            format_hub_stats("nobody-here", None),
            "No models found for author nobody-here."
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
