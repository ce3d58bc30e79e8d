//! Hub dataset source.
//!
//! Pages through the datasets-server `/rows` API to pull the invitee list.

use super::{GuestRecord, GuestSource};
use crate::error::{GalaError, Result};
use async_trait::async_trait;
use serde::Deserialize;

const ROWS_ENDPOINT: &str = "https://datasets-server.huggingface.co/rows";
const PAGE_SIZE: usize = 100;

/// Guest source backed by a dataset on the Hugging Face Hub.
pub struct HubDatasetSource {
    dataset: String,
    token: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RowsResponse {
    rows: Vec<RowEntry>,
    num_rows_total: usize,
}

#[derive(Debug, Deserialize)]
struct RowEntry {
    row: GuestRecord,
}

impl HubDatasetSource {
    pub fn new(dataset: &str, token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gala/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            dataset: dataset.to_string(),
            token,
            client,
        }
    }

    async fn fetch_page(&self, offset: usize) -> Result<RowsResponse> {
        let mut request = self.client.get(ROWS_ENDPOINT).query(&[
            ("dataset", self.dataset.as_str()),
            ("config", "default"),
            ("split", "train"),
            ("offset", &offset.to_string()),
            ("length", &PAGE_SIZE.to_string()),
        ]);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(GalaError::Dataset(format!(
                "rows API returned {} for dataset {}",
                response.status(),
                self.dataset
            )));
        }

        Ok(response.json::<RowsResponse>().await?)
    }
}

#[async_trait]
impl GuestSource for HubDatasetSource {
    fn describe(&self) -> String {
        format!("Hub dataset {}", self.dataset)
    }

    async fn fetch(&self) -> Result<Vec<GuestRecord>> {
        let mut records = Vec::new();

        loop {
            let page = self.fetch_page(records.len()).await?;
            if page.rows.is_empty() {
                break;
            }

            records.extend(page.rows.into_iter().map(|entry| entry.row));

            if records.len() >= page.num_rows_total {
                break;
            }
        }

        if records.is_empty() {
            return Err(GalaError::Dataset(format!(
                "dataset {} contains no rows",
                self.dataset
            )));
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_response_decoding() {
        let body = r#"{
            "features": [{"feature_idx": 0, "name": "name", "type": {"dtype": "string"}}],
            "rows": [
                {"row_idx": 0, "row": {
                    "name": "Ada Lovelace",
                    "relation": "best friend",
                    "description": "Pioneer of computing.",
                    "email": "ada@example.com"
                }, "truncated_cells": []}
            ],
            "num_rows_total": 1,
            "num_rows_per_page": 100
        }"#;

        let decoded: RowsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.num_rows_total, 1);
        assert_eq!(decoded.rows[0].row.name, "Ada Lovelace");
    }
}
