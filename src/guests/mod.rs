//! Guest dataset loading and retrieval.
//!
//! Guests are loaded wholesale at startup from either the Hub dataset or a
//! local JSON file, rendered into one text document per record, and indexed
//! for lexical retrieval. Nothing is mutated after the load.

mod hub;
mod index;
mod local;

pub use hub::HubDatasetSource;
pub use index::{GuestHit, GuestIndex};
pub use local::LocalFileSource;

use crate::config::GuestSettings;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single invitee record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestRecord {
    pub name: String,
    pub relation: String,
    pub description: String,
    pub email: String,
}

impl GuestRecord {
    /// Render this record as a retrieval document. Each record maps to
    /// exactly one document.
    pub fn to_document(&self) -> String {
        format!(
            "Name: {}\nRelation: {}\nDescription: {}\nEmail: {}",
            self.name, self.relation, self.description, self.email
        )
    }
}

/// A source of guest records.
#[async_trait]
pub trait GuestSource: Send + Sync {
    /// Human-readable description of where the guests come from.
    fn describe(&self) -> String;

    /// Fetch the full guest list.
    async fn fetch(&self) -> Result<Vec<GuestRecord>>;
}

/// Pick the guest source from settings: a configured local file wins over
/// the Hub dataset.
pub fn source_from_settings(
    settings: &GuestSettings,
    token: Option<String>,
) -> Box<dyn GuestSource> {
    match &settings.local_path {
        Some(path) => Box::new(LocalFileSource::new(crate::config::Settings::expand_path(
            path,
        ))),
        None => Box::new(HubDatasetSource::new(&settings.dataset, token)),
    }
}

/// Fetch the guest list and build the retrieval index over it.
pub async fn load_guest_index(
    settings: &GuestSettings,
    token: Option<String>,
) -> Result<GuestIndex> {
    let source = source_from_settings(settings, token);
    tracing::info!("Loading guests from {}", source.describe());

    let records = source.fetch().await?;
    tracing::info!("Loaded {} guest documents", records.len());

    GuestIndex::build(&records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_renders_one_document() {
        let record = GuestRecord {
            name: "Ada Lovelace".to_string(),
            relation: "best friend".to_string(),
            description: "Pioneer of computing.".to_string(),
            email: "ada@example.com".to_string(),
        };

        let doc = record.to_document();
        assert!(doc.starts_with("Name: Ada Lovelace\n"));
        assert!(doc.contains("Relation: best friend"));
        assert!(doc.ends_with("Email: ada@example.com"));
        assert_eq!(doc.lines().count(), 4);
    }

    #[test]
    fn test_source_selection_prefers_local_path() {
        let mut settings = GuestSettings::default();
        settings.local_path = Some("/tmp/guests.json".to_string());
        let source = source_from_settings(&settings, None);
        assert!(source.describe().contains("/tmp/guests.json"));

        settings.local_path = None;
        let source = source_from_settings(&settings, None);
        assert!(source.describe().contains("agents-course/unit3-invitees"));
    }
}
