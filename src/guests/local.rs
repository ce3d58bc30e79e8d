//! Local file guest source.

use super::{GuestRecord, GuestSource};
use crate::error::{GalaError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Guest source backed by a JSON array on disk.
///
/// Useful for offline runs and tests; the file holds the same fields as the
/// Hub dataset rows.
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl GuestSource for LocalFileSource {
    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<GuestRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            GalaError::Dataset(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let records: Vec<GuestRecord> = serde_json::from_str(&content)?;

        if records.is_empty() {
            return Err(GalaError::Dataset(format!(
                "{} contains no guest records",
                self.path.display()
            )));
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Dr. Nikola Tesla", "relation": "old friend",
                 "description": "Inventor working on wireless energy.",
                 "email": "nikola.tesla@gmail.com"}}]"#
        )
        .unwrap();

        let source = LocalFileSource::new(file.path().to_path_buf());
        let records = source.fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Dr. Nikola Tesla");
    }

    #[tokio::test]
    async fn test_fetch_empty_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let source = LocalFileSource::new(file.path().to_path_buf());
        assert!(source.fetch().await.is_err());
    }
}
