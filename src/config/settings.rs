//! Configuration settings for Gala.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub model: ModelSettings,
    pub guests: GuestSettings,
    pub web: WebSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for storing application data.
    pub data_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.gala".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Chat model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Model id passed to the chat-completions API.
    pub model: String,
    /// Base URL of the OpenAI-compatible endpoint.
    pub api_base: String,
    /// Name of the environment variable holding the API token.
    pub api_key_env: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: "Qwen/Qwen2.5-72B-Instruct".to_string(),
            api_base: "https://router.huggingface.co/v1".to_string(),
            api_key_env: "HF_TOKEN".to_string(),
            timeout_seconds: 120,
        }
    }
}

/// Guest dataset and retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestSettings {
    /// Hub dataset id holding the invitee list.
    pub dataset: String,
    /// Optional local JSON file used instead of the Hub dataset.
    pub local_path: Option<String>,
    /// Maximum number of documents the retriever returns.
    pub max_results: usize,
}

impl Default for GuestSettings {
    fn default() -> Self {
        Self {
            dataset: "agents-course/unit3-invitees".to_string(),
            local_path: None,
            max_results: 3,
        }
    }
}

/// Web search and webpage reader settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSettings {
    /// HTML search endpoint.
    pub search_endpoint: String,
    /// Maximum number of search results to return.
    pub max_results: usize,
    /// Maximum number of characters returned by the webpage reader.
    pub max_page_chars: usize,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            search_endpoint: "https://html.duckduckgo.com/html/".to_string(),
            max_results: 5,
            max_page_chars: 10_000,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::GalaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gala")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }

    /// Get the expanded local guest file path, if configured.
    pub fn guest_local_path(&self) -> Option<PathBuf> {
        self.guests
            .local_path
            .as_deref()
            .map(Self::expand_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.guests.max_results, 3);
        assert_eq!(settings.guests.dataset, "agents-course/unit3-invitees");
        assert_eq!(settings.model.api_key_env, "HF_TOKEN");
        assert!(settings.model.api_base.starts_with("https://"));
        assert_eq!(settings.web.max_page_chars, 10_000);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.model.model = "test-model".to_string();
        settings.guests.local_path = Some("/tmp/guests.json".to_string());
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.model.model, "test-model");
        assert_eq!(loaded.guests.local_path.as_deref(), Some("/tmp/guests.json"));
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/gala/config.toml");
        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.guests.max_results, 3);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\nmodel = \"other\"\n").unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.model.model, "other");
        assert_eq!(loaded.web.max_results, 5);
    }
}
