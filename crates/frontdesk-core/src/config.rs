use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FrontdeskError, Result};

/// Top-level configuration for the Frontdesk application.
///
/// Loaded from `~/.frontdesk/config.toml` by default. Each section
/// corresponds to one part of the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontdeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
}

impl FrontdeskConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FrontdeskConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FrontdeskError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Conversation loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum citizen request length in characters.
    pub max_request_length: usize,
    /// Upper bound on responder invocations per request. The transition
    /// table already bounds every path; this guards a miswired registry.
    pub max_hops: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_request_length: 2000,
            max_hops: 8,
        }
    }
}

/// Keyword lists the intake responder triages with.
///
/// Document keywords are checked before translation keywords, so a request
/// mentioning both routes to document extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Substrings (matched case-insensitively) that route to document extraction.
    pub document_keywords: Vec<String>,
    /// Substrings (matched case-insensitively) that route to translation.
    pub translation_keywords: Vec<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            document_keywords: vec![
                "document".to_string(),
                "form".to_string(),
                "pdf".to_string(),
                "scan".to_string(),
            ],
            translation_keywords: vec![
                "translate".to_string(),
                "translation".to_string(),
                "arabic".to_string(),
            ],
        }
    }
}
