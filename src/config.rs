//! Application configuration loaded from TOML.
//!
//! Every field has a default, so a missing file or an empty one gives a
//! working configuration:
//!
//! ```toml
//! [storage]
//! database_path = "kelime.sqlite3"
//! key_prefix = "@kelime_karti"
//!
//! [study]
//! default_batch_size = 5
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KelimeError, Result};
use crate::models::BatchSize;
use crate::repository::{DEFAULT_KEY_PREFIX, DocumentKeys};

fn default_database_path() -> PathBuf {
    PathBuf::from("kelime.sqlite3")
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// SQLite file holding the documents.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Prefix of the document keys (`{prefix}_cards`, `{prefix}_cards_stats`, `{prefix}_version`).
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl StorageConfig {
    pub fn document_keys(&self) -> DocumentKeys {
        DocumentKeys::with_prefix(&self.key_prefix)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StudyConfig {
    /// Batch size used when the caller does not pick one (5 or 10).
    #[serde(default)]
    pub default_batch_size: BatchSize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KelimeConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub study: StudyConfig,
}

impl KelimeConfig {
    /// Loads configuration from a TOML file. A missing file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| KelimeError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| KelimeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.key_prefix.trim().is_empty() {
            return Err(KelimeError::Config(
                "storage.key_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = KelimeConfig::default();
        assert_eq!(config.storage.database_path, PathBuf::from("kelime.sqlite3"));
        assert_eq!(config.storage.key_prefix, "@kelime_karti");
        assert_eq!(config.study.default_batch_size, BatchSize::Five);
        assert_eq!(config.storage.document_keys().cards, "@kelime_karti_cards");
    }

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(KelimeConfig::from_toml_str("").unwrap(), KelimeConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = KelimeConfig::from_toml_str(
            r#"
            [study]
            default_batch_size = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.study.default_batch_size, BatchSize::Ten);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_rejects_unsupported_batch_size() {
        let result = KelimeConfig::from_toml_str("[study]\ndefault_batch_size = 7\n");
        assert!(matches!(result, Err(KelimeError::Config(_))));
    }

    #[test]
    fn test_rejects_empty_prefix() {
        let result = KelimeConfig::from_toml_str("[storage]\nkey_prefix = \"  \"\n");
        assert!(matches!(result, Err(KelimeError::Config(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = KelimeConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(missing, KelimeConfig::default());

        let path = dir.path().join("kelime.toml");
        fs::write(&path, "[storage]\ndatabase_path = \"cards.db\"\n").unwrap();
        let config = KelimeConfig::load(&path).unwrap();
        assert_eq!(config.storage.database_path, PathBuf::from("cards.db"));
    }
}
