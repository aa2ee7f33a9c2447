//! Configuration file support for kitlens.
//!
//! Loads optional `.kitlens/config.toml` from the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::mapper::MAX_SUGGESTIONS;
use crate::snippets::DEFAULT_PACKAGE;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KitlensConfig {
    pub catalog: CatalogConfig,
    pub mapping: MappingConfig,
    pub snippets: SnippetConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of catalog components, relative to the config root
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Upper bound on suggestions per mapping call (clamped to 1..=10)
    pub max_suggestions: usize,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// Import source used in generated code
    pub package: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl KitlensConfig {
    /// Load config from `.kitlens/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".kitlens").join("config.toml");
        let mut config = Self::load_from_path(&config_path);
        if let Some(path) = config.catalog.path.take() {
            config.catalog.path = Some(if path.is_relative() { root.join(path) } else { path });
        }
        config
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Suggestion limit after clamping to the supported range.
    pub fn max_suggestions(&self) -> usize {
        self.mapping.max_suggestions.clamp(1, MAX_SUGGESTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) {
        let dir = root.join(".kitlens");
        std::fs::create_dir_all(&dir).expect("create .kitlens");
        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(file, "{body}").expect("write config");
    }

    #[test]
    fn test_default_config() {
        let config = KitlensConfig::default();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.max_suggestions(), 10);
        assert_eq!(config.snippets.package, "@design-system/react");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        assert_eq!(KitlensConfig::load(temp.path()), KitlensConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            temp.path(),
            r#"
[catalog]
path = "design/catalog.json"

[mapping]
max_suggestions = 5

[snippets]
package = "@acme/ui"
"#,
        );

        let config = KitlensConfig::load(temp.path());
        assert_eq!(
            config.catalog.path,
            Some(temp.path().join("design/catalog.json"))
        );
        assert_eq!(config.max_suggestions(), 5);
        assert_eq!(config.snippets.package, "@acme/ui");
    }

    #[test]
    fn test_partial_config_keeps_section_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "[mapping]\nmax_suggestions = 40\n");

        let config = KitlensConfig::load(temp.path());
        assert_eq!(config.mapping.max_suggestions, 40);
        assert_eq!(config.max_suggestions(), 10, "clamped to the upper bound");
        assert_eq!(config.snippets.package, DEFAULT_PACKAGE);
    }

    #[test]
    fn test_zero_limit_clamps_to_one() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "[mapping]\nmax_suggestions = 0\n");
        assert_eq!(KitlensConfig::load(temp.path()).max_suggestions(), 1);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "this is not valid toml [[[");
        assert_eq!(KitlensConfig::load(temp.path()), KitlensConfig::default());
    }
}
