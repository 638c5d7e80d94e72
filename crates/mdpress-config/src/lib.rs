use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "mdpress.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout configuration. All paths are interpreted relative to the
/// project root unless absolute after shell expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
        }
    }
}

impl SiteConfig {
    /// Loads the config file at `config_path`, returning `Ok(None)` when no
    /// file exists there. Tilde and shell variables in the configured paths
    /// are expanded.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.content_dir = Self::expand_path(&config.content_dir).unwrap_or(config.content_dir);
        config.static_dir = Self::expand_path(&config.static_dir).unwrap_or(config.static_dir);
        config.template_path =
            Self::expand_path(&config.template_path).unwrap_or(config.template_path);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);

        Ok(Some(config))
    }

    /// Loads `mdpress.toml` from the project root, if present.
    pub fn load(root: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(root.join(CONFIG_FILE))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_is_none() {
        let root = TempDir::new().unwrap();
        let config = SiteConfig::load(root.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn defaults_use_conventional_paths() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.template_path, PathBuf::from("template.html"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        let config_path = root.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "content_dir = \"pages\"\n").unwrap();

        let config = SiteConfig::load(root.path()).unwrap().unwrap();
        assert_eq!(config.content_dir, PathBuf::from("pages"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
    }

    #[test]
    fn serialization_roundtrip() {
        let original = SiteConfig {
            content_dir: PathBuf::from("notes"),
            static_dir: PathBuf::from("assets"),
            template_path: PathBuf::from("layout.html"),
            output_dir: PathBuf::from("dist"),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: SiteConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn save_then_load_round_trips() {
        let root = TempDir::new().unwrap();
        let config_path = root.path().join("nested/dir/mdpress.toml");

        let config = SiteConfig::default();
        config.save_to_path(&config_path).unwrap();

        let loaded = SiteConfig::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn tilde_paths_are_expanded() {
        let root = TempDir::new().unwrap();
        let config_path = root.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "output_dir = \"~/site-out\"\n").unwrap();

        let config = SiteConfig::load(root.path()).unwrap().unwrap();
        assert!(!config.output_dir.to_string_lossy().starts_with('~'));
        assert!(config.output_dir.to_string_lossy().ends_with("site-out"));
    }

    #[test]
    fn unparseable_config_is_an_error() {
        let root = TempDir::new().unwrap();
        let config_path = root.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "content_dir = [not toml").unwrap();

        let result = SiteConfig::load(root.path());
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
