use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_RATES_PATH: &str = "./testdata/mockResponse.json";
pub const DEFAULT_FROM: &str = "USD";
pub const DEFAULT_TO: &str = "VND";

fn default_from() -> String {
    DEFAULT_FROM.to_string()
}

fn default_to() -> String {
    DEFAULT_TO.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub rates_path: Option<String>,
    #[serde(default = "default_from")]
    pub from: String,
    #[serde(default = "default_to")]
    pub to: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rates_path: None,
            from: default_from(),
            to: default_to(),
        }
    }
}

impl AppConfig {
    /// Loads the config at the default location, falling back to built-in
    /// defaults when no file has been set up.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "curconv", "curconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn rates_path(&self) -> PathBuf {
        PathBuf::from(self.rates_path.as_deref().unwrap_or(DEFAULT_RATES_PATH))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        // An empty document means "all defaults"
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
rates_path: "/tmp/rates.json"
from: "EUR"
to: "JPY"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.rates_path.as_deref(), Some("/tmp/rates.json"));
        assert_eq!(config.rates_path(), PathBuf::from("/tmp/rates.json"));
        assert_eq!(config.from, "EUR");
        assert_eq!(config.to, "JPY");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("to: \"GBP\"\n").unwrap();
        assert!(config.rates_path.is_none());
        assert_eq!(config.rates_path(), PathBuf::from(DEFAULT_RATES_PATH));
        assert_eq!(config.from, "USD");
        assert_eq!(config.to, "GBP");
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(file.path(), "from: \"CAD\"\n")?;

        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(config.from, "CAD");
        assert_eq!(config.to, DEFAULT_TO);
        Ok(())
    }

    #[test]
    fn test_load_empty_file_is_default() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        assert_eq!(AppConfig::load_from_path(file.path())?, AppConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_invalid_yaml_fails() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(file.path(), "from: [unclosed\n")?;

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }
}
