use crate::error::{CalczError, Result};
use crate::model::{OutputFormat, OverflowPolicy};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the platform config directory when set.
pub const CONFIG_DIR_ENV: &str = "CALCZ_CONFIG_DIR";

/// Configuration for calcz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalczConfig {
    /// What to do when a result does not fit the operand type
    #[serde(default)]
    pub overflow: OverflowPolicy,

    /// How results are printed
    #[serde(default)]
    pub output: OutputFormat,
}

impl CalczConfig {
    /// Resolves the config directory: `$CALCZ_CONFIG_DIR`, then the platform default.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "calcz", "calcz")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CalczError::Config("Could not determine config dir".to_string()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CalczConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Command-line flags win over values from the file.
    pub fn merge_overrides(
        mut self,
        overflow: Option<OverflowPolicy>,
        output: Option<OutputFormat>,
    ) -> Self {
        if let Some(overflow) = overflow {
            self.overflow = overflow;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = CalczConfig::default();
        assert_eq!(config.overflow, OverflowPolicy::Checked);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = CalczConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, CalczConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("calcz");

        let config = CalczConfig {
            overflow: OverflowPolicy::Wrapping,
            output: OutputFormat::Json,
        };
        config.save(&nested).unwrap();

        let loaded = CalczConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "overflow": "saturating" }"#,
        )
        .unwrap();

        let loaded = CalczConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.overflow, OverflowPolicy::Saturating);
        assert_eq!(loaded.output, OutputFormat::Text);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = CalczConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, CalczError::Serialization(_)));
    }

    #[test]
    fn test_flags_override_file() {
        let config = CalczConfig {
            overflow: OverflowPolicy::Wrapping,
            output: OutputFormat::Json,
        };

        let merged = config
            .clone()
            .merge_overrides(Some(OverflowPolicy::Saturating), None);
        assert_eq!(merged.overflow, OverflowPolicy::Saturating);
        assert_eq!(merged.output, OutputFormat::Json);

        assert_eq!(config.clone().merge_overrides(None, None), config);
    }
}
