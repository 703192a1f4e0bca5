use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".angexrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for template files, relative to `source_root`.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Glob patterns for files to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_includes() -> Vec<String> {
    vec!["**/*.html".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: Vec::new(),
            source_root: default_source_root(),
        }
    }
}

impl Config {
    /// Load from `.angexrc.json` in the current directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `includes` or `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json + "\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.includes, vec!["**/*.html".to_string()]);
        assert!(config.ignores.is_empty());
        assert_eq!(config.source_root, "./");
    }

    #[test]
    fn parses_partial_config() {
        let config: Config =
            serde_json::from_str(r#"{"sourceRoot": "templates", "ignores": ["**/vendor/**"]}"#)
                .unwrap();
        assert_eq!(config.source_root, "templates");
        assert_eq!(config.ignores, vec!["**/vendor/**".to_string()]);
        assert_eq!(config.includes, vec!["**/*.html".to_string()]);
    }

    #[test]
    fn rejects_invalid_glob() {
        let config = Config {
            ignores: vec!["[".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_json_round_trips() {
        let json = default_config_json().unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.includes, Config::default().includes);
    }
}
