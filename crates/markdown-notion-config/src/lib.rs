use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

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

/// Settings for turning markdown into blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Language given to code blocks that have no tag.
    pub default_code_language: String,
    /// Longest text run in the block output, in chars.
    pub max_text_length: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_code_language: "plain text".into(),
            max_text_length: 2000,
        }
    }
}

/// Settings for page property output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertiesConfig {
    /// Time zone attached to date properties.
    pub time_zone: String,
    /// Title and rich text properties are cut to this many chars.
    pub max_text_length: usize,
    /// Property receiving the page title.
    pub title_property: String,
    /// Property receiving the page date.
    pub date_property: String,
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            time_zone: "Asia/Shanghai".into(),
            max_text_length: 1024,
            title_property: "title".into(),
            date_property: "Date".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub conversion: ConversionConfig,
    pub properties: PropertiesConfig,
}

impl Config {
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

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
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

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-notion");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(content: &str) -> Config {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_config_path_is_expanded() {
        let config_path = Config::config_path();

        assert!(!config_path.to_string_lossy().starts_with('~'));
        assert_eq!(config_path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        assert!(config_path.parent().is_some_and(|dir| dir.ends_with("markdown-notion")));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.conversion.default_code_language, "plain text");
        assert_eq!(config.conversion.max_text_length, 2000);
        assert_eq!(config.properties.time_zone, "Asia/Shanghai");
        assert_eq!(config.properties.max_text_length, 1024);
        assert_eq!(config.properties.title_property, "title");
        assert_eq!(config.properties.date_property, "Date");
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse(""), Config::default());
    }

    #[test]
    fn test_conversion_section_keeps_other_defaults() {
        let config = parse(
            r#"
[conversion]
max_text_length = 100
"#,
        );

        assert_eq!(config.conversion.max_text_length, 100);
        assert_eq!(config.conversion.default_code_language, "plain text");
        assert_eq!(config.properties, PropertiesConfig::default());
    }

    #[test]
    fn test_properties_section_keeps_other_defaults() {
        let config = parse(
            r#"
[properties]
time_zone = "UTC"
date_property = "Due"
"#,
        );

        assert_eq!(config.properties.time_zone, "UTC");
        assert_eq!(config.properties.date_property, "Due");
        assert_eq!(config.properties.max_text_length, 1024);
        assert_eq!(config.properties.title_property, "title");
        assert_eq!(config.conversion, ConversionConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = parse(
            r#"
[conversion]
theme = "dark"
"#,
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_wrong_value_type_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[conversion]\nmax_text_length = \"long\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_missing_file_is_none_and_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("markdown-notion").join("config.toml");

        assert!(Config::load_from_path(&config_file).unwrap().is_none());
        assert!(!config_file.parent().is_some_and(Path::exists));
    }

    #[test]
    fn test_saved_file_has_both_sections() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.conversion.default_code_language = "rust".into();
        config.properties.max_text_length = 50;

        config.save_to_path(&config_file).unwrap();

        let written = std::fs::read_to_string(&config_file).unwrap();
        assert!(written.contains("[conversion]"));
        assert!(written.contains("[properties]"));
        assert_eq!(Config::load_from_path(&config_file).unwrap(), Some(config));
    }
}
