use serde::{Deserialize, Serialize};

use crate::constants::COMMENT_MARKER;
use crate::error::{ConferenceError, Result};

/// Settings loaded from a TOML file such as `conference.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub selection: SelectionConfig,
    pub report: ReportConfig,
}

/// How raw lines are filtered before parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Lines starting with this character are skipped
    pub comment_marker: char,

    /// Strip a single leading digit (and the whitespace after it)
    pub strip_numbering: bool,

    /// Skip lines that are empty or whitespace only
    pub skip_blank_lines: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Averages within this distance of the best are tied (0.0 = exact)
    pub tie_epsilon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Fixed number of decimals; unset prints the full float
    pub precision: Option<usize>,

    /// List every conference after the best ones
    pub show_all: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            comment_marker: COMMENT_MARKER,
            strip_numbering: true,
            skip_blank_lines: true,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConferenceError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ConferenceError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConferenceError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let eps = self.selection.tie_epsilon;
        if !eps.is_finite() || eps < 0.0 {
            return Err(ConferenceError::Config(format!(
                "tie_epsilon must be a non-negative number, got {}",
                eps
            )));
        }
        if self.input.comment_marker.is_whitespace() {
            return Err(ConferenceError::Config(
                "comment_marker must not be whitespace".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input.comment_marker, '#');
        assert!(config.input.strip_numbering);
        assert!(config.input.skip_blank_lines);
        assert_eq!(config.selection.tie_epsilon, 0.0);
        assert_eq!(config.report.precision, None);
        assert!(!config.report.show_all);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml("[report]\nprecision = 3\n").unwrap();
        assert_eq!(config.report.precision, Some(3));
        assert_eq!(config.input, InputConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_negative_epsilon_rejected() {
        let err = Config::from_toml("[selection]\ntie_epsilon = -0.5\n").unwrap_err();
        assert!(matches!(err, ConferenceError::Config(_)));
    }

    #[test]
    fn test_whitespace_marker_rejected() {
        let err = Config::from_toml("[input]\ncomment_marker = \" \"\n").unwrap_err();
        assert!(matches!(err, ConferenceError::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[report\n").unwrap_err();
        assert!(matches!(err, ConferenceError::Config(ref msg) if msg.starts_with("Failed to parse")));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("conference_core_cfg_{}.toml", std::process::id()));
        let path = path.to_string_lossy().to_string();

        let mut config = Config::default();
        config.report.precision = Some(4);
        config.selection.tie_epsilon = 1e-9;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/conference.toml").unwrap_err();
        assert!(matches!(err, ConferenceError::Config(_)));
    }
}
