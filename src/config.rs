//! Run configuration, loaded from an optional TOML file

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analyzer::matcher::MatchStrategy;
use crate::analyzer::segment::Strategy;
use crate::error::{HashtagError, Result};
use crate::loader::ReadPolicy;
use crate::render::ReportFormat;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_TITLE: &str = "Most Common Words in Test Documents";

/// Configuration of one run
///
/// Every field is optional in the file; missing ones take the defaults.
///
/// ```toml
/// top_n = 5
/// strategy = "unicode"
/// matcher = "rescan"
/// format = "json"
/// output = "words.json"
/// read_policy = "skip"
/// title = "Interview transcripts"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub top_n: usize,
    pub strategy: Strategy,
    pub matcher: MatchStrategy,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub read_policy: ReadPolicy,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            strategy: Strategy::default(),
            matcher: MatchStrategy::default(),
            format: ReportFormat::default(),
            output: None,
            read_policy: ReadPolicy::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| HashtagError::Config {
            message: format!("cannot read `{}`: {err}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(HashtagError::invalid_argument(
                "top_n must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Set `top_n` from a signed value, rejecting zero and negatives
    pub fn set_top_n(&mut self, n: i64) -> Result<()> {
        self.top_n = usize::try_from(n)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                HashtagError::invalid_argument(format!(
                    "number of words must be greater than zero, got {n}"
                ))
            })?;
        Ok(())
    }

    /// Where the report is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_path(), PathBuf::from("most_common_words.html"));
    }

    #[test]
    fn parses_every_field() {
        let config = Config::from_toml_str(
            r#"
            top_n = 5
            strategy = "unicode"
            matcher = "rescan"
            format = "json"
            read_policy = "skip"
            title = "Transcripts"
            "#,
        )
        .unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.strategy, Strategy::Unicode);
        assert_eq!(config.matcher, MatchStrategy::Rescan);
        assert_eq!(config.read_policy, ReadPolicy::Skip);
        assert_eq!(config.output_path(), PathBuf::from("most_common_words.json"));
        assert_eq!(config.title, "Transcripts");
    }

    #[test]
    fn rejects_zero_and_unknown_keys() {
        assert!(matches!(
            Config::from_toml_str("top_n = 0"),
            Err(HashtagError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(HashtagError::Config { .. })
        ));
    }

    #[test]
    fn set_top_n_rejects_non_positive() {
        let mut config = Config::default();
        assert!(config.set_top_n(-3).is_err());
        assert!(config.set_top_n(0).is_err());
        config.set_top_n(7).unwrap();
        assert_eq!(config.top_n, 7);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, HashtagError::Config { .. }));
    }
}
