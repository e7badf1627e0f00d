//! Driver configuration. Every field has a default so an empty or partial TOML file is valid.

use crate::error::Result;
use log::LevelFilter;
use std::fs;
use std::path::Path;

pub const DEFAULT_SEEDS: [i32; 9] = [16, 789, 300, 1, 2, 88, 50, 26, 24];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keys inserted into each tree, in order, before the query runs.
    pub seeds: Vec<i32>,
    #[serde(with = "level_filter")]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seeds: DEFAULT_SEEDS.to_vec(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Examples
    /// ```
    /// use search_trees::config::Config;
    ///
    /// let config = Config::from_toml("seeds = [3, 1, 2]\nlog_level = \"debug\"").unwrap();
    /// assert_eq!(config.seeds, vec![3, 1, 2]);
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

mod level_filter {
    use log::LevelFilter;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::Serializer;

    pub fn serialize<S>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&level.to_string().to_lowercase())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_SEEDS};
    use log::LevelFilter;

    #[test]
    fn test_empty_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.seeds, DEFAULT_SEEDS.to_vec());
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_partial() {
        let config = Config::from_toml("log_level = \"trace\"").unwrap();
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.seeds, DEFAULT_SEEDS.to_vec());
    }

    #[test]
    fn test_invalid_level() {
        assert!(Config::from_toml("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_invalid_seeds() {
        assert!(Config::from_toml("seeds = [\"a\"]").is_err());
    }
}
