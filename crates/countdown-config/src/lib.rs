use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::conundrum::ConundrumConfig;
use self::dictionary::DictionaryConfig;
use self::letters::LettersConfig;
use self::numbers::NumbersConfig;

pub mod conundrum;
pub mod dictionary;
pub mod letters;
pub mod numbers;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub letters: LettersConfig,
    pub conundrum: ConundrumConfig,
    pub numbers: NumbersConfig,

    /// Capacity of the channel solvers stream matches through
    pub channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(256);

        Config {
            dictionary: DictionaryConfig::new(),
            letters: LettersConfig::new(),
            conundrum: ConundrumConfig::default(),
            numbers: NumbersConfig::new(),

            channel_capacity,
        }
    }

    /// Load a config from a JSON file, missing fields fall back to defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            letters: LettersConfig::default(),
            conundrum: ConundrumConfig::default(),
            numbers: NumbersConfig::default(),
            channel_capacity: 256,
        }
    }
}

pub(crate) fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "letters": { "min_length": 5 } }"#).unwrap();
        assert_eq!(config.letters.min_length, 5);
        assert!(config.letters.filter_words_with_definitions);
        assert_eq!(config.conundrum.length, 9);
        assert_eq!(config.channel_capacity, 256);
        assert_eq!(config.dictionary.word_list, "/usr/share/dict/words");
    }

    #[test]
    fn test_numbers_section() {
        let config: Config =
            serde_json::from_str(r#"{ "numbers": { "big": 4, "broaden_target": false } }"#)
                .unwrap();
        assert_eq!(config.numbers.big, 4);
        assert_eq!(config.numbers.total, 6);
        assert!(!config.numbers.broaden_target);
        assert_eq!(config.numbers.broaden_range, 10);
        assert_eq!(config.numbers.small_numbers, (1..=10).collect::<Vec<u64>>());
        assert_eq!(config.numbers.operators, "+,-,*,/");
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "countdown-config-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{ "dictionary": { "definition_dictionary": "New Oxford American Dictionary" } }"#,
        )
        .unwrap();

        let config = Config::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.dictionary.definition_dictionary,
            "New Oxford American Dictionary"
        );
        assert!(config.dictionary.additional_paths.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::from_json_file(Path::new("/nonexistent/countdown.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
