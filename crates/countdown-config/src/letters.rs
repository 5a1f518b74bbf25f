use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LettersConfig {
    pub min_length: usize,
    pub max_length: Option<usize>,
    /// Hide solutions the definition dictionary does not know
    pub filter_words_with_definitions: bool,
    pub vowels: usize,
    pub consonants: usize,
    /// At least 3 vowels and 4 consonants
    pub countdown_rules: bool,
}

impl LettersConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let min_length = env::var("MIN_WORD_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_length);

        Self {
            min_length,
            filter_words_with_definitions: crate::env_flag("FILTER_DEFINITIONS")
                .unwrap_or(defaults.filter_words_with_definitions),
            ..defaults
        }
    }
}

impl Default for LettersConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: None,
            filter_words_with_definitions: true,
            vowels: 4,
            consonants: 5,
            countdown_rules: true,
        }
    }
}
