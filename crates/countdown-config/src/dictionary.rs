use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_word_list() -> String {
    "/usr/share/dict/words".to_string()
}

fn default_definition_dictionary() -> String {
    "Oxford Dictionary of English".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Look up definitions at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Word list file path or http(s) URL
    #[serde(default = "default_word_list")]
    pub word_list: String,
    /// Name of the dictionary definitions are taken from
    #[serde(default = "default_definition_dictionary")]
    pub definition_dictionary: String,
    /// JSON definition files served when the system dictionaries are unavailable
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let word_list = env::var("DICTIONARY").unwrap_or_else(|_| default_word_list());

        let definition_dictionary = env::var("DEFINITION_DICTIONARY")
            .unwrap_or_else(|_| default_definition_dictionary());

        let additional_paths = env::var("DEFINITION_FILES")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            enabled: crate::env_flag("DEFINITIONS_ENABLED").unwrap_or_else(default_enabled),
            word_list,
            definition_dictionary,
            additional_paths,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            word_list: default_word_list(),
            definition_dictionary: default_definition_dictionary(),
            additional_paths: vec![],
        }
    }
}
