use countdown_config::Config;
use countdown_core::{
    DefinitionFinder, DictionaryError, DictionaryProvider, MemoryProvider, WordList,
};

use crate::cli::{DefinitionArgs, WordListArgs};

pub struct AppState {
    pub config: Config,
    pub provider: Box<dyn DictionaryProvider>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider = resolve_provider(&config);
        Self { config, provider }
    }

    pub fn with_provider(config: Config, provider: Box<dyn DictionaryProvider>) -> Self {
        Self { config, provider }
    }

    pub fn word_list(&self, args: &WordListArgs) -> anyhow::Result<WordList> {
        let locator = args
            .dictionary
            .as_deref()
            .unwrap_or(&self.config.dictionary.word_list);
        Ok(WordList::parse(locator)?)
    }

    pub fn filter_definitions(&self, args: &DefinitionArgs) -> bool {
        args.filter_words_with_definitions
            .unwrap_or(self.config.letters.filter_words_with_definitions)
    }

    /// Definition finder for the configured dictionary
    pub fn definitions(&self) -> DefinitionFinder {
        if !self.config.dictionary.enabled {
            return DefinitionFinder::disabled();
        }
        DefinitionFinder::new(
            self.provider.as_ref(),
            &self.config.dictionary.definition_dictionary,
        )
    }
}

/// Dictionary files from the config take precedence over the system dictionaries
fn resolve_provider(config: &Config) -> Box<dyn DictionaryProvider> {
    let paths = &config.dictionary.additional_paths;
    if !paths.is_empty() {
        return Box::new(MemoryProvider::load_files(paths));
    }

    match countdown_dcs::system_provider() {
        Ok(provider) => provider,
        Err(DictionaryError::Unsupported(os)) => {
            tracing::info!("No system dictionaries on {}", os);
            Box::new(MemoryProvider::new())
        }
        Err(e) => {
            tracing::warn!("System dictionaries unavailable: {}", e);
            Box::new(MemoryProvider::new())
        }
    }
}
