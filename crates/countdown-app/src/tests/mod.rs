mod cli_tests;
mod command_tests;

use countdown_config::Config;
use countdown_core::{MemoryDictionary, MemoryProvider};

use crate::state::AppState;

pub(crate) const DICTIONARY_JSON: &str = r#"{
    "name": "Oxford Dictionary of English",
    "short_name": "Oxford",
    "entries": [
        {
            "headword": "specific",
            "anchor": "m_en_gbus0979290",
            "text": "specific | adjective clearly defined or identified",
            "html": "<span class=\"sg\"><span class=\"se2\"><span class=\"pos\">adjective</span><span class=\"df\">clearly defined or identified</span></span></span>"
        },
        { "headword": "spice", "text": "spice | noun an aromatic vegetable substance" },
        { "headword": "epic", "text": "epic | noun a long poem" }
    ]
}"#;

pub(crate) fn test_state() -> AppState {
    let mut provider = MemoryProvider::new();
    provider.add(MemoryDictionary::from_json(DICTIONARY_JSON).unwrap());
    AppState::with_provider(Config::default(), Box::new(provider))
}
