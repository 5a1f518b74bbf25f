use countdown_types::RecordVersion;
use scraper::{ElementRef, Html, Selector};

use crate::dictionary::{DictionaryProvider, LexicalDictionary};
use crate::preprocess::collapse_whitespace;

/// Short definitions of solution words, taken from a named dictionary
pub struct DefinitionFinder {
    dictionary: Option<Box<dyn LexicalDictionary>>,
}

impl DefinitionFinder {
    /// Resolve `dictionary_name` (case-insensitively) once; a missing
    /// dictionary makes every lookup return `None`
    pub fn new(provider: &dyn DictionaryProvider, dictionary_name: &str) -> Self {
        let dictionary = match provider.dictionary_named(dictionary_name, true) {
            Ok(Some(dictionary)) => {
                tracing::info!("Using {} for definitions", dictionary_name);
                Some(dictionary)
            }
            Ok(None) => {
                tracing::warn!("Dictionary '{}' not found, definitions disabled", dictionary_name);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to list dictionaries: {}", e);
                None
            }
        };
        Self { dictionary }
    }

    pub fn from_dictionary(dictionary: Box<dyn LexicalDictionary>) -> Self {
        Self {
            dictionary: Some(dictionary),
        }
    }

    pub fn disabled() -> Self {
        Self { dictionary: None }
    }

    pub fn is_available(&self) -> bool {
        self.dictionary.is_some()
    }

    /// One-line definition of `word`
    pub fn define(&self, word: &str) -> Option<String> {
        let dictionary = self.dictionary.as_deref()?;

        let records = match dictionary.look_up(word) {
            Ok(records) => records?,
            Err(e) => {
                tracing::debug!("Lookup of {:?} failed: {}", word, e);
                return None;
            }
        };
        let record = records.first()?;

        record
            .data(RecordVersion::Html)
            .as_deref()
            .and_then(summarize_definition_html)
            .or_else(|| record.data(RecordVersion::Text))
    }
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn text_in(element: &ElementRef<'_>, css: &str) -> String {
    selector(css)
        .and_then(|sel| element.select(&sel).next())
        .map(|found| collapse_whitespace(found.text()))
        .unwrap_or_default()
}

/// Condense dictionary HTML to "grammar (part of speech) definition",
/// read from the first sense group
pub fn summarize_definition_html(html: &str) -> Option<String> {
    let document = Html::parse_fragment(html);
    let sense_group = document.select(&selector("span.sg")?).next()?;
    let sense = sense_group.children().find_map(ElementRef::wrap)?;

    let grammar = text_in(&sense, "span.gg");
    let part_of_speech = text_in(&sense, "span.pos");
    let definition = text_in(&sense, "span.df");

    let parts: Vec<String> = [
        grammar,
        if part_of_speech.is_empty() {
            String::new()
        } else {
            format!("({part_of_speech})")
        },
        definition,
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        return None;
    }
    Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::tests::oxford;
    use crate::memory::{MemoryDictionary, MemoryProvider};

    #[test]
    fn test_summarize_first_sense() {
        let html = r#"
            <span class="hg">bird</span>
            <span class="sg">
                <span class="se2">
                    <span class="gg">[count noun]</span>
                    <span class="pos">noun</span>
                    <span class="df">a warm-blooded
                        egg-laying vertebrate</span>
                </span>
                <span class="se2"><span class="df">second sense</span></span>
            </span>"#;
        assert_eq!(
            summarize_definition_html(html).as_deref(),
            Some("[count noun] (noun) a warm-blooded egg-laying vertebrate")
        );
    }

    #[test]
    fn test_summarize_skips_missing_parts() {
        let html = r#"<span class="sg"><span class="se2"><span class="df">a puzzle</span></span></span>"#;
        assert_eq!(summarize_definition_html(html).as_deref(), Some("a puzzle"));
    }

    #[test]
    fn test_summarize_without_sense_group() {
        assert_eq!(summarize_definition_html("<p>plain</p>"), None);
        assert_eq!(summarize_definition_html(r#"<span class="sg"></span>"#), None);
    }

    #[test]
    fn test_define_uses_html_then_text() {
        let finder = DefinitionFinder::from_dictionary(Box::new(oxford()));
        assert!(finder.is_available());
        assert_eq!(
            finder.define("bird").as_deref(),
            Some("[count noun] (noun) a warm-blooded egg-laying vertebrate animal")
        );
        assert_eq!(
            finder.define("specific").as_deref(),
            Some("specific | adjective clearly defined or identified")
        );
        assert_eq!(finder.define("qwzx"), None);
    }

    #[test]
    fn test_finder_resolves_name_case_insensitively() {
        let mut provider = MemoryProvider::new();
        provider.add(oxford());

        let finder = DefinitionFinder::new(&provider, "OXFORD DICTIONARY OF ENGLISH");
        assert!(finder.is_available());

        let missing = DefinitionFinder::new(&provider, "New Oxford American Dictionary");
        assert!(!missing.is_available());
        assert_eq!(missing.define("bird"), None);
    }

    #[test]
    fn test_record_without_any_content() {
        let dictionary = MemoryDictionary::from_json(
            r#"{ "name": "Sparse", "entries": [{ "headword": "wren" }] }"#,
        )
        .unwrap();
        let finder = DefinitionFinder::from_dictionary(Box::new(dictionary));
        assert_eq!(finder.define("wren"), None);
        assert_eq!(DefinitionFinder::disabled().define("wren"), None);
    }
}
