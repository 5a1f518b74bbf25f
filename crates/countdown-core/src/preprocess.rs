use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default term preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Collapse runs of whitespace and fold case
        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Headword and search-term normalization
pub struct TermPreprocessor;
impl Preprocessor for TermPreprocessor {}

/// Keeps only the letters of a Countdown selection
pub struct LettersPreprocessor;
impl Preprocessor for LettersPreprocessor {
    fn process(&self, text: &str) -> String {
        text.nfkc()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

pub fn normalize_term(text: &str) -> String {
    TermPreprocessor.process(text)
}

pub fn normalize_letters(text: &str) -> String {
    LettersPreprocessor.process(text)
}

/// Collapses whitespace the way rendered text reads
pub fn collapse_whitespace<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let joined: String = parts.into_iter().collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
