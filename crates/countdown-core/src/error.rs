#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Dictionary services are not available on {0}")]
    Unsupported(&'static str),

    #[error("Dictionary not found: {0}")]
    NotFound(String),

    #[error("Failed to create dictionary from {0}")]
    CreateFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("Invalid url {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("No words found with these letters")]
    NoWords,

    #[error("No conundrum found")]
    NoAnagrams,

    #[error("Word list error: {0}")]
    WordList(#[from] WordListError),
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(
        "In Countdown you must choose at least 3 vowels and at least 4 consonants, got {vowels} and {consonants}"
    )]
    CountdownRules { vowels: usize, consonants: usize },

    #[error("Lengths of phrases ({total}) must not exceed the target length {length}")]
    PhrasesTooLong { total: usize, length: usize },

    #[error("Nothing to choose from")]
    Empty,

    #[error("The {big} big numbers must not exceed the total of {total}")]
    TooManyBig { big: usize, total: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum NumbersError {
    #[error("All numbers should be positive integers")]
    NotPositive,

    #[error("There should be at least one operation to work with")]
    NoOperations,

    #[error("Unsupported operator {0}")]
    UnsupportedOperator(String),

    #[error("Cannot be solved")]
    Unsolvable,
}
