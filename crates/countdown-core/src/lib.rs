pub mod conundrum;
pub mod definition;
pub mod dictionary;
pub mod error;
pub mod generator;
pub mod letters;
pub mod memory;
pub mod numbers;
pub mod preprocess;
pub mod search;
pub mod words;

pub use definition::DefinitionFinder;
pub use dictionary::{DictionaryProvider, DictionaryRecord, LexicalDictionary};
pub use error::{DictionaryError, GenerateError, NumbersError, SolveError, WordListError};
pub use memory::{MemoryDictionary, MemoryProvider};
pub use words::{WordList, WordSource};
