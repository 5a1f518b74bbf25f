use std::sync::Arc;

use crate::error::{GenerateError, SolveError};
use crate::preprocess::normalize_letters;
use crate::search::{Matches, spawn_search};
use crate::words::WordSource;

/// Finds the full-length anagrams of a conundrum
#[derive(Debug, Clone)]
pub struct ConundrumSolver {
    target: String,
    sorted: Vec<char>,
}

impl ConundrumSolver {
    pub fn new(target: &str) -> Self {
        let target = normalize_letters(target);
        let sorted = sorted_chars(&target);
        Self { target, sorted }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn accepts(&self, word: &str) -> bool {
        let Some(initial) = word.chars().next() else {
            return false;
        };

        word.chars().count() == self.sorted.len()
            && word != self.target
            && initial.is_lowercase()
            && !word.contains('-')
            && sorted_chars(word) == self.sorted
    }

    pub fn find_anagrams<'a>(
        &self,
        words: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<String>, SolveError> {
        let found: Vec<String> = words
            .into_iter()
            .filter(|w| self.accepts(w))
            .map(String::from)
            .collect();

        if found.is_empty() {
            return Err(SolveError::NoAnagrams);
        }
        Ok(found)
    }

    /// Stream anagrams from a word source
    pub fn stream(self, source: Arc<dyn WordSource>, capacity: usize) -> Matches {
        tracing::debug!("Solving conundrum {:?}", self.target);
        spawn_search(source, capacity, move |w| self.accepts(w), SolveError::NoAnagrams)
    }
}

fn sorted_chars(word: &str) -> Vec<char> {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars
}

/// Sorted letters of `word` left after removing every letter of `phrases`,
/// or `None` when a phrase letter is missing
pub fn remainder_after(word: &str, phrases: &[String]) -> Option<String> {
    let mut remainder = sorted_chars(word);
    for letter in phrases.iter().flat_map(|p| p.chars()) {
        let index = remainder.iter().position(|&c| c == letter)?;
        remainder.remove(index);
    }
    Some(remainder.into_iter().collect())
}

/// A word that can carry the requested phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConundrumCandidate {
    pub word: String,
    /// Sorted letters still to be anagrammed
    pub remainder: String,
}

/// Builds conundrums of a given length that contain the given phrases
#[derive(Debug, Clone)]
pub struct ConundrumGenerator {
    length: usize,
    phrases: Vec<String>,
}

impl ConundrumGenerator {
    pub fn new(length: usize, phrases: Vec<String>) -> Result<Self, GenerateError> {
        let total: usize = phrases.iter().map(|p| p.chars().count()).sum();
        if total > length {
            return Err(GenerateError::PhrasesTooLong { total, length });
        }
        Ok(Self { length, phrases })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn candidates<'a>(
        &'a self,
        words: &'a [String],
    ) -> impl Iterator<Item = ConundrumCandidate> + 'a {
        words
            .iter()
            .filter(|w| w.chars().count() == self.length)
            .filter_map(|word| {
                remainder_after(word, &self.phrases).map(|remainder| ConundrumCandidate {
                    word: word.clone(),
                    remainder,
                })
            })
    }

    /// Words that complete `candidate` once the phrases are removed
    pub fn completions(&self, candidate: &ConundrumCandidate, words: &[String]) -> Vec<String> {
        let solver = ConundrumSolver::new(&candidate.remainder);
        words
            .iter()
            .filter(|w| solver.accepts(w))
            .cloned()
            .collect()
    }

    /// The conundrum as displayed: phrases followed by the completion
    pub fn parts(&self, completion: &str) -> Vec<String> {
        let mut parts = self.phrases.clone();
        parts.push(completion.to_string());
        parts
    }
}
