use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::SolveError;
use crate::preprocess::normalize_letters;
use crate::search::{Matches, spawn_search};
use crate::words::WordSource;

pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Finds the words that can be spelled from a Countdown letters selection
#[derive(Debug, Clone)]
pub struct LetterSolver {
    letters: String,
    counts: HashMap<char, usize>,
    min: usize,
    max: usize,
}

impl LetterSolver {
    pub fn new(letters: &str) -> Self {
        Self::with_bounds(letters, DEFAULT_MIN_LENGTH, None)
    }

    /// `max` defaults to the number of letters
    pub fn with_bounds(letters: &str, min: usize, max: Option<usize>) -> Self {
        let letters = normalize_letters(letters);
        let counts = character_map(&letters);
        let max = max.unwrap_or_else(|| letters.chars().count());

        Self {
            letters,
            counts,
            min,
            max,
        }
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn accepts(&self, word: &str) -> bool {
        let Some(initial) = word.chars().next() else {
            return false;
        };
        let length = word.chars().count();

        if !initial.is_lowercase() || length < self.min || length > self.max || word.contains('-') {
            return false;
        }

        character_map(word)
            .into_iter()
            .all(|(ch, count)| self.counts.get(&ch).is_some_and(|&available| count <= available))
    }

    pub fn find_words<'a>(
        &self,
        words: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<String>, SolveError> {
        let found: Vec<String> = words
            .into_iter()
            .filter(|w| self.accepts(w))
            .map(String::from)
            .collect();

        if found.is_empty() {
            return Err(SolveError::NoWords);
        }
        Ok(found)
    }

    /// Stream matches from a word source
    pub fn stream(self, source: Arc<dyn WordSource>, capacity: usize) -> Matches {
        tracing::debug!("Solving letters {:?} ({}..={})", self.letters, self.min, self.max);
        spawn_search(source, capacity, move |w| self.accepts(w), SolveError::NoWords)
    }
}

fn character_map(word: &str) -> HashMap<char, usize> {
    let mut map = HashMap::new();
    for ch in word.chars().flat_map(char::to_lowercase) {
        *map.entry(ch).or_insert(0) += 1;
    }
    map
}

/// Solutions grouped by word length
#[derive(Debug, Clone, Default)]
pub struct Solutions {
    by_length: BTreeMap<usize, Vec<String>>,
}

impl Solutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: String) {
        self.by_length
            .entry(word.chars().count())
            .or_default()
            .push(word);
    }

    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// Longest groups first. Stops before a group once at least 3 words
    /// spread over at least 2 groups have been taken.
    pub fn best(&self) -> Vec<(usize, &[String])> {
        let mut sections = Vec::new();
        let mut shown_words = 0;

        for (&length, words) in self.by_length.iter().rev() {
            if shown_words >= 3 && sections.len() >= 2 {
                break;
            }
            sections.push((length, words.as_slice()));
            shown_words += words.len();
        }

        sections
    }
}

impl Extend<String> for Solutions {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl FromIterator<String> for Solutions {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut solutions = Self::new();
        solutions.extend(iter);
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::collect_matches;
    use crate::words::WordList;

    #[test]
    fn test_finds_specific() {
        let solver = LetterSolver::new("gicpisefc");
        let words = solver.find_words(["test", "specific"]).unwrap();
        assert_eq!(words, vec!["specific"]);
    }

    #[test]
    fn test_letter_counts_are_respected() {
        let solver = LetterSolver::new("abcdeeflo");
        assert!(solver.accepts("bead"));
        assert!(!solver.accepts("feeble"));
        assert!(solver.accepts("fable"));
    }

    #[test]
    fn test_rules() {
        let solver = LetterSolver::new("ABCDEFGHI");
        // Proper nouns, short words and hyphenated words are skipped
        assert!(!solver.accepts("Bead"));
        assert!(!solver.accepts("bed"));
        assert!(!solver.accepts("bad-egg"));
        assert!(!solver.accepts(""));
        assert!(solver.accepts("chafed"));
    }

    #[test]
    fn test_bounds() {
        let solver = LetterSolver::with_bounds("abcdefghi", 3, Some(4));
        assert!(solver.accepts("bed"));
        assert!(solver.accepts("bead"));
        assert!(!solver.accepts("faced"));
    }

    #[test]
    fn test_no_words() {
        let solver = LetterSolver::new("xyzxyzxyz");
        assert!(matches!(
            solver.find_words(["bird"]),
            Err(SolveError::NoWords)
        ));
    }

    #[tokio::test]
    async fn test_stream() {
        let source = Arc::new(WordList::inline(["test", "specific", "spice", "Epic"]));
        let matches = LetterSolver::new("gicpisefc").stream(source, 8);
        let words = collect_matches(matches).await.unwrap();
        assert_eq!(words, vec!["specific", "spice"]);
    }

    #[tokio::test]
    async fn test_stream_survives_invalid_utf8() {
        let path =
            std::env::temp_dir().join(format!("countdown-letters-{}.txt", std::process::id()));
        tokio::fs::write(&path, b"specific\ncaf\xe9\nspice\n").await.unwrap();

        let source = Arc::new(WordList::File(path.clone()));
        let matches = LetterSolver::new("gicpisefc").stream(source, 8);
        let words = collect_matches(matches).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(words.unwrap(), vec!["specific", "spice"]);
    }

    #[test]
    fn test_best_solutions() {
        let solutions: Solutions = ["spice", "epic", "pies", "specific", "spies"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(solutions.len(), 5);

        let best = solutions.best();
        let lengths: Vec<usize> = best.iter().map(|(len, _)| *len).collect();
        // 8 (1 word), 5 (2 words) reach 3 words over 2 groups
        assert_eq!(lengths, vec![8, 5]);
        assert_eq!(best[1].1, ["spice".to_string(), "spies".to_string()]);
    }

    #[test]
    fn test_best_keeps_going_until_three_words() {
        let solutions: Solutions = ["abcdefgh", "abcdefg", "abcdef", "abcde"]
            .into_iter()
            .map(String::from)
            .collect();
        let lengths: Vec<usize> = solutions.best().iter().map(|(len, _)| *len).collect();
        assert_eq!(lengths, vec![8, 7, 6]);
        assert!(Solutions::new().best().is_empty());
    }
}
