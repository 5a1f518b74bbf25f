use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::GenerateError;

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
pub const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

pub const MIN_VOWELS: usize = 3;
pub const MIN_CONSONANTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LettersRound {
    pub vowels: usize,
    pub consonants: usize,
    /// Enforce the minimum vowel and consonant counts of the show
    pub countdown_rules: bool,
}

impl Default for LettersRound {
    fn default() -> Self {
        Self {
            vowels: 4,
            consonants: 5,
            countdown_rules: true,
        }
    }
}

impl LettersRound {
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.countdown_rules && (self.vowels < MIN_VOWELS || self.consonants < MIN_CONSONANTS) {
            return Err(GenerateError::CountdownRules {
                vowels: self.vowels,
                consonants: self.consonants,
            });
        }
        if self.vowels + self.consonants == 0 {
            return Err(GenerateError::Empty);
        }
        Ok(())
    }

    /// Draw letters (with replacement) and shuffle them
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenerateError> {
        self.validate()?;

        let mut selection: Vec<char> = Vec::with_capacity(self.vowels + self.consonants);
        for _ in 0..self.vowels {
            selection.extend(VOWELS.choose(rng));
        }
        for _ in 0..self.consonants {
            selection.extend(CONSONANTS.choose(rng));
        }
        selection.shuffle(rng);

        Ok(selection.into_iter().collect())
    }
}

pub const BIG_NUMBERS: [u64; 4] = [25, 50, 75, 100];
pub const SMALL_NUMBERS: [u64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
pub const TARGET_RANGE: RangeInclusive<u64> = 100..=1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumbersRound {
    /// How many of the numbers come from `big_numbers`
    pub big: usize,
    pub total: usize,
    pub big_numbers: Vec<u64>,
    pub small_numbers: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumbersDraw {
    pub numbers: Vec<u64>,
    pub target: u64,
}

impl Default for NumbersRound {
    fn default() -> Self {
        Self {
            big: 2,
            total: 6,
            big_numbers: BIG_NUMBERS.to_vec(),
            small_numbers: SMALL_NUMBERS.to_vec(),
        }
    }
}

impl NumbersRound {
    pub fn small(&self) -> usize {
        self.total.saturating_sub(self.big)
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.big > self.total {
            return Err(GenerateError::TooManyBig {
                big: self.big,
                total: self.total,
            });
        }
        if self.total == 0
            || (self.big > 0 && self.big_numbers.is_empty())
            || (self.small() > 0 && self.small_numbers.is_empty())
        {
            return Err(GenerateError::Empty);
        }
        Ok(())
    }

    /// Draw big numbers then small ones, each without replacement until its
    /// pool runs out, and a target in [`TARGET_RANGE`]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NumbersDraw, GenerateError> {
        self.validate()?;

        let mut numbers = choose(self.big, &self.big_numbers, rng);
        numbers.extend(choose(self.small(), &self.small_numbers, rng));
        let target = rng.random_range(TARGET_RANGE);

        Ok(NumbersDraw { numbers, target })
    }
}

fn choose<R: Rng + ?Sized>(count: usize, source: &[u64], rng: &mut R) -> Vec<u64> {
    let mut pool = Vec::new();
    let mut chosen = Vec::with_capacity(count);
    while chosen.len() < count {
        if pool.is_empty() {
            pool = source.to_vec();
        }
        let index = rng.random_range(0..pool.len());
        chosen.push(pool.swap_remove(index));
    }
    chosen
}
