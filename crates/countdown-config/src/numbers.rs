use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NumbersConfig {
    /// Big numbers in a generated round
    pub big: usize,
    /// All numbers in a generated round
    pub total: usize,
    pub big_numbers: Vec<u64>,
    pub small_numbers: Vec<u64>,
    /// Try nearby targets when the exact one cannot be reached
    pub broaden_target: bool,
    /// How far from the target to look when broadening
    pub broaden_range: u64,
    /// Comma separated operator signs
    pub operators: String,
}

impl NumbersConfig {
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            broaden_target: crate::env_flag("BROADEN_TARGET").unwrap_or(defaults.broaden_target),
            ..defaults
        }
    }
}

impl Default for NumbersConfig {
    fn default() -> Self {
        Self {
            big: 2,
            total: 6,
            big_numbers: vec![25, 50, 75, 100],
            small_numbers: (1..=10).collect(),
            broaden_target: true,
            broaden_range: 10,
            operators: "+,-,*,/".to_string(),
        }
    }
}
