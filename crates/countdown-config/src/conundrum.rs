use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConundrumConfig {
    /// Length of generated conundrums
    pub length: usize,
    pub show_solution: bool,
}

impl Default for ConundrumConfig {
    fn default() -> Self {
        Self {
            length: 9,
            show_solution: true,
        }
    }
}
