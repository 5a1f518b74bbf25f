pub mod conondrums;
pub mod define;
pub mod dict;
pub mod generate;
pub mod letters;
pub mod numbers;
