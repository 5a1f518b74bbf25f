use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use countdown_config::Config;
use countdown_types::RecordVersion;

#[derive(Debug, Parser)]
#[command(
    name = "countdown",
    version,
    about = "A solver utility for the Countdown letters and numbers games"
)]
pub struct Cli {
    /// JSON config file; environment variables are used when absent
    #[arg(long, global = true, env = "COUNTDOWN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            None => Ok(Config::new()),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Finds words from the given letters
    Letters(LettersArgs),

    /// Finds conondrums from the given letters
    Conondrums(ConondrumsArgs),

    /// Tries to reach the target combining the numbers with basic operations
    Numbers(NumbersArgs),

    /// Generates letters rounds, numbers rounds and conondrums
    #[command(subcommand)]
    Generate(GenerateCommand),

    /// Prints a short definition of a word
    Define(DefineArgs),

    /// Inspects the system dictionaries
    #[command(subcommand)]
    Dict(DictCommand),
}

#[derive(Debug, Clone, Args)]
pub struct WordListArgs {
    /// Word list path or http(s) URL
    #[arg(short, long)]
    pub dictionary: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct DefinitionArgs {
    /// Only show words that have a definition
    #[arg(long, action = ArgAction::Set)]
    pub filter_words_with_definitions: Option<bool>,
}

#[derive(Debug, Args)]
pub struct LettersArgs {
    #[command(flatten)]
    pub words: WordListArgs,

    #[command(flatten)]
    pub definitions: DefinitionArgs,

    /// Minimum length
    #[arg(long)]
    pub min: Option<usize>,

    /// Maximum length
    #[arg(long)]
    pub max: Option<usize>,

    pub letters: String,
}

#[derive(Debug, Args)]
pub struct ConondrumsArgs {
    #[command(flatten)]
    pub words: WordListArgs,

    pub letters: String,
}

#[derive(Debug, Args)]
pub struct NumbersArgs {
    /// Numbers separated by whitespace
    #[arg(required = true)]
    pub numbers: Vec<u64>,

    #[arg(short, long)]
    pub target: u64,

    /// Try nearby targets when the target cannot be reached
    #[arg(short, long, action = ArgAction::Set)]
    pub broaden_target: Option<bool>,

    /// Operators to use, comma separated
    #[arg(short, long)]
    pub operators: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Generates a letters round
    Letters(GenerateLettersArgs),

    /// Generates conondrums containing the given phrases
    Conondrums(GenerateConondrumsArgs),

    /// Generates a numbers round
    Numbers(GenerateNumbersArgs),
}

#[derive(Debug, Args)]
pub struct GenerateLettersArgs {
    #[command(flatten)]
    pub words: WordListArgs,

    #[command(flatten)]
    pub definitions: DefinitionArgs,

    /// The number of vowels to choose
    #[arg(long)]
    pub vowels: Option<usize>,

    /// The number of consonants to choose
    #[arg(long)]
    pub consonants: Option<usize>,

    /// Require at least 3 vowels and 4 consonants
    #[arg(long, action = ArgAction::Set)]
    pub countdown_rules: Option<bool>,

    /// Show solution
    #[arg(long, action = ArgAction::Set, default_value_t = false)]
    pub solve: bool,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct GenerateConondrumsArgs {
    #[command(flatten)]
    pub words: WordListArgs,

    #[command(flatten)]
    pub definitions: DefinitionArgs,

    /// Show solution
    #[arg(long, action = ArgAction::Set)]
    pub solve: Option<bool>,

    /// Length of the conondrum
    #[arg(long)]
    pub length: Option<usize>,

    /// Phrases to contain
    #[arg(long, num_args = 0..)]
    pub phrases: Vec<String>,
}

#[derive(Debug, Args)]
pub struct GenerateNumbersArgs {
    /// The number of big numbers to choose
    #[arg(long)]
    pub big: Option<usize>,

    /// Total numbers to choose
    #[arg(long)]
    pub total: Option<usize>,

    /// All the big numbers, comma separated
    #[arg(long, value_delimiter = ',')]
    pub big_numbers: Option<Vec<u64>>,

    /// All the small numbers, comma separated
    #[arg(long, value_delimiter = ',')]
    pub small_numbers: Option<Vec<u64>>,

    /// Show solution
    #[arg(long, action = ArgAction::Set, default_value_t = false)]
    pub solve: bool,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct DefineArgs {
    /// Dictionary name, defaults to the configured definition dictionary
    #[arg(long = "in")]
    pub dictionary: Option<String>,

    /// Use the user's default dictionaries instead of a named one
    #[arg(long, conflicts_with = "dictionary")]
    pub default: bool,

    pub word: String,
}

#[derive(Debug, Subcommand)]
pub enum DictCommand {
    /// Lists the available dictionaries
    List {
        #[arg(long)]
        json: bool,
    },

    /// Looks text up in a dictionary
    Lookup(LookupArgs),

    /// Loads a dictionary from a path
    Open {
        path: PathBuf,

        /// Text to look up in the opened dictionary
        #[arg(long)]
        lookup: Option<String>,

        #[arg(long, default_value = "text")]
        format: RecordVersion,
    },
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Dictionary name, defaults to the configured definition dictionary
    #[arg(long = "in")]
    pub dictionary: Option<String>,

    /// Match the dictionary name exactly
    #[arg(long)]
    pub exact: bool,

    /// Record content format
    #[arg(long, default_value = "text")]
    pub format: RecordVersion,

    /// Include the definition markup of each record
    #[arg(long)]
    pub markup: bool,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,

    pub text: String,
}
