use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod printer;
mod state;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command, GenerateCommand};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Results go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let state = AppState::new(config);

    run(&state, cli.command, &mut std::io::stdout()).await
}

pub async fn run<W: Write>(state: &AppState, command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Letters(args) => commands::letters::run(state, args, out).await,
        Command::Conondrums(args) => commands::conondrums::run(state, args, out).await,
        Command::Numbers(args) => commands::numbers::run(state, args, out).await,
        Command::Generate(GenerateCommand::Letters(args)) => {
            commands::generate::letters(state, args, out).await
        }
        Command::Generate(GenerateCommand::Conondrums(args)) => {
            commands::generate::conondrums(state, args, out).await
        }
        Command::Generate(GenerateCommand::Numbers(args)) => {
            commands::generate::numbers(state, args, out).await
        }
        Command::Define(args) => commands::define::run(state, args, out),
        Command::Dict(command) => commands::dict::run(state, command, out),
    }
}
