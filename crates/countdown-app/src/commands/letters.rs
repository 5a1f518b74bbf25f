use std::io::Write;
use std::sync::Arc;

use countdown_core::WordList;
use countdown_core::letters::{LetterSolver, Solutions};

use crate::cli::{DefinitionArgs, LettersArgs};
use crate::printer;
use crate::state::AppState;

pub async fn run<W: Write>(state: &AppState, args: LettersArgs, out: &mut W) -> anyhow::Result<()> {
    let words = state.word_list(&args.words)?;
    let min = args.min.unwrap_or(state.config.letters.min_length);
    let max = args.max.or(state.config.letters.max_length);

    let solver = LetterSolver::with_bounds(&args.letters, min, max);
    solve_and_print(state, solver, words, &args.definitions, out).await
}

/// Solve, then print the best solutions with their definitions
pub async fn solve_and_print<W: Write>(
    state: &AppState,
    solver: LetterSolver,
    words: WordList,
    definitions: &DefinitionArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let solutions = solve(state, solver, words).await?;

    let finder = state.definitions();
    let filter = state.filter_definitions(definitions);
    printer::write_best_solutions(out, &solutions, |w| finder.define(w), filter)?;
    out.flush()?;
    Ok(())
}

/// Run the solver over the word list and group every match
pub async fn solve(
    state: &AppState,
    solver: LetterSolver,
    words: WordList,
) -> anyhow::Result<Solutions> {
    tracing::info!("Solving {} with {}", solver.letters(), words);

    let matches = solver.stream(Arc::new(words), state.config.channel_capacity);
    let mut solutions = Solutions::new();
    while let Ok(item) = matches.recv().await {
        solutions.insert(item?);
    }

    tracing::debug!("Found {} words", solutions.len());
    Ok(solutions)
}
