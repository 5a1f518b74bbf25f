use std::io::Write;
use std::sync::Arc;

use countdown_core::conundrum::ConundrumSolver;

use crate::cli::ConondrumsArgs;
use crate::printer;
use crate::state::AppState;

pub async fn run<W: Write>(
    state: &AppState,
    args: ConondrumsArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let words = state.word_list(&args.words)?;
    let finder = state.definitions();

    let solver = ConundrumSolver::new(&args.letters);
    let matches = solver.stream(Arc::new(words), state.config.channel_capacity);

    while let Ok(item) = matches.recv().await {
        let word = item?;
        printer::write_anagram(out, &word, finder.define(&word).as_deref())?;
        out.flush()?;
    }
    Ok(())
}
