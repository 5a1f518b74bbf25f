use std::io::Write;

use countdown_core::conundrum::ConundrumGenerator;
use countdown_core::generator::{LettersRound, NumbersRound};
use countdown_core::letters::LetterSolver;
use countdown_core::numbers::Operation;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{GenerateConondrumsArgs, GenerateLettersArgs, GenerateNumbersArgs};
use crate::commands::letters::solve_and_print;
use crate::commands::numbers::solve as solve_numbers;
use crate::printer;
use crate::state::AppState;

pub async fn letters<W: Write>(
    state: &AppState,
    args: GenerateLettersArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let defaults = &state.config.letters;
    let round = LettersRound {
        vowels: args.vowels.unwrap_or(defaults.vowels),
        consonants: args.consonants.unwrap_or(defaults.consonants),
        countdown_rules: args.countdown_rules.unwrap_or(defaults.countdown_rules),
    };

    let selection = match args.seed {
        Some(seed) => round.draw(&mut StdRng::seed_from_u64(seed))?,
        None => round.draw(&mut rand::rng())?,
    };

    printer::write_letters_round(out, &round, &selection)?;
    if !args.solve {
        printer::write_solve_hint(out, &format!("letters {selection}"))?;
        return Ok(());
    }
    out.flush()?;

    let words = state.word_list(&args.words)?;
    let solver = LetterSolver::with_bounds(&selection, defaults.min_length, defaults.max_length);
    solve_and_print(state, solver, words, &args.definitions, out).await
}

pub async fn conondrums<W: Write>(
    state: &AppState,
    args: GenerateConondrumsArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let length = args.length.unwrap_or(state.config.conundrum.length);
    let solve = args.solve.unwrap_or(state.config.conundrum.show_solution);
    let filter = state.filter_definitions(&args.definitions);

    let generator = ConundrumGenerator::new(length, args.phrases)?;
    let words = state.word_list(&args.words)?.collect().await?;
    let finder = state.definitions();

    printer::write_generated_conundrums(
        out,
        &generator,
        &words,
        |w| finder.define(w),
        filter,
        solve,
    )?;
    Ok(())
}

pub async fn numbers<W: Write>(
    state: &AppState,
    args: GenerateNumbersArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let defaults = &state.config.numbers;
    let round = NumbersRound {
        big: args.big.unwrap_or(defaults.big),
        total: args.total.unwrap_or(defaults.total),
        big_numbers: args.big_numbers.unwrap_or_else(|| defaults.big_numbers.clone()),
        small_numbers: args.small_numbers.unwrap_or_else(|| defaults.small_numbers.clone()),
    };

    let draw = match args.seed {
        Some(seed) => round.draw(&mut StdRng::seed_from_u64(seed))?,
        None => round.draw(&mut rand::rng())?,
    };

    printer::write_numbers_round(out, &round, &draw)?;
    if !args.solve {
        let arguments = format!(
            "numbers {} --target {}",
            printer::join_numbers(&draw.numbers, " "),
            draw.target
        );
        printer::write_solve_hint(out, &arguments)?;
        return Ok(());
    }

    let operations = Operation::parse_list(&defaults.operators)?;
    solve_numbers(
        state,
        &draw.numbers,
        draw.target,
        &operations,
        defaults.broaden_target,
        out,
    )
    .await
}
