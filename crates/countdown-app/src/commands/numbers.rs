use std::io::Write;

use countdown_core::NumbersError;
use countdown_core::numbers::{Node, NumberSolver, Operation};

use crate::cli::NumbersArgs;
use crate::printer;
use crate::state::AppState;

pub async fn run<W: Write>(state: &AppState, args: NumbersArgs, out: &mut W) -> anyhow::Result<()> {
    let defaults = &state.config.numbers;
    let operators = args.operators.as_deref().unwrap_or(&defaults.operators);
    let operations = Operation::parse_list(operators)?;
    let broaden = args.broaden_target.unwrap_or(defaults.broaden_target);

    solve(state, &args.numbers, args.target, &operations, broaden, out).await
}

/// Solve for `target`; when that fails and `broaden` is set, try the
/// nearest targets below and above in turn
pub async fn solve<W: Write>(
    state: &AppState,
    numbers: &[u64],
    target: u64,
    operations: &[Operation],
    broaden: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if solve_target(state, numbers, target, operations, out).await? {
        return Ok(());
    }
    if !broaden {
        return Err(NumbersError::Unsolvable.into());
    }

    writeln!(out, "Found no solution")?;
    for offset in 1..=state.config.numbers.broaden_range {
        if let Some(lower) = target.checked_sub(offset).filter(|&lower| lower > 0) {
            writeln!(out)?;
            writeln!(out, "Trying {offset} lower {lower}")?;
            if solve_target(state, numbers, lower, operations, out).await? {
                return Ok(());
            }
        }

        let larger = target + offset;
        writeln!(out)?;
        writeln!(out, "Trying {offset} larger {larger}")?;
        if solve_target(state, numbers, larger, operations, out).await? {
            return Ok(());
        }
    }
    Err(NumbersError::Unsolvable.into())
}

/// Print every distinct solution as it is found, then the easiest one.
/// Returns false when there is none.
async fn solve_target<W: Write>(
    state: &AppState,
    numbers: &[u64],
    target: u64,
    operations: &[Operation],
    out: &mut W,
) -> anyhow::Result<bool> {
    let solver = NumberSolver::new(target, numbers, operations)?;
    tracing::info!("Solving {} with {:?}", solver.target(), solver.numbers());

    writeln!(out, "Finding solutions...")?;
    out.flush()?;

    let solutions = solver.stream(state.config.channel_capacity);
    let mut easiest: Option<Node> = None;
    while let Ok(item) = solutions.recv().await {
        let solution = match item {
            Ok(solution) => solution,
            Err(NumbersError::Unsolvable) => break,
            Err(e) => return Err(e.into()),
        };
        printer::write_number_solution(out, &solution)?;
        out.flush()?;

        if easiest
            .as_ref()
            .is_none_or(|node| solution.node.is_less_complex(node))
        {
            easiest = Some(solution.node);
        }
    }

    match easiest {
        Some(node) => {
            printer::write_easiest_solution(out, &node)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
