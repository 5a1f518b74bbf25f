use std::io::{self, Write};

use countdown_core::conundrum::ConundrumGenerator;
use countdown_core::generator::{LettersRound, NumbersDraw, NumbersRound};
use countdown_core::letters::Solutions;
use countdown_core::numbers::{DEFAULT_SPACING, Grouping, Node, Solution};

/// ": definition", or nothing
pub fn format_definition(definition: Option<&str>) -> String {
    definition.map(|d| format!(": {d}")).unwrap_or_default()
}

/// Longest solutions first, each with its definition.
///
/// With `filter` set, words without a definition are hidden; a group whose
/// words are all hidden prints no header but still counts towards the cut-off.
pub fn write_best_solutions<W, D>(
    out: &mut W,
    solutions: &Solutions,
    define: D,
    filter: bool,
) -> io::Result<()>
where
    W: Write,
    D: Fn(&str) -> Option<String>,
{
    writeln!(out)?;
    writeln!(out, "The best solutions are:")?;

    for (length, words) in solutions.best() {
        let mut shown = 0;
        for word in words {
            let definition = define(word);
            if filter && definition.is_none() {
                continue;
            }
            if shown == 0 {
                writeln!(out, "{length} letter words")?;
            }
            shown += 1;
            writeln!(out, "- {word}{}", format_definition(definition.as_deref()))?;
        }
    }

    Ok(())
}

pub fn write_anagram<W: Write>(
    out: &mut W,
    word: &str,
    definition: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "{word}{}", format_definition(definition))
}

pub fn write_letters_round<W: Write>(
    out: &mut W,
    round: &LettersRound,
    selection: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "With {} vowels and {} consonants the letters are:",
        round.vowels, round.consonants
    )?;
    writeln!(out, "{selection}")
}

pub fn write_numbers_round<W: Write>(
    out: &mut W,
    round: &NumbersRound,
    draw: &NumbersDraw,
) -> io::Result<()> {
    writeln!(
        out,
        "With {} big ones and {} little ones the numbers are:",
        round.big,
        round.small()
    )?;
    writeln!(out, "{}", join_numbers(&draw.numbers, ", "))?;
    writeln!(out, "And the target is {}", draw.target)
}

/// How to solve a generated round, e.g. `letters abcdefghi`
pub fn write_solve_hint<W: Write>(out: &mut W, arguments: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Solve this by running:")?;
    writeln!(out, "countdown {arguments}")
}

pub fn join_numbers(numbers: &[u64], separator: &str) -> String {
    numbers
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Every conundrum `generator` builds from `words`.
///
/// Solved, each word is followed by its conundrums; otherwise each conundrum
/// is followed by the command that solves it. With `filter` set, words and
/// completions without a definition are skipped.
pub fn write_generated_conundrums<W, D>(
    out: &mut W,
    generator: &ConundrumGenerator,
    words: &[String],
    define: D,
    filter: bool,
    solve: bool,
) -> io::Result<()>
where
    W: Write,
    D: Fn(&str) -> Option<String>,
{
    for candidate in generator.candidates(words) {
        let definition = define(&candidate.word);
        if filter && definition.is_none() {
            continue;
        }

        let mut shown = 0;
        for completion in generator.completions(&candidate, words) {
            let sub_definition = define(&completion);
            if filter && sub_definition.is_none() {
                continue;
            }
            let parts = generator.parts(&completion);

            if solve {
                if shown == 0 {
                    writeln!(out)?;
                    writeln!(
                        out,
                        "{}{}",
                        candidate.word,
                        format_definition(definition.as_deref())
                    )?;
                }
                writeln!(
                    out,
                    "- {}{}",
                    parts.join(" "),
                    format_definition(sub_definition.as_deref())
                )?;
            } else {
                writeln!(out)?;
                writeln!(
                    out,
                    "{}{}",
                    parts.join(" "),
                    format_definition(sub_definition.as_deref())
                )?;
                writeln!(out, "countdown conondrums {}", parts.concat())?;
            }
            shown += 1;
        }
        out.flush()?;
    }
    Ok(())
}

/// "Found a new solution: 4 * 3 = 12, 12 - 1 = 11"
pub fn write_number_solution<W: Write>(out: &mut W, solution: &Solution) -> io::Result<()> {
    writeln!(
        out,
        "{}: {}",
        solution.reason,
        solution.node.steps(Grouping::Precedence).join(", ")
    )
}

pub fn write_easiest_solution<W: Write>(out: &mut W, node: &Node) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "The easiest solution was {node}")?;
    writeln!(out)?;
    writeln!(out, "{}", node.tree(DEFAULT_SPACING))?;
    writeln!(out)?;
    for step in node.steps(Grouping::Precedence) {
        writeln!(out, "{step}")?;
    }
    Ok(())
}
