use countdown_core::generator::NumbersRound;
use countdown_core::numbers::{DEFAULT_SPACING, Node, Operation};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::test_state;
use crate::cli::{DefinitionArgs, GenerateNumbersArgs, LettersArgs, WordListArgs};
use crate::commands;

fn five_times_two() -> Node {
    Node::combine(Operation::Multiplication, Node::Number(5), Node::Number(2)).unwrap()
}

#[tokio::test]
async fn test_numbers_solution() {
    let state = test_state();
    let mut out = Vec::new();
    commands::numbers::solve(&state, &[5, 2], 10, &Operation::ALL, false, &mut out)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "Finding solutions...\n\
             Found a new solution: 5 * 2 = 10\n\
             \n\
             The easiest solution was 5 * 2\n\
             \n\
             {}\n\
             \n\
             5 * 2 = 10\n",
            five_times_two().tree(DEFAULT_SPACING)
        )
    );
}

#[tokio::test]
async fn test_numbers_broadens_target() {
    let state = test_state();
    let mut out = Vec::new();
    commands::numbers::solve(&state, &[5, 2], 11, &Operation::ALL, true, &mut out)
        .await
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with(
        "Finding solutions...\n\
         Found no solution\n\
         \n\
         Trying 1 lower 10\n\
         Finding solutions...\n\
         Found a new solution: 5 * 2 = 10\n"
    ));
    assert!(!output.contains("larger"));
}

#[tokio::test]
async fn test_numbers_unsolvable() {
    let state = test_state();

    let mut out = Vec::new();
    let err = commands::numbers::solve(&state, &[5, 2], 11, &Operation::ALL, false, &mut out)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot be solved");

    let mut out = Vec::new();
    let err = commands::numbers::solve(&state, &[2, 1], 1000, &Operation::ALL, true, &mut out)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot be solved");
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("\nTrying 10 lower 990\n"));
    assert!(output.ends_with("\nTrying 10 larger 1010\nFinding solutions...\n"));
}

#[tokio::test]
async fn test_generate_numbers_hint() {
    let state = test_state();
    let args = GenerateNumbersArgs {
        big: Some(1),
        total: None,
        big_numbers: None,
        small_numbers: None,
        solve: false,
        seed: Some(11),
    };
    let mut out = Vec::new();
    commands::generate::numbers(&state, args, &mut out).await.unwrap();

    let round = NumbersRound {
        big: 1,
        ..NumbersRound::default()
    };
    let draw = round.draw(&mut StdRng::seed_from_u64(11)).unwrap();
    let numbers: Vec<String> = draw.numbers.iter().map(u64::to_string).collect();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "With 1 big ones and 5 little ones the numbers are:\n\
             {}\n\
             And the target is {}\n\
             \n\
             Solve this by running:\n\
             countdown numbers {} --target {}\n",
            numbers.join(", "),
            draw.target,
            numbers.join(" "),
            draw.target
        )
    );
}

#[tokio::test]
async fn test_letters_skips_undecodable_lines() {
    let path = std::env::temp_dir().join(format!("countdown-app-words-{}.txt", std::process::id()));
    tokio::fs::write(&path, b"specific\ncaf\xe9\nspice\n").await.unwrap();

    let state = test_state();
    let args = LettersArgs {
        words: WordListArgs {
            dictionary: Some(path.display().to_string()),
        },
        definitions: DefinitionArgs {
            filter_words_with_definitions: Some(false),
        },
        min: None,
        max: None,
        letters: "gicpisefc".to_string(),
    };
    let mut out = Vec::new();
    let result = commands::letters::run(&state, args, &mut out).await;
    tokio::fs::remove_file(&path).await.unwrap();

    result.unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nThe best solutions are:\n\
         8 letter words\n\
         - specific: (adjective) clearly defined or identified\n\
         5 letter words\n\
         - spice: spice | noun an aromatic vegetable substance\n"
    );
}
