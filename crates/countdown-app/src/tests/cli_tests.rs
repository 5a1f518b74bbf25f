use clap::Parser;
use countdown_types::RecordVersion;

use crate::cli::{Cli, Command, DictCommand, GenerateCommand};

#[test]
fn test_letters_arguments() {
    let cli = Cli::try_parse_from([
        "countdown",
        "letters",
        "-d",
        "https://example.com/words.txt",
        "--min",
        "5",
        "--filter-words-with-definitions",
        "false",
        "gicpisefc",
    ])
    .unwrap();

    let Command::Letters(args) = cli.command else {
        panic!("expected letters");
    };
    assert_eq!(args.letters, "gicpisefc");
    assert_eq!(args.min, Some(5));
    assert_eq!(args.max, None);
    assert_eq!(args.definitions.filter_words_with_definitions, Some(false));
    assert_eq!(args.words.dictionary.as_deref(), Some("https://example.com/words.txt"));
}

#[test]
fn test_generate_conondrums_phrases() {
    let cli = Cli::try_parse_from([
        "countdown", "generate", "conondrums", "--length", "8", "--phrases", "pro", "con",
    ])
    .unwrap();

    let Command::Generate(GenerateCommand::Conondrums(args)) = cli.command else {
        panic!("expected generate conondrums");
    };
    assert_eq!(args.length, Some(8));
    assert_eq!(args.phrases, vec!["pro", "con"]);
    assert_eq!(args.solve, None);
}

#[test]
fn test_generate_letters_defaults() {
    let cli = Cli::try_parse_from(["countdown", "generate", "letters", "--seed", "3"]).unwrap();
    let Command::Generate(GenerateCommand::Letters(args)) = cli.command else {
        panic!("expected generate letters");
    };
    assert!(!args.solve);
    assert_eq!(args.seed, Some(3));
    assert_eq!(args.vowels, None);
}

#[test]
fn test_dict_lookup_format() {
    let cli = Cli::try_parse_from([
        "countdown",
        "dict",
        "lookup",
        "--format",
        "html-with-popover-css",
        "--markup",
        "bird",
    ])
    .unwrap();

    let Command::Dict(DictCommand::Lookup(args)) = cli.command else {
        panic!("expected dict lookup");
    };
    assert_eq!(args.format, RecordVersion::HtmlWithPopoverCss);
    assert!(args.markup);
    assert!(!args.exact);
    assert_eq!(args.text, "bird");
}

#[test]
fn test_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["countdown", "dict", "lookup", "--format", "rtf", "bird"]).is_err());
}

#[test]
fn test_define_conflicting_sources() {
    assert!(
        Cli::try_parse_from(["countdown", "define", "--default", "--in", "Oxford", "bird"])
            .is_err()
    );
}

#[test]
fn test_numbers_arguments() {
    let cli = Cli::try_parse_from([
        "countdown", "numbers", "75", "25", "7", "-t", "361", "-b", "false", "-o", "+, *",
    ])
    .unwrap();

    let Command::Numbers(args) = cli.command else {
        panic!("expected numbers");
    };
    assert_eq!(args.numbers, vec![75, 25, 7]);
    assert_eq!(args.target, 361);
    assert_eq!(args.broaden_target, Some(false));
    assert_eq!(args.operators.as_deref(), Some("+, *"));
}

#[test]
fn test_numbers_requires_target_and_numbers() {
    assert!(Cli::try_parse_from(["countdown", "numbers", "75", "25"]).is_err());
    assert!(Cli::try_parse_from(["countdown", "numbers", "--target", "361"]).is_err());
}

#[test]
fn test_generate_numbers_pools() {
    let cli = Cli::try_parse_from([
        "countdown",
        "generate",
        "numbers",
        "--big",
        "1",
        "--big-numbers",
        "12,37,62,87",
        "--solve",
        "true",
    ])
    .unwrap();

    let Command::Generate(GenerateCommand::Numbers(args)) = cli.command else {
        panic!("expected generate numbers");
    };
    assert_eq!(args.big, Some(1));
    assert_eq!(args.total, None);
    assert_eq!(args.big_numbers, Some(vec![12, 37, 62, 87]));
    assert_eq!(args.small_numbers, None);
    assert!(args.solve);
}
