//! End-to-end tests of the run logic against real files in a temp directory.

use std::fs;
use std::path::Path;

use clap::Parser;
use sca_cli::args::Args;
use sca_cli::{CliError, Outcome, run};

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("sound-change").chain(args.iter().copied())).unwrap()
}

#[test]
fn file_mode_writes_word_list() {
    let dir = tempfile::tempdir().unwrap();
    let rules = write(
        dir.path(),
        "rules.txt",
        "[ptk] -> [bdg] / V_V\n\n  V -> _ / _#  \n",
    );
    let words = write(dir.path(), "words.txt", "apata\naka\n\npat\n");
    let out_dir = dir.path().to_str().unwrap();

    let args = parse(&["-f", &rules, &words, "-o", out_dir]);
    let Outcome::Written(path) = run(&args).unwrap() else {
        panic!("file mode should write a file");
    };

    assert_eq!(path.extension().unwrap(), "txt");
    assert_eq!(fs::read_to_string(path).unwrap(), "abad\nag\n\npat\n");
}

#[test]
fn blank_lines_are_skipped_in_rules_only() {
    let dir = tempfile::tempdir().unwrap();
    let rules = write(dir.path(), "rules.txt", "\n a -> o / _ \n\n");
    let words = write(dir.path(), "words.txt", "ba\n\n  \nab\n");

    assert_eq!(
        sca_cli::read_rules(Path::new(&rules)).unwrap(),
        vec!["a -> o / _"]
    );
    assert_eq!(
        sca_cli::read_words(Path::new(&words)).unwrap(),
        vec!["ba", "", "", "ab"]
    );

    let out_dir = dir.path().to_str().unwrap();
    let args = parse(&["-f", &rules, &words, "-o", out_dir]);
    let Outcome::Written(path) = run(&args).unwrap() else {
        panic!("file mode should write a file");
    };
    assert_eq!(fs::read_to_string(path).unwrap(), "bo\n\n\nob\n");
}

#[test]
fn file_mode_csv_output() {
    let dir = tempfile::tempdir().unwrap();
    let rules = write(dir.path(), "rules.txt", "t -> d / #_\n");
    let words = write(dir.path(), "words.txt", "tot\nat\n");
    let out_dir = dir.path().to_str().unwrap();

    let args = parse(&["-f", &rules, &words, "--csv-output", "-o", out_dir]);
    let Outcome::Written(path) = run(&args).unwrap() else {
        panic!("csv output should write a file");
    };

    assert_eq!(path.extension().unwrap(), "csv");
    assert_eq!(fs::read_to_string(path).unwrap(), "tot,dot\nat,at\n");
}

#[test]
fn named_mode_prints_words() {
    let dir = tempfile::tempdir().unwrap();
    let named = write(
        dir.path(),
        "named.json",
        r#"{"final-a": "[ae] -> [AE] / _#", "initial-t": "t -> d / #_"}"#,
    );

    let args = parse(&["-n", &named, "final-a", "spa apple at"]);
    assert_eq!(
        run(&args).unwrap(),
        Outcome::Printed(vec![
            "spA".to_string(),
            "applE".to_string(),
            "at".to_string()
        ])
    );
}

#[test]
fn named_mode_unknown_rule() {
    let dir = tempfile::tempdir().unwrap();
    let named = write(dir.path(), "named.json", r#"{"b": "x > y / _", "a": "y > z / _"}"#);

    let args = parse(&["-n", &named, "missing", "word"]);
    match run(&args).unwrap_err() {
        CliError::NamedRuleNotFound { name, available } => {
            assert_eq!(name, "missing");
            assert_eq!(available, "a, b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn custom_sound_classes_file() {
    let dir = tempfile::tempdir().unwrap();
    let classes = write(dir.path(), "classes.json", r#"{"T": "td", "K": "kg"}"#);
    let named = write(dir.path(), "named.json", r#"{"backing": "T -> K / _#"}"#);

    let args = parse(&["-n", &named, "backing", "at ad", "-s", &classes]);
    assert_eq!(
        run(&args).unwrap(),
        Outcome::Printed(vec!["ak".to_string(), "ag".to_string()])
    );
}

#[test]
fn no_sound_classes_keeps_labels_literal() {
    let dir = tempfile::tempdir().unwrap();
    let named = write(dir.path(), "named.json", r#"{"r": "V -> v / _"}"#);

    let args = parse(&["-n", &named, "r", "aVa", "--no-sound-classes"]);
    assert_eq!(run(&args).unwrap(), Outcome::Printed(vec!["ava".to_string()]));
}

#[test]
fn invalid_sound_class_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let classes = write(dir.path(), "classes.json", r#"{"v": "aeiou"}"#);
    let named = write(dir.path(), "named.json", r#"{"r": "a -> b / _"}"#);

    let args = parse(&["-n", &named, "r", "a", "-s", &classes]);
    let err = run(&args).unwrap_err();
    assert!(matches!(err, CliError::SoundClass(_)));
    assert_eq!(err.exit_code(), sca_cli::codes::INVALID_SOUND_CLASSES);
}

#[test]
fn sound_class_file_must_be_json() {
    let dir = tempfile::tempdir().unwrap();
    let classes = write(dir.path(), "classes.txt", r#"{"V": "aeiou"}"#);
    let named = write(dir.path(), "named.json", r#"{"r": "a -> b / _"}"#);

    let args = parse(&["-n", &named, "r", "a", "-s", &classes]);
    assert!(matches!(run(&args).unwrap_err(), CliError::NotJson { .. }));
}

#[test]
fn invalid_rule_in_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    let rules = write(dir.path(), "rules.txt", "a -> b / _\nx - y / a_b\n");
    let words = write(dir.path(), "words.txt", "a\n");

    let args = parse(&["-f", &rules, &words, "-o", out.to_str().unwrap()]);
    let err = run(&args).unwrap_err();
    assert!(matches!(err, CliError::Rule(_)));
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}
