// Command-line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "sound-change")]
#[command(bin_name = "sound-change")]
#[command(about = "Applies phonological rules to words.", long_about = None)]
#[command(
    after_help = "Rules use the notation `before -> after / environment`, e.g. `[ptk] -> [bdg] / V_V`."
)]
pub struct Args {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Write a two-column CSV (before, after) instead of plain words
    #[arg(long)]
    pub csv_output: bool,

    /// JSON file with sound classes (default: built-in classes)
    #[arg(
        short = 's',
        long,
        value_name = "SOUND_CLASSES_JSON",
        conflicts_with = "no_sound_classes"
    )]
    pub sound_classes_json: Option<PathBuf>,

    /// Do not use sound classes
    #[arg(long)]
    pub no_sound_classes: bool,

    /// Directory for generated files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Log compiled rules to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// The two ways of supplying rules and words. Exactly one is required.
#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
pub struct ModeArgs {
    /// Apply the rules in RULES_FILE to the words in WORDS_FILE
    #[arg(
        short = 'f',
        long,
        num_args = 2,
        value_names = ["RULES_FILE", "WORDS_FILE"]
    )]
    pub file_based_sound_change: Option<Vec<PathBuf>>,

    /// Apply the rule named NAMED_RULE in NAMED_RULES_JSON to WORDS
    /// (whitespace-separated)
    #[arg(
        short = 'n',
        long,
        num_args = 3,
        value_names = ["NAMED_RULES_JSON", "NAMED_RULE", "WORDS"]
    )]
    pub named_sound_change: Option<Vec<String>>,
}

/// Resolved run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    FileBased {
        rules_file: PathBuf,
        words_file: PathBuf,
    },
    Named {
        rules_file: PathBuf,
        rule_name: String,
        words: Vec<String>,
    },
}

impl ModeArgs {
    /// Turn the parsed option values into a [`Mode`].
    ///
    /// clap enforces the arity and the mutual exclusion, so `None` only comes
    /// back for values built by hand.
    pub fn mode(&self) -> Option<Mode> {
        if let Some([rules_file, words_file]) = self.file_based_sound_change.as_deref() {
            return Some(Mode::FileBased {
                rules_file: rules_file.clone(),
                words_file: words_file.clone(),
            });
        }
        if let Some([rules_file, rule_name, words]) = self.named_sound_change.as_deref() {
            return Some(Mode::Named {
                rules_file: PathBuf::from(rules_file),
                rule_name: rule_name.clone(),
                words: words.split_whitespace().map(str::to_string).collect(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_based_mode() {
        let args = Args::try_parse_from(["sound-change", "-f", "rules.txt", "words.txt"]).unwrap();
        assert_eq!(
            args.mode.mode(),
            Some(Mode::FileBased {
                rules_file: PathBuf::from("rules.txt"),
                words_file: PathBuf::from("words.txt"),
            })
        );
        assert!(!args.csv_output);
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn named_mode_splits_words() {
        let args = Args::try_parse_from([
            "sound-change",
            "--named-sound-change",
            "named.json",
            "lenition",
            "apa  ata aka",
            "--csv-output",
        ])
        .unwrap();
        assert_eq!(
            args.mode.mode(),
            Some(Mode::Named {
                rules_file: PathBuf::from("named.json"),
                rule_name: "lenition".to_string(),
                words: vec!["apa".to_string(), "ata".to_string(), "aka".to_string()],
            })
        );
        assert!(args.csv_output);
    }

    #[test]
    fn a_mode_is_required() {
        assert!(Args::try_parse_from(["sound-change"]).is_err());
    }

    #[test]
    fn modes_are_exclusive() {
        let result = Args::try_parse_from([
            "sound-change",
            "-f",
            "r.txt",
            "w.txt",
            "-n",
            "n.json",
            "x",
            "y",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn file_mode_needs_two_values() {
        assert!(Args::try_parse_from(["sound-change", "-f", "rules.txt"]).is_err());
    }

    #[test]
    fn sound_class_options_are_exclusive() {
        let result = Args::try_parse_from([
            "sound-change",
            "-f",
            "r.txt",
            "w.txt",
            "-s",
            "classes.json",
            "--no-sound-classes",
        ]);
        assert!(result.is_err());
    }
}
