// sca-cli: file handling and run logic for the `sound-change` tool.
//
// The engine only sees lists of rule strings and words; everything about
// where they come from and where results go lives here.

pub mod args;

use std::fs;
use std::path::{Path, PathBuf};

use sca_core::{NamedRules, NamedRulesError, SoundClassError, SoundClasses};
use sca_engine::{RuleError, SoundChanger};

use crate::args::{Args, Mode};

/// Stem of generated output file names.
const OUTPUT_STEM: &str = "sound_change";

/// Errors surfaced by the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} should be a JSON file", path.display())]
    NotJson { path: PathBuf },

    #[error("no rule named '{name}' (available: {available})")]
    NamedRuleNotFound { name: String, available: String },

    #[error("no run mode given")]
    MissingMode,

    #[error(transparent)]
    SoundClass(#[from] SoundClassError),

    #[error(transparent)]
    NamedRules(#[from] NamedRulesError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Process exit codes.
pub mod codes {
    pub const SUCCESS: u8 = 0;
    /// Fallback for errors without a dedicated code.
    pub const GENERIC_ERROR: u8 = 1;
    /// Invalid arguments (clap uses the same code for its own errors).
    pub const USAGE_ERROR: u8 = 2;
    pub const INVALID_SOUND_CLASSES: u8 = 10;
    pub const INVALID_RULE: u8 = 11;
    pub const NAMED_RULE_NOT_FOUND: u8 = 12;
    pub const IO_ERROR: u8 = 20;
}

impl CliError {
    /// Exit code reported to the shell for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Read { .. } | Self::Write { .. } | Self::Csv { .. } => codes::IO_ERROR,
            Self::NotJson { .. } | Self::MissingMode => codes::USAGE_ERROR,
            Self::NamedRuleNotFound { .. } => codes::NAMED_RULE_NOT_FOUND,
            Self::SoundClass(_) => codes::INVALID_SOUND_CLASSES,
            Self::Rule(_) => codes::INVALID_RULE,
            Self::NamedRules(_) => codes::GENERIC_ERROR,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Changed words to print on stdout.
    Printed(Vec<String>),
    /// Results written to this file.
    Written(PathBuf),
}

/// Run the tool for already parsed arguments.
pub fn run(args: &Args) -> Result<Outcome, CliError> {
    let mode = args.mode.mode().ok_or(CliError::MissingMode)?;
    let classes = load_sound_classes(args.sound_classes_json.as_deref(), args.no_sound_classes)?;
    tracing::debug!(classes = %classes, "sound classes loaded");
    let changer = SoundChanger::new(classes);

    match mode {
        Mode::FileBased {
            rules_file,
            words_file,
        } => {
            let rules = read_rules(&rules_file)?;
            let words = read_words(&words_file)?;
            tracing::info!(rules = rules.len(), words = words.len(), "applying rule file");
            let changed = changer.apply_to_words(&rules, &words)?;

            let path = if args.csv_output {
                let path = output_path(&args.output_dir, "csv");
                write_before_after_csv(&path, &words, &changed)?;
                path
            } else {
                let path = output_path(&args.output_dir, "txt");
                write_words(&path, &changed)?;
                path
            };
            Ok(Outcome::Written(path))
        }
        Mode::Named {
            rules_file,
            rule_name,
            words,
        } => {
            let named = load_named_rules(&rules_file)?;
            let rule = named
                .get(&rule_name)
                .ok_or_else(|| CliError::NamedRuleNotFound {
                    name: rule_name.clone(),
                    available: named.names().collect::<Vec<_>>().join(", "),
                })?;
            tracing::info!(name = rule_name.as_str(), rule, "applying named rule");
            let changed = changer.apply_to_words(&[rule], &words)?;

            if args.csv_output {
                let path = output_path(&args.output_dir, "csv");
                write_before_after_csv(&path, &words, &changed)?;
                Ok(Outcome::Written(path))
            } else {
                Ok(Outcome::Printed(changed))
            }
        }
    }
}

/// Pick the sound class table from the command-line options.
///
/// `--no-sound-classes` wins; otherwise a given file is loaded; otherwise the
/// built-in table is used.
pub fn load_sound_classes(
    path: Option<&Path>,
    no_sound_classes: bool,
) -> Result<SoundClasses, CliError> {
    if no_sound_classes {
        return Ok(SoundClasses::empty());
    }
    match path {
        Some(path) => {
            ensure_json(path)?;
            let json = read_to_string(path)?;
            Ok(SoundClasses::from_json(&json)?)
        }
        None => Ok(SoundClasses::default()),
    }
}

/// Load a named rule table from a `.json` file.
pub fn load_named_rules(path: &Path) -> Result<NamedRules, CliError> {
    ensure_json(path)?;
    let json = read_to_string(path)?;
    Ok(NamedRules::from_json(&json)?)
}

/// Reject paths that do not end in `.json` (any case).
pub fn ensure_json(path: &Path) -> Result<(), CliError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(())
    } else {
        Err(CliError::NotJson {
            path: path.to_path_buf(),
        })
    }
}

/// Read a rules file: one rule per line, trimmed, blank lines skipped.
pub fn read_rules(path: &Path) -> Result<Vec<String>, CliError> {
    Ok(read_to_string(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read a words file: one word per line, trimmed.
///
/// Blank lines stay as empty words so output line N matches input line N.
pub fn read_words(path: &Path) -> Result<Vec<String>, CliError> {
    Ok(read_to_string(path)?
        .lines()
        .map(|line| line.trim().to_string())
        .collect())
}

fn read_to_string(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Timestamp used in generated file names, e.g. `2024-05-01-13-45-09`.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-%H-%M-%S").to_string()
}

/// Path of a new output file in `dir` with the given extension.
pub fn output_path(dir: &Path, extension: &str) -> PathBuf {
    dir.join(format!("{OUTPUT_STEM}_{}.{extension}", timestamp()))
}

/// Write one word per line.
pub fn write_words(path: &Path, words: &[String]) -> Result<(), CliError> {
    let mut contents = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
    for word in words {
        contents.push_str(word);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a two-column CSV with each word before and after the changes.
pub fn write_before_after_csv(
    path: &Path,
    before: &[String],
    after: &[String],
) -> Result<(), CliError> {
    let csv_error = |source| CliError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for (b, a) in before.iter().zip(after) {
        writer.write_record([b, a]).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
