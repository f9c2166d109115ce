// sound-change: apply phonological rules to words.
//
// Usage:
//   sound-change -f RULES_FILE WORDS_FILE [OPTIONS]
//   sound-change -n NAMED_RULES_JSON NAMED_RULE "WORD WORD ..." [OPTIONS]
//
// Options:
//   --csv-output               Write before/after pairs as CSV
//   -s, --sound-classes-json   JSON file with sound classes
//   --no-sound-classes         Do not use sound classes
//   -o, --output-dir DIR       Directory for generated files (default: .)
//   -v, --verbose              Log compiled rules to stderr
//
// Logging honours RUST_LOG; without it the level is `warn`, or `debug`
// with --verbose.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use sca_cli::args::Args;
use sca_cli::{Outcome, codes, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(Outcome::Printed(words)) => {
            let stdout = io::stdout();
            let mut out = io::BufWriter::new(stdout.lock());
            for word in &words {
                if writeln!(out, "{word}").is_err() {
                    return ExitCode::from(codes::IO_ERROR);
                }
            }
            if out.flush().is_err() {
                return ExitCode::from(codes::IO_ERROR);
            }
            ExitCode::from(codes::SUCCESS)
        }
        Ok(Outcome::Written(path)) => {
            eprintln!("wrote {}", path.display());
            ExitCode::from(codes::SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
