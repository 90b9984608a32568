// lexicon-cli: shared utilities for the command-line tools.

use std::path::{Path, PathBuf};
use std::process;

use lexicon::Lexicon;

/// Lexicon file name looked up inside search directories.
pub const LEXICON_FILE: &str = "lexicon.dat";

/// Environment variable naming a lexicon file or a directory holding one.
pub const LEXICON_PATH_ENV: &str = "LEXICON_PATH";

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`
/// (default `warn`), keeping stdout free for tool output.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Search for a lexicon file and load it.
///
/// Search order:
/// 1. `lexicon_path` argument (if provided)
/// 2. `LEXICON_PATH` environment variable (file, or directory with `lexicon.dat`)
/// 3. `~/.lexicon/lexicon.dat`
/// 4. `lexicon.dat` in the current working directory
pub fn load_lexicon(lexicon_path: Option<&str>) -> Result<Lexicon, String> {
    let candidates = build_search_paths(
        lexicon_path,
        std::env::var(LEXICON_PATH_ENV).ok().as_deref(),
        home_dir().as_deref(),
    );

    match find_lexicon(&candidates) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading lexicon");
            Lexicon::from_path(path).map_err(|e| e.to_string())
        }
        None => Err(format!(
            "could not find a lexicon in any of the search paths:\n{}",
            candidates
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        )),
    }
}

/// First candidate that is an existing file.
pub fn find_lexicon(candidates: &[PathBuf]) -> Option<&Path> {
    candidates.iter().map(PathBuf::as_path).find(|p| p.is_file())
}

/// Build the ordered list of candidate lexicon files.
pub fn build_search_paths(
    lexicon_path: Option<&str>,
    env_path: Option<&str>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = lexicon_path {
        paths.push(PathBuf::from(p));
    }

    if let Some(p) = env_path {
        paths.push(PathBuf::from(p));
        paths.push(PathBuf::from(p).join(LEXICON_FILE));
    }

    if let Some(home) = home {
        paths.push(home.join(".lexicon").join(LEXICON_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LEXICON_FILE));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--lexicon=PATH`, `--lexicon PATH` or `-l PATH` argument.
///
/// Returns `(lexicon_path, remaining_args)`, or an error if the flag is
/// missing its value.
pub fn parse_lexicon_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    take_flag_value(args, "--lexicon", "-l")
}

/// Remove a valued flag (`LONG=VALUE`, `LONG VALUE` or `SHORT VALUE`) from
/// `args`. The last occurrence wins.
///
/// Returns `(value, remaining_args)`, or an error if the flag is missing
/// its value.
pub fn take_flag_value(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(long).and_then(|rest| rest.strip_prefix('=')) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
