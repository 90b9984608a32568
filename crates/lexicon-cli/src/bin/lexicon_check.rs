// lexicon-check: Check words from stdin against a lexicon.
//
// Reads words from stdin (one per line) and reports whether each one is in
// the lexicon:
//   C: word    (contained)
//   W: word    (not in the lexicon)
//
// Usage:
//   lexicon-check [-l LEXICON] [OPTIONS]
//
// Options:
//   -l, --lexicon PATH   Lexicon file (binary DAWG or text word list)
//   -a, --add PATH       Also add the words from another word list first
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

fn main() {
    lexicon_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) =
        lexicon_cli::parse_lexicon_path(&args).unwrap_or_else(|e| lexicon_cli::fatal(&e));

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-check: Check words from stdin against a lexicon.");
        println!();
        println!("Usage: lexicon-check [-l LEXICON] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (in the lexicon)");
        println!("  W: word    (not in the lexicon)");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon file (binary DAWG or text word list)");
        println!("  -a, --add PATH       Also add the words from another word list");
        println!("  -h, --help           Print this help");
        return;
    }

    let (extra, args) = lexicon_cli::take_flag_value(&args, "--add", "-a")
        .unwrap_or_else(|e| lexicon_cli::fatal(&e));
    if let Some(unknown) = args.first() {
        lexicon_cli::fatal(&format!("unexpected argument: {unknown}"));
    }

    let mut lex = lexicon_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| lexicon_cli::fatal(&e));
    if let Some(path) = extra {
        lex.add_words_from_path(&path)
            .unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let tag = if lex.contains(word) { 'C' } else { 'W' };
        let _ = writeln!(out, "{tag}: {word}");
    }
}
