// lexicon-prefix: Check prefixes from stdin against a lexicon.
//
// Reads prefixes from stdin (one per line):
//   P: prefix    (some word starts with it)
//   N: prefix    (no word starts with it)
//
// With --list, every word starting with a found prefix is printed after it,
// indented.
//
// Usage:
//   lexicon-prefix [-l LEXICON] [--list]

use std::io::{self, BufRead, Write};

fn main() {
    lexicon_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) =
        lexicon_cli::parse_lexicon_path(&args).unwrap_or_else(|e| lexicon_cli::fatal(&e));

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-prefix: Check prefixes from stdin against a lexicon.");
        println!();
        println!("Usage: lexicon-prefix [-l LEXICON] [--list]");
        println!();
        println!("Reads prefixes from stdin (one per line). Prints:");
        println!("  P: prefix    (some word starts with it)");
        println!("  N: prefix    (no word starts with it)");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon file (binary DAWG or text word list)");
        println!("  --list               Also list the words under each found prefix");
        println!("  -h, --help           Print this help");
        return;
    }

    let list = args.iter().any(|a| a == "--list");

    let lex = lexicon_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| lexicon_cli::fatal(&e));

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
        let prefix = line.trim();
        if prefix.is_empty() {
            continue;
        }

        if !lex.contains_prefix(prefix) {
            let _ = writeln!(out, "N: {prefix}");
            continue;
        }
        let _ = writeln!(out, "P: {prefix}");
        if list {
            let lower = prefix.to_ascii_lowercase();
            // Words are ascending, so the matches form one contiguous run.
            for word in lex
                .iter()
                .skip_while(|w| !w.starts_with(&lower))
                .take_while(|w| w.starts_with(&lower))
            {
                let _ = writeln!(out, "    {word}");
            }
        }
    }
}
