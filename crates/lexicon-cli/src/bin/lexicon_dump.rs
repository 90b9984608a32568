// lexicon-dump: Print every word of a lexicon in ascending order.
//
// Usage:
//   lexicon-dump [-l LEXICON] [--count] [--info]
//
// Options:
//   --count   Print only the number of words
//   --info    Print store statistics (automaton edges/words, added words)

use std::io::{self, Write};

fn main() {
    lexicon_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) =
        lexicon_cli::parse_lexicon_path(&args).unwrap_or_else(|e| lexicon_cli::fatal(&e));

    if lexicon_cli::wants_help(&args) {
        println!("lexicon-dump: Print every word of a lexicon in ascending order.");
        println!();
        println!("Usage: lexicon-dump [-l LEXICON] [--count] [--info]");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon file (binary DAWG or text word list)");
        println!("  --count              Print only the number of words");
        println!("  --info               Print store statistics");
        println!("  -h, --help           Print this help");
        return;
    }

    let count_only = args.iter().any(|a| a == "--count");
    let info = args.iter().any(|a| a == "--info");

    let lex = lexicon_cli::load_lexicon(lexicon_path.as_deref())
        .unwrap_or_else(|e| lexicon_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if info {
        match lex.dawg() {
            Some(dawg) => {
                let _ = writeln!(
                    out,
                    "automaton: {} edges, {} words, start {}",
                    dawg.edge_count(),
                    dawg.word_count(),
                    dawg.start()
                );
            }
            None => {
                let _ = writeln!(out, "automaton: none");
            }
        }
        let _ = writeln!(out, "added words: {}", lex.others().len());
        let _ = writeln!(out, "total: {}", lex.len());
        return;
    }

    if count_only {
        let _ = writeln!(out, "{}", lex.len());
        return;
    }

    for word in &lex {
        if writeln!(out, "{word}").is_err() {
            // Broken pipe (e.g. piped into `head`).
            break;
        }
    }
}
