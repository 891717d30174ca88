use std::{env, fs, path::PathBuf, process, rc::Rc, time::Instant};

use transpiler::{
    display_error,
    lexer::{lexer::tokenize, tokens::KeywordSet},
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: transpiler <source file> [output file]");
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = match fs::read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: can't read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let keywords = select_keywords(&source);

    let start = Instant::now();

    let tokens = match tokenize(source, Some(String::from(file_name)), &keywords) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (_, result) = parse(tokens, Rc::new(String::from(file_name)), keywords);

    let output = match result {
        Ok(output) => output,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let output_path = match args.get(2) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(file_path).with_extension("c"),
    };

    if let Err(error) = fs::write(&output_path, output) {
        eprintln!("Error: can't write {}: {}", output_path.display(), error);
        process::exit(1);
    }

    println!("Wrote {}", output_path.display());
    println!("Total time: {:?}", start.elapsed());
}

/// Picks the keyword set from the first-line locale marker.
///
/// The marker line starts with `#!`, which the scanner already skips as a
/// comment. Only the English set ships; a localized front end drops in by
/// returning its own `KeywordSet` here.
fn select_keywords(source: &str) -> KeywordSet {
    let first_line = source.lines().next().unwrap_or("");

    if let Some(language) = first_line.strip_prefix("#!") {
        let language = language.trim();
        if !language.is_empty() && !language.eq_ignore_ascii_case("english") {
            println!(
                "Unknown language marker `{}`, using the English keyword set",
                language
            );
        }
    }

    KeywordSet::english()
}
