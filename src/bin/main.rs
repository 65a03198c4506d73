use crossterm::style::Stylize;
use search_core::loader::{load_author_table, load_corpus};
use search_core::{AuthorTable, DisplayScript, SearchEngine};
use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::process::exit;

const RESULT_LIMIT: usize = 5;

fn main() {
    let mut args = std::env::args().skip(1);
    let corpus_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: search_engine <corpus.txt> [authors.json]");
            exit(2);
        }
    };

    let authors = match args.next() {
        Some(path) => match load_author_table(Path::new(&path)) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("[ERROR] Could not load author table: {}", e);
                exit(1);
            }
        },
        None => AuthorTable::known(),
    };

    let raw = match load_corpus(Path::new(&corpus_path)) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("[ERROR] Could not load corpus: {}", e);
            exit(1);
        }
    };

    let mut engine = SearchEngine::new(authors);
    engine.load_corpus(&raw);

    println!("Bhajan Smart Search");
    println!("---------------------------------------------------------------");
    println!(
        "Loaded {} records from '{}'.",
        engine.records().len(),
        corpus_path
    );
    println!("Type a query. ':dev' / ':iast' switch display script, 'exit' quits.");

    let mut script = DisplayScript::Devanagari;
    loop {
        print!("\n> ");
        let _ = stdout().flush();

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() || input.is_empty() {
            break;
        }
        let query = input.trim();

        match query {
            "exit" => break,
            "" => continue,
            ":dev" => {
                script = DisplayScript::Devanagari;
                println!("Display script: Devanagari");
                continue;
            }
            ":iast" => {
                script = DisplayScript::Iast;
                println!("Display script: IAST");
                continue;
            }
            _ => {}
        }

        let hits = engine.search(query, script, RESULT_LIMIT);
        if hits.is_empty() {
            println!("{}", "No matches.".dark_grey());
            continue;
        }

        for (i, hit) in hits.iter().enumerate() {
            let title = match script {
                DisplayScript::Devanagari => hit.record.title.as_str(),
                DisplayScript::Iast => hit.record.title_display_alt.as_str(),
            };
            let number = hit.record.song_number.as_deref().unwrap_or("-");
            println!(
                "{} {}  {}",
                format!("{}.", i + 1).bold(),
                title.cyan(),
                format!("[#{} score {}]", number, hit.score).dark_grey()
            );
            if let Some(author) = &hit.record.author {
                let name = match script {
                    DisplayScript::Devanagari => author.name.as_str(),
                    DisplayScript::Iast => author.name_display_alt.as_str(),
                };
                println!("   by {}", name);
            }
            if let Some(snippet) = &hit.snippet {
                println!("   {}", snippet.as_str().green());
            }
        }
    }
}
