use std::io::{stdin, stdout, Write};
use std::{env, fs, process};

use crossterm::style::Stylize;
use suggest_core::{MatchType, SuggestEngine};

/// Demo vocabulary used when no word list is given on the command line.
const DEFAULT_CORPUS: &[&str] = &[
    "javascript", "typescript", "react", "angular", "vue", "svelte", "node js", "deno",
    "python", "django", "flask", "fastapi", "java", "spring boot", "kotlin",
    "data structures", "algorithms", "system design", "machine learning",
    "artificial intelligence", "deep learning", "natural language processing",
    "computer vision", "web development", "mobile development", "devops",
    "cloud computing", "aws", "google cloud", "azure", "docker", "kubernetes",
    "git", "github", "agile", "scrum", "sql", "postgresql", "mongodb", "redis",
];

fn main() {
    let mut engine = SuggestEngine::new();

    match env::args().nth(1) {
        Some(path) => match load_word_list(&path) {
            Ok(words) => engine.initialize(&words),
            Err(e) => {
                eprintln!("could not load word list '{path}': {e}");
                process::exit(1);
            }
        },
        None => {
            engine.initialize(DEFAULT_CORPUS.iter().copied());
            // Bias a few entries so frequency ranking is visible in the demo.
            for word in ["javascript", "javascript", "python", "react"] {
                let _ = engine.add_word(word);
            }
        }
    }

    println!("{}", "Autosuggest demo.".bold());
    println!("Type a prefix for suggestions. Commands: ':add <word>', ':json <query>', 'exit'.");

    loop {
        print!("\n> ");
        stdout().flush().unwrap();

        let mut line = String::new();
        if stdin().read_line(&mut line).unwrap() == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "exit" => break,
            s if s.starts_with(":add") => {
                let word = s[4..].trim();
                match engine.add_word(word) {
                    Ok(()) => println!("\"{}\" added to corpus!", word.to_lowercase()),
                    Err(e) => println!("{} {e}", "error:".to_string().red()),
                }
            }
            s if s.starts_with(":json") => {
                let results = engine.search(s[5..].trim());
                println!("{}", serde_json::to_string_pretty(&results).unwrap());
            }
            query => print_suggestions(&engine, query),
        }
    }
}

fn load_word_list(path: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn print_suggestions(engine: &SuggestEngine, query: &str) {
    let results = engine.search(query);
    if results.is_empty() {
        println!("{}", "No suggestions found.".to_string().dark_grey());
        return;
    }
    for (i, s) in results.iter().enumerate() {
        let tag = match s.match_type {
            MatchType::Prefix => format!("count {:.0}", s.score).green(),
            MatchType::Fuzzy => format!("fuzzy {:.2}", s.score).yellow(),
        };
        println!("  {}. {}  [{tag}]", i + 1, s.word.as_str().bold());
    }
}
