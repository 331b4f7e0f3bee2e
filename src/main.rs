use anyhow::Result;
use clap::{Parser, Subcommand};
use concord::{default_data_dir, or_na, AppState, NA};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "Strong's lexicon lookup, search, and verse annotation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the lexicon tables and kjv.sqlite
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a lexicon entry by key (G26, H7225)
    Lookup { key: String },
    /// Fetch a passage; append -strongs to annotate it
    Passage {
        /// Reference such as "John 3:16" or "Proverbs 25:2-3 -strongs"
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        reference: Vec<String>,
    },
    /// Search the lexicon; -g / -h restrict the language
    Search {
        /// Keyword, optionally with -g / -h flag tokens
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        keyword: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let state = AppState::new(data_dir)?;

    match cli.command {
        Commands::Lookup { key } => lookup(&state, &key),
        Commands::Passage { reference } => passage(&state, &reference.join(" ")),
        Commands::Search { keyword } => search(&state, &keyword.join(" ")),
    }
}

fn lookup(state: &AppState, key: &str) -> Result<()> {
    let entry = match state.lookup_entry(key) {
        Some(entry) => entry,
        None => {
            println!("Strong's key {key} not found (keys look like G26 or H7225)");
            return Ok(());
        }
    };

    let related = entry.related_keys();
    println!("Strong's {}", entry.key);
    println!("Lemma: {}", or_na(entry.lemma.as_deref()));
    println!("Transliteration: {}", or_na(entry.translit.as_deref()));
    println!("Definition: {}", or_na(entry.strongs_def.as_deref()));
    println!("Derivation: {}", or_na(entry.derivation.as_deref()));
    if related.is_empty() {
        println!("Related: {NA}");
    } else {
        println!("Related: {}", related.join(", "));
    }
    println!("KJV definition: {}", or_na(entry.kjv_def.as_deref()));
    Ok(())
}

fn passage(state: &AppState, raw: &str) -> Result<()> {
    let passage = state.passage(raw)?;
    let reference = &passage.reference;
    for verse in &passage.verses {
        match &verse.text {
            Some(text) => println!(
                "{} {}:{} - {}",
                reference.book, reference.chapter, verse.verse, text
            ),
            None => println!(
                "{} {}:{} - Verse not found!",
                reference.book, reference.chapter, verse.verse
            ),
        }
    }
    Ok(())
}

fn search(state: &AppState, raw: &str) -> Result<()> {
    let results = state.search(raw);
    if results.is_empty() {
        println!("No results for '{raw}'");
        return Ok(());
    }

    for entry in results {
        println!("{} [{}]", entry.key, entry.language);
        println!("  Lemma: {}", or_na(entry.lemma.as_deref()));
        println!("  Transliteration: {}", or_na(entry.translit.as_deref()));
        println!("  Definition: {}", or_na(entry.strongs_def.as_deref()));
        println!("  KJV definition: {}", or_na(entry.kjv_def.as_deref()));
    }
    Ok(())
}
