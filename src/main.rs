//! Typeahead - command-line front end for the suggestion engine.
//!
//! # Usage
//!
//! ```text
//! typeahead "hello wo"        # one-shot suggestions for a buffer
//! typeahead --corpus mail.txt # interactive REPL over stdin
//! ```
//!
//! In the REPL each input line replaces the whole buffer, so a trailing
//! space means "word finished". Commands:
//! - empty line or `:accept`: accept the top suggestion (Enter)
//! - `:continue`: print a full continuation of the current buffer
//! - `:quit`: exit
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `info`).

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use typeahead::{corpus, Config, Engine, Session, Suggestions};

#[derive(Parser, Debug)]
#[command(name = "typeahead")]
#[command(about = "Word and phrase completion from an n-gram model")]
#[command(version)]
struct Args {
    /// Corpus file, one document per line
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// N-gram context length
    #[arg(short, long)]
    order: Option<usize>,

    /// Drop words seen fewer times than this
    #[arg(long)]
    min_freq: Option<u64>,

    /// Words to predict after the completed word
    #[arg(short, long)]
    words: Option<usize>,

    /// Persist the effective settings to the config file
    #[arg(long)]
    save_config: bool,

    /// Buffer to complete; starts the REPL when omitted
    text: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(path) = args.corpus {
        config.corpus_path = Some(path);
    }
    if let Some(order) = args.order {
        config.ngram_order = order;
    }
    if let Some(min_freq) = args.min_freq {
        config.min_freq = min_freq;
    }
    if let Some(words) = args.words {
        config.continuation_words = words;
    }

    if args.save_config {
        if let Err(err) = config.save() {
            warn!("Failed to persist config: {err}");
        }
    }

    let corpus = corpus::load_or_fallback(config.resolved_corpus_path().as_deref());
    let engine = Arc::new(Engine::build(
        &corpus,
        config.ngram_order,
        config.min_freq,
    )?);

    if let Some(text) = args.text {
        print_suggestions(&engine.suggest(&text));
        print_continuation(&engine, &text, config.continuation_words);
        return Ok(());
    }

    run_repl(Session::new(Arc::clone(&engine)), &engine, &config)?;
    Ok(())
}

fn run_repl(session: Session, engine: &Engine, config: &Config) -> io::Result<()> {
    info!("Typeahead ready. Type text, Enter accepts, :quit exits.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.as_str() {
            ":quit" => break,
            "" | ":accept" => {
                if session.on_key_down("Enter") {
                    println!("{}", session.text());
                } else {
                    println!("(no suggestions)");
                }
            }
            ":continue" => {
                print_continuation(engine, &session.text(), config.continuation_words);
                write!(stdout, "> ")?;
                stdout.flush()?;
                continue;
            }
            text => {
                session.update_text(text);
            }
        }

        print_suggestions(&Suggestions {
            words: session.suggestions(),
            ghost: session.ghost(),
        });
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}

fn print_suggestions(suggestions: &Suggestions) {
    if suggestions.is_empty() {
        println!("(no suggestions)");
        return;
    }
    println!("suggestions: {}", suggestions.words.join(" | "));
    println!("ghost: {:?}", suggestions.ghost);
}

fn print_continuation(engine: &Engine, text: &str, n_words: usize) {
    let continuation = engine.continuation(text, n_words);
    if continuation.is_empty() {
        println!("continuation: (none)");
    } else {
        println!("continuation: {}", continuation.join(" "));
    }
}
