//! Corpus loading and text cleanup.
//!
//! Turns raw documents into the token sequences the engine is built from.
//!
//! # Corpus Format
//!
//! Corpus files hold one document per line:
//! ```text
//! Hello world, see www.example.com
//! how are you?
//! ```
//!
//! Each line is cleaned with [`clean_text`] and split with [`tokenize`];
//! lines that end up empty are skipped. A line never contains a blank
//! line, so the header/body split in [`clean_text`] only applies to
//! multi-line documents handed to [`preprocess`] directly.
//!
//! # Fallback Corpus
//!
//! If no corpus file is available, or it yields no documents, a tiny
//! built-in corpus is used so the engine always has a vocabulary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

use crate::error::Result;

/// A tokenized corpus: one token sequence per document.
pub type Corpus = Vec<Vec<String>>;

/// Normalize a raw document.
///
/// Keeps only the body after the first blank line (if any), lowercases,
/// drops URLs and e-mail addresses, replaces anything other than letters,
/// whitespace and `.,!?'` with spaces, and collapses whitespace.
pub fn clean_text(raw: &str) -> String {
    let body = match raw.split_once("\n\n") {
        Some((_, body)) => body,
        None => raw,
    };

    let body = body.to_lowercase();
    let mut cleaned = String::with_capacity(body.len());
    for token in body.split_whitespace() {
        let token = strip_url(token);
        if is_email(token) {
            continue;
        }

        let token: String = token
            .chars()
            .map(|ch| {
                if ch.is_ascii_lowercase() || matches!(ch, '.' | ',' | '!' | '?' | '\'') {
                    ch
                } else {
                    ' '
                }
            })
            .collect();

        for part in token.split_whitespace() {
            if !cleaned.is_empty() {
                cleaned.push(' ');
            }
            cleaned.push_str(part);
        }
    }
    cleaned
}

/// Cut a token at the first URL start (`http` or `www.` followed by at
/// least one more character), keeping whatever came before it.
fn strip_url(token: &str) -> &str {
    let url_start = |marker: &str| {
        token
            .match_indices(marker)
            .map(|(i, _)| i)
            .find(|&i| i + marker.len() < token.len())
    };

    match (url_start("http"), url_start("www.")) {
        (Some(a), Some(b)) => &token[..a.min(b)],
        (Some(i), None) | (None, Some(i)) => &token[..i],
        (None, None) => token,
    }
}

/// An `@` with something on both sides.
fn is_email(token: &str) -> bool {
    token
        .char_indices()
        .any(|(i, ch)| ch == '@' && i > 0 && i + 1 < token.len())
}

pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Clean and tokenize raw documents, skipping empty ones.
pub fn preprocess<I, S>(documents: I) -> Corpus
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    documents
        .into_iter()
        .map(|doc| tokenize(&clean_text(doc.as_ref())))
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

/// Read a corpus file with one document per line.
///
/// Lines are cleaned one by one, so no header/body split happens here.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }

    let corpus = preprocess(lines);
    info!(path = %path.display(), documents = corpus.len(), "loaded corpus");
    Ok(corpus)
}

/// Load `path` if given, falling back to [`fallback_corpus`] when it is
/// missing, unreadable, or empty.
pub fn load_or_fallback(path: Option<&Path>) -> Corpus {
    let Some(path) = path else {
        info!("no corpus configured; using fallback corpus");
        return fallback_corpus();
    };

    match load_corpus(path) {
        Ok(corpus) if !corpus.is_empty() => corpus,
        Ok(_) => {
            warn!(path = %path.display(), "corpus is empty after cleaning; using fallback corpus");
            fallback_corpus()
        }
        Err(e) => {
            warn!(path = %path.display(), "failed to load corpus: {e}; using fallback corpus");
            fallback_corpus()
        }
    }
}

/// Built-in corpus used when nothing else is available.
pub fn fallback_corpus() -> Corpus {
    let documents: [&[&str]; 4] = [
        &["hello", "world"],
        &["how", "are", "you"],
        &["hello", "there"],
        &["this", "is", "a", "demo"],
    ];
    documents
        .iter()
        .map(|doc| doc.iter().map(|w| w.to_string()).collect::<Vec<_>>())
        .collect()
}
