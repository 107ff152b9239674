//! Full-continuation suggestions.
//!
//! Completes the trailing token of a text with the most frequent matching
//! word, then greedily extends it with the most probable next word from
//! the n-gram model.

use tracing::debug;

use crate::completor::WordCompletor;
use crate::error::Error;
use crate::ngram::NGramModel;

/// Combines word completion and n-gram prediction.
#[derive(Clone, Copy)]
pub struct TextSuggestion<'a> {
    completor: &'a WordCompletor,
    model: &'a NGramModel,
}

impl<'a> TextSuggestion<'a> {
    pub fn new(completor: &'a WordCompletor, model: &'a NGramModel) -> Self {
        Self { completor, model }
    }

    /// Split `text` on whitespace and suggest a continuation.
    pub fn suggest_text(&self, text: &str, n_words: usize, n_texts: usize) -> Vec<Vec<String>> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        self.suggest_tokens(&tokens, n_words, n_texts)
    }

    /// Suggest a continuation for an already tokenized text.
    ///
    /// Each continuation starts with the completed last token, followed by
    /// up to `n_words` predicted words. Only a single continuation is ever
    /// produced; `n_texts` is accepted for call-site compatibility.
    pub fn suggest_tokens<T>(&self, tokens: &[T], n_words: usize, _n_texts: usize) -> Vec<Vec<String>>
    where
        T: AsRef<str>,
    {
        let Some((last, head)) = tokens.split_last() else {
            return Vec::new();
        };

        let (words, probs) = self.completor.get_words_and_probs(last.as_ref());
        let Some(best) = argmax(&probs) else {
            return Vec::new();
        };
        let completed = words[best].clone();

        let mut context: Vec<String> = head.iter().map(|t| t.as_ref().to_string()).collect();
        context.push(completed.clone());
        let mut continuation = vec![completed];

        for _ in 0..n_words {
            let (next_words, next_probs) = match self.model.get_next_words_and_probs(&context) {
                Ok(result) => result,
                Err(Error::InsufficientContext { needed, got }) => {
                    debug!(needed, got, "context too short, stopping continuation");
                    break;
                }
                Err(e) => {
                    debug!("next-word query failed: {e}");
                    break;
                }
            };
            let Some(best) = argmax(&next_probs) else {
                break;
            };
            let word = next_words[best].clone();
            context.push(word.clone());
            continuation.push(word);
        }

        vec![continuation]
    }
}

/// Index of the largest value; the first one wins on ties.
fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, value) in values.iter().enumerate() {
        match best {
            Some(j) if values[j] >= *value => {}
            _ => best = Some(i),
        }
    }
    best
}
