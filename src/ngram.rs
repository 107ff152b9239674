//! N-gram context model for next-word prediction.
//!
//! For a fixed order N the model maps every observed window of N tokens
//! to the counts of the token that followed it. Probabilities are raw
//! relative frequencies within a context; there is no smoothing and no
//! backoff, so an unseen context simply yields no candidates.
//!
//! Results are ordered by descending count, ties broken lexicographically,
//! so repeated queries against the same model always agree.

use ahash::AHashMap;
use tracing::debug;

use crate::error::{Error, Result};

/// Next-token counts observed after one context.
#[derive(Debug, Default, Clone)]
struct ContextEntry {
    next_counts: AHashMap<String, u64>,
    /// Always equals the sum of `next_counts`.
    total: u64,
}

/// A fixed-order n-gram model.
pub struct NGramModel {
    order: usize,
    contexts: AHashMap<Vec<String>, ContextEntry>,
}

impl NGramModel {
    /// Count every context of `order` tokens and its successor.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrder`] if `order` is 0.
    pub fn new<D, T>(corpus: &[D], order: usize) -> Result<Self>
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        if order < 1 {
            return Err(Error::InvalidOrder(order));
        }

        let mut contexts: AHashMap<Vec<String>, ContextEntry> = AHashMap::new();
        for doc in corpus {
            let tokens: Vec<&str> = doc.as_ref().iter().map(|t| t.as_ref()).collect();
            if tokens.len() <= order {
                continue;
            }

            for window in tokens.windows(order + 1) {
                let (context, next) = window.split_at(order);
                let key: Vec<String> = context.iter().map(|t| t.to_string()).collect();
                let entry = contexts.entry(key).or_default();
                *entry.next_counts.entry(next[0].to_string()).or_insert(0) += 1;
                entry.total += 1;
            }
        }

        debug!(order, contexts = contexts.len(), "n-gram model built");
        Ok(Self { order, contexts })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// Predict the next token from the last `order` tokens of `tokens`.
    ///
    /// Probabilities partition the context's count mass, so they sum to 1
    /// for any observed context. An unseen context returns two empty
    /// vectors.
    ///
    /// # Errors
    /// Returns [`Error::InsufficientContext`] if `tokens` is shorter than
    /// the model order.
    pub fn get_next_words_and_probs<T>(&self, tokens: &[T]) -> Result<(Vec<String>, Vec<f64>)>
    where
        T: AsRef<str>,
    {
        if tokens.len() < self.order {
            return Err(Error::InsufficientContext {
                needed: self.order,
                got: tokens.len(),
            });
        }

        let key: Vec<String> = tokens[tokens.len() - self.order..]
            .iter()
            .map(|t| t.as_ref().to_string())
            .collect();
        let Some(entry) = self.contexts.get(&key) else {
            return Ok((Vec::new(), Vec::new()));
        };

        let mut ranked: Vec<(&String, u64)> =
            entry.next_counts.iter().map(|(w, &c)| (w, c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let total = entry.total as f64;
        let (words, probs) = ranked
            .into_iter()
            .map(|(word, count)| (word.clone(), count as f64 / total))
            .unzip();
        Ok((words, probs))
    }
}
