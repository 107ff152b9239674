//! Word completion from corpus frequencies.
//!
//! Counts every token in the corpus, optionally drops rare words, and
//! answers prefix queries with relative frequencies. Probabilities are
//! fractions of the whole corpus and are never renormalized over the
//! returned subset.

use ahash::AHashMap;
use tracing::debug;

use crate::trie::PrefixTree;

/// Frequency-weighted prefix completion.
pub struct WordCompletor {
    /// Retained vocabulary: word → occurrence count.
    counts: AHashMap<String, u64>,
    /// Sum of all retained counts.
    total_count: u64,
    prefix_tree: PrefixTree,
}

impl WordCompletor {
    /// Build a completor from a tokenized corpus.
    ///
    /// Words seen fewer than `min_freq` times are dropped when
    /// `min_freq > 1`.
    pub fn new<D, T>(corpus: &[D], min_freq: u64) -> Self
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        for doc in corpus {
            for token in doc.as_ref() {
                *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
            }
        }

        if min_freq > 1 {
            counts.retain(|_, count| *count >= min_freq);
        }

        let total_count: u64 = counts.values().sum();
        let prefix_tree = PrefixTree::from_words(counts.keys());

        debug!(
            vocabulary = prefix_tree.word_count(),
            total_count, min_freq, "word completor built"
        );

        Self {
            counts,
            total_count,
            prefix_tree,
        }
    }

    /// Return words starting with `prefix` and their corpus frequencies.
    ///
    /// An empty prefix lists the whole vocabulary. Both vectors are empty
    /// when nothing matches or the retained vocabulary is empty.
    pub fn get_words_and_probs(&self, prefix: &str) -> (Vec<String>, Vec<f64>) {
        let words = self.prefix_tree.search_prefix(prefix);
        if words.is_empty() || self.total_count == 0 {
            return (Vec::new(), Vec::new());
        }

        let total = self.total_count as f64;
        let probs = words
            .iter()
            .map(|word| self.count(word) as f64 / total)
            .collect();
        (words, probs)
    }

    /// Candidates for `prefix` sorted by descending probability.
    ///
    /// The sort is stable, so equal probabilities keep trie order.
    pub fn ranked(&self, prefix: &str) -> Vec<(String, f64)> {
        let (words, probs) = self.get_words_and_probs(prefix);
        let mut ranked: Vec<(String, f64)> = words.into_iter().zip(probs).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Occurrence count of a retained word, 0 if absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }
}
