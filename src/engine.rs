//! The frozen model bundle shared by every query site.

use tracing::info;

use crate::completor::WordCompletor;
use crate::error::Result;
use crate::ngram::NGramModel;
use crate::policy::{SuggestionPolicy, Suggestions};
use crate::suggestion::TextSuggestion;

/// Word completor and n-gram model built once from a corpus.
///
/// Nothing is mutated after [`Engine::build`], so an `Arc<Engine>` can be
/// queried from any number of threads without locking.
pub struct Engine {
    completor: WordCompletor,
    model: NGramModel,
}

impl Engine {
    /// Build both models from the same tokenized corpus.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOrder`] if `order` is 0.
    pub fn build<D, T>(corpus: &[D], order: usize, min_freq: u64) -> Result<Self>
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let model = NGramModel::new(corpus, order)?;
        let completor = WordCompletor::new(corpus, min_freq);

        info!(
            documents = corpus.len(),
            vocabulary = completor.vocabulary_size(),
            contexts = model.context_count(),
            order,
            "engine ready"
        );
        Ok(Self { completor, model })
    }

    pub fn completor(&self) -> &WordCompletor {
        &self.completor
    }

    pub fn model(&self) -> &NGramModel {
        &self.model
    }

    pub fn policy(&self) -> SuggestionPolicy<'_> {
        SuggestionPolicy::new(&self.completor, &self.model)
    }

    pub fn suggester(&self) -> TextSuggestion<'_> {
        TextSuggestion::new(&self.completor, &self.model)
    }

    /// Per-keystroke suggestions for the full current buffer.
    pub fn suggest(&self, buffer: &str) -> Suggestions {
        self.policy().suggest(buffer)
    }

    /// A single greedy continuation of `text`.
    pub fn continuation(&self, text: &str, n_words: usize) -> Vec<String> {
        self.suggester()
            .suggest_text(text, n_words, 1)
            .into_iter()
            .next()
            .unwrap_or_default()
    }
}
