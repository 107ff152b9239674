//! Per-keystroke suggestion policy.
//!
//! Every call recomputes the suggestion list and ghost text from the full
//! current buffer; nothing is carried over between keystrokes.
//!
//! The buffer is first classified into a [`BufferState`]:
//! - empty or whitespace only: no suggestions
//! - ends in whitespace: a word was just finished, predict the next one
//! - otherwise: a word is in progress, complete it
//!
//! Short lists are then backfilled from global word frequency so the UI
//! always gets [`SUGGESTION_COUNT`] entries when the vocabulary allows it.

use tracing::debug;

use crate::completor::WordCompletor;
use crate::error::Error;
use crate::ngram::NGramModel;

/// Number of suggestions shown per keystroke.
pub const SUGGESTION_COUNT: usize = 3;

/// What the user is doing, judged from the shape of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferState<'a> {
    Empty,
    /// Buffer ends in whitespace. `context` holds every token typed.
    WordJustCompleted { context: Vec<&'a str> },
    /// Buffer ends mid-token. `context` includes the unfinished `prefix`.
    WordInProgress {
        prefix: &'a str,
        context: Vec<&'a str>,
    },
}

impl<'a> BufferState<'a> {
    pub fn from_buffer(buffer: &'a str) -> Self {
        let context: Vec<&str> = buffer.split_whitespace().collect();
        let Some(&prefix) = context.last() else {
            return BufferState::Empty;
        };

        if buffer.ends_with(char::is_whitespace) {
            BufferState::WordJustCompleted { context }
        } else {
            BufferState::WordInProgress { prefix, context }
        }
    }
}

/// Ranked suggestions plus the grayed-out preview text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    pub words: Vec<String>,
    /// Untyped remainder of the top suggestion. When the top suggestion
    /// does not extend the current prefix this is the whole word, to be
    /// inserted rather than appended.
    pub ghost: String,
}

impl Suggestions {
    pub fn top(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The interactive policy over a frozen completor and n-gram model.
#[derive(Clone, Copy)]
pub struct SuggestionPolicy<'a> {
    completor: &'a WordCompletor,
    model: &'a NGramModel,
}

impl<'a> SuggestionPolicy<'a> {
    pub fn new(completor: &'a WordCompletor, model: &'a NGramModel) -> Self {
        Self { completor, model }
    }

    /// Compute suggestions and ghost text for the full current buffer.
    pub fn suggest(&self, buffer: &str) -> Suggestions {
        let state = BufferState::from_buffer(buffer);
        debug!(?state, "dispatching buffer state");

        match state {
            BufferState::Empty => Suggestions::default(),
            BufferState::WordJustCompleted { context } => {
                let mut words = self.next_words(&context);
                words.truncate(SUGGESTION_COUNT);
                let words = self.backfill(words);
                let ghost = words.first().cloned().unwrap_or_default();
                Suggestions { words, ghost }
            }
            BufferState::WordInProgress { prefix, context } => {
                let mut words: Vec<String> = self
                    .completor
                    .ranked(prefix)
                    .into_iter()
                    .take(SUGGESTION_COUNT)
                    .map(|(word, _)| word)
                    .collect();

                if words.len() < SUGGESTION_COUNT {
                    for word in self.next_words(&context) {
                        if words.len() == SUGGESTION_COUNT {
                            break;
                        }
                        if !words.contains(&word) {
                            words.push(word);
                        }
                    }
                }

                let words = self.backfill(words);
                let ghost = match words.first() {
                    Some(top) => top.strip_prefix(prefix).unwrap_or(top.as_str()).to_string(),
                    None => String::new(),
                };
                Suggestions { words, ghost }
            }
        }
    }

    /// Next-word candidates in model order. A context shorter than the
    /// model order means no candidates.
    fn next_words(&self, context: &[&str]) -> Vec<String> {
        match self.model.get_next_words_and_probs(context) {
            Ok((words, _)) => words,
            Err(Error::InsufficientContext { needed, got }) => {
                debug!(needed, got, "context shorter than model order");
                Vec::new()
            }
            Err(e) => {
                debug!("next-word query failed: {e}");
                Vec::new()
            }
        }
    }

    /// Pad `words` with the most frequent vocabulary words not already
    /// present, up to [`SUGGESTION_COUNT`].
    fn backfill(&self, mut words: Vec<String>) -> Vec<String> {
        if words.len() >= SUGGESTION_COUNT {
            words.truncate(SUGGESTION_COUNT);
            return words;
        }

        for (word, _) in self.completor.ranked("") {
            if words.len() == SUGGESTION_COUNT {
                break;
            }
            if !words.contains(&word) {
                words.push(word);
            }
        }
        words
    }
}

/// Replace the word being typed with `word` and start a new one.
///
/// A buffer ending in whitespace gets `word` appended; otherwise the last
/// token is replaced and the buffer is re-joined with single spaces.
pub fn apply_suggestion(buffer: &str, word: &str) -> String {
    if buffer.trim().is_empty() {
        return format!("{word} ");
    }
    if buffer.ends_with(char::is_whitespace) {
        return format!("{buffer}{word} ");
    }

    let mut tokens: Vec<&str> = buffer.split_whitespace().collect();
    if let Some(last) = tokens.last_mut() {
        *last = word;
    }
    format!("{} ", tokens.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn corpus() -> Vec<Vec<&'static str>> {
        vec![
            vec!["hello", "world"],
            vec!["hello", "there"],
            vec!["how", "are", "you"],
        ]
    }

    fn models(order: usize) -> (WordCompletor, NGramModel) {
        let corpus = corpus();
        (
            WordCompletor::new(&corpus, 1),
            NGramModel::new(&corpus, order).unwrap(),
        )
    }

    #[test]
    fn test_buffer_state() {
        assert_eq!(BufferState::from_buffer(""), BufferState::Empty);
        assert_eq!(BufferState::from_buffer(" \t "), BufferState::Empty);
        assert_eq!(
            BufferState::from_buffer("hello wo"),
            BufferState::WordInProgress {
                prefix: "wo",
                context: vec!["hello", "wo"],
            }
        );
        assert_eq!(
            BufferState::from_buffer("  hello\n"),
            BufferState::WordJustCompleted {
                context: vec!["hello"],
            }
        );
    }

    #[test]
    fn test_empty_buffer() {
        let (completor, model) = models(1);
        let policy = SuggestionPolicy::new(&completor, &model);

        assert_eq!(policy.suggest(""), Suggestions::default());
        assert_eq!(policy.suggest("   "), Suggestions::default());
    }

    #[test]
    fn test_word_in_progress() {
        let (completor, model) = models(1);
        let policy = SuggestionPolicy::new(&completor, &model);

        let result = policy.suggest("hel");
        assert_eq!(result.words, vec!["hello", "are", "how"]);
        assert_eq!(result.ghost, "lo");
    }

    #[test]
    fn test_word_just_completed() {
        let (completor, model) = models(1);
        let policy = SuggestionPolicy::new(&completor, &model);

        let result = policy.suggest("hello ");
        assert_eq!(result.words, vec!["there", "world", "hello"]);
        assert_eq!(result.ghost, "there");
    }

    #[test]
    fn test_unseen_context_backfills_globally() {
        let (completor, model) = models(1);
        let policy = SuggestionPolicy::new(&completor, &model);

        let result = policy.suggest("you ");
        assert_eq!(result.words, vec!["hello", "are", "how"]);
        assert_eq!(result.ghost, "hello");
    }

    #[test]
    fn test_no_completion_uses_full_word_ghost() {
        let (completor, model) = models(1);
        let policy = SuggestionPolicy::new(&completor, &model);

        let result = policy.suggest("hello x");
        assert_eq!(result.words, vec!["hello", "are", "how"]);
        assert_eq!(result.ghost, "hello");
    }

    #[test]
    fn test_prefix_as_context_pads_completions() {
        // "how" is both a full word and a context for "are".
        let (completor, model) = models(1);
        let policy = SuggestionPolicy::new(&completor, &model);

        let result = policy.suggest("how");
        assert_eq!(result.words, vec!["how", "are", "hello"]);
        assert_eq!(result.ghost, "");
    }

    #[test]
    fn test_insufficient_context_maps_to_backfill() {
        let (completor, model) = models(2);
        let policy = SuggestionPolicy::new(&completor, &model);

        let result = policy.suggest("hello ");
        assert_eq!(result.words, vec!["hello", "are", "how"]);
    }

    #[test]
    fn test_small_vocabulary_is_exhausted() {
        let corpus = vec![vec!["one", "two"]];
        let completor = WordCompletor::new(&corpus, 1);
        let model = NGramModel::new(&corpus, 1).unwrap();
        let policy = SuggestionPolicy::new(&completor, &model);

        assert_eq!(policy.suggest("one ").words, vec!["two", "one"]);
    }

    #[test]
    fn test_apply_suggestion() {
        assert_eq!(apply_suggestion("", "hello"), "hello ");
        assert_eq!(apply_suggestion("  ", "hello"), "hello ");
        assert_eq!(apply_suggestion("hel", "hello"), "hello ");
        assert_eq!(apply_suggestion("say  hel", "hello"), "say hello ");
        assert_eq!(apply_suggestion("hello ", "there"), "hello there ");
    }

    #[test]
    fn test_accept_round_trip() {
        let (completor, model) = models(1);
        let policy = SuggestionPolicy::new(&completor, &model);

        let typed = policy.suggest("hel");
        let buffer = apply_suggestion("hel", typed.top().unwrap());
        assert_eq!(buffer, "hello ");
        assert_eq!(policy.suggest(&buffer), policy.suggest("hello "));
    }

    proptest! {
        #[test]
        fn test_policy_is_deterministic(buffer in "[a-z ]{0,20}") {
            let (completor, model) = models(1);
            let policy = SuggestionPolicy::new(&completor, &model);

            prop_assert_eq!(policy.suggest(&buffer), policy.suggest(&buffer));
        }

        #[test]
        fn test_backfill_fills_to_count(buffer in "[a-z ]{0,20}") {
            let (completor, model) = models(1);
            let policy = SuggestionPolicy::new(&completor, &model);
            let result = policy.suggest(&buffer);

            if buffer.trim().is_empty() {
                prop_assert!(result.is_empty());
            } else {
                prop_assert_eq!(result.words.len(), SUGGESTION_COUNT);
                let mut unique = result.words.clone();
                unique.sort();
                unique.dedup();
                prop_assert_eq!(unique.len(), SUGGESTION_COUNT);
            }
        }
    }
}
