//! Stateful front object for a UI: the current text, its suggestions and
//! ghost text, and the accept-suggestion event.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use crate::engine::Engine;
use crate::policy::{apply_suggestion, Suggestions};

#[derive(Debug, Default)]
struct SessionState {
    text: String,
    suggestions: Suggestions,
    /// Bumped on every buffer change; results computed for an older
    /// revision are discarded.
    revision: u64,
}

/// One text box worth of typing state over a shared [`Engine`].
///
/// Updates may arrive from several threads. The suggestion computation
/// runs outside the lock, and only the result for the latest recorded
/// buffer is ever committed.
pub struct Session {
    engine: Arc<Engine>,
    state: Mutex<SessionState>,
}

impl Session {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self {
            engine,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Record a new buffer and recompute its suggestions.
    ///
    /// Returns the committed suggestions, which belong to a newer buffer if
    /// another update overtook this one.
    pub fn update_text(&self, text: &str) -> Suggestions {
        let revision = self.record(text);
        let suggestions = self.engine.suggest(text);
        self.commit(revision, suggestions)
    }

    /// Store `text` as the current buffer and return its revision.
    fn record(&self, text: &str) -> u64 {
        let mut state = self.state.lock();
        state.revision += 1;
        state.text = text.to_string();
        state.revision
    }

    /// Keep `suggestions` only if `revision` is still the latest buffer.
    /// Returns whatever is committed afterwards.
    fn commit(&self, revision: u64, suggestions: Suggestions) -> Suggestions {
        let mut state = self.state.lock();
        if state.revision == revision {
            state.suggestions = suggestions;
        } else {
            debug!(
                stale = revision,
                latest = state.revision,
                "dropping stale suggestions"
            );
        }
        state.suggestions.clone()
    }

    /// Accept `word`: rewrite the buffer and recompute. Returns the new
    /// buffer.
    pub fn apply_suggestion(&self, word: &str) -> String {
        let text = {
            let state = self.state.lock();
            apply_suggestion(&state.text, word)
        };
        self.update_text(&text);
        text
    }

    /// Handle a key press. Enter accepts the top suggestion, if any.
    pub fn on_key_down(&self, key: &str) -> bool {
        if key != "Enter" {
            return false;
        }
        let top = self.state.lock().suggestions.words.first().cloned();
        match top {
            Some(word) => {
                self.apply_suggestion(&word);
                true
            }
            None => false,
        }
    }

    pub fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.state.lock().suggestions.words.clone()
    }

    pub fn ghost(&self) -> String {
        self.state.lock().suggestions.ghost.clone()
    }
}
