//! Typeahead - real-time word and phrase completion.
//!
//! # Overview
//!
//! The engine combines prefix-based word completion with n-gram next-word
//! prediction. Models are built once from a tokenized corpus and are
//! read-only afterwards.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  UI / REPL      │ ← Sends the whole buffer on every change (main.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Session        │ ← Current text, last-keystroke-wins (session.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Policy         │ ← Mid-word vs. word-finished, backfill, ghost (policy.rs)
//! └───┬─────────┬───┘
//!     │         │
//!     ▼         ▼
//! ┌─────────┐ ┌────────┐
//! │Completor│ │ N-gram │ ← Word frequencies (completor.rs), next words (ngram.rs)
//! └────┬────┘ └────────┘
//!      ▼
//! ┌─────────┐
//! │  Trie   │ ← Prefix index (trie.rs)
//! └─────────┘
//! ```
//!
//! # Modules
//!
//! - `trie`: prefix tree over the vocabulary
//! - `completor`: word frequencies and prefix completion
//! - `ngram`: fixed-order context model
//! - `suggestion`: greedy full-continuation suggestions
//! - `policy`: per-keystroke suggestions and ghost text
//! - `engine`: the frozen model bundle
//! - `session`: typing state for a single text box
//! - `corpus`: corpus files, cleanup, fallback corpus
//! - `config`: persisted settings

pub mod completor;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod ngram;
pub mod policy;
pub mod session;
pub mod suggestion;
pub mod trie;

pub use completor::WordCompletor;
pub use config::Config;
pub use engine::Engine;
pub use error::{Error, Result};
pub use ngram::NGramModel;
pub use policy::{apply_suggestion, BufferState, SuggestionPolicy, Suggestions, SUGGESTION_COUNT};
pub use session::Session;
pub use suggestion::TextSuggestion;
pub use trie::PrefixTree;
