//! Error types shared by the suggestion engine and its collaborators.

/// Errors raised while building models or querying them.
///
/// "No match" is never an error: empty prefix matches, unseen contexts
/// and empty corpora all produce empty results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The n-gram order must be at least 1.
    #[error("n-gram order must be at least 1, got {0}")]
    InvalidOrder(usize),

    /// A next-word query was given fewer tokens than the model order.
    #[error("context has {got} tokens but the model needs at least {needed}")]
    InsufficientContext { needed: usize, got: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] confy::ConfyError),
}

pub type Result<T> = std::result::Result<T, Error>;
