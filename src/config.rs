use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::error::Result;

const APP_NAME: &str = "typeahead";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Corpus file with one document per line.
    pub corpus_path: Option<PathBuf>,
    pub ngram_order: usize,
    pub min_freq: u64,
    /// Words predicted after the completed word in a continuation.
    pub continuation_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: None,
            ngram_order: 2,
            min_freq: 1,
            continuation_words: 3,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match confy::load(APP_NAME, Some("config")) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!("Failed to load config, using defaults: {err}");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, Some("config"), self)?;
        Ok(())
    }

    /// The configured corpus, or `<data dir>/typeahead/corpus.txt` when
    /// that file exists.
    pub fn resolved_corpus_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.corpus_path {
            return Some(path.clone());
        }

        let path = dirs::data_dir()?.join(APP_NAME).join("corpus.txt");
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ngram_order, 2);
        assert_eq!(config.min_freq, 1);
        assert_eq!(config.continuation_words, 3);
    }

    #[test]
    fn test_explicit_corpus_path_wins() {
        let config = Config {
            corpus_path: Some(PathBuf::from("/tmp/corpus.txt")),
            ..Config::default()
        };
        assert_eq!(
            config.resolved_corpus_path(),
            Some(PathBuf::from("/tmp/corpus.txt"))
        );
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            ngram_order: 3,
            min_freq: 2,
            ..Config::default()
        };

        confy::store_path(&path, &config).unwrap();
        let loaded: Config = confy::load_path(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
