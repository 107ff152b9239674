//! Prefix tree over the vocabulary.
//!
//! Children are kept in a `BTreeMap`, so a depth-first walk visits words in
//! lexicographic order. Every ranking step downstream is a stable sort, which
//! makes this order the tie-break for equally frequent words.

use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
struct Node {
    children: BTreeMap<char, Node>,
    is_word: bool,
}

/// A set of words supporting "every word starting with P" queries.
#[derive(Debug, Default, Clone)]
pub struct PrefixTree {
    root: Node,
    word_count: usize,
}

impl PrefixTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a word list. Duplicates are harmless.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for word in words {
            tree.insert(word.as_ref());
        }
        tree
    }

    /// Add a word. Inserting a word that is already present is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.is_word)
    }

    /// Return every stored word that starts with `prefix`, in depth-first
    /// order. An empty prefix returns the whole vocabulary.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        // Explicit stack so long shared prefixes can't overflow the call stack.
        let mut results = Vec::new();
        let mut stack: Vec<(&Node, String)> = vec![(start, prefix.to_string())];
        while let Some((node, word)) = stack.pop() {
            if node.is_word {
                results.push(word.clone());
            }
            for (ch, child) in node.children.iter().rev() {
                let mut next = word.clone();
                next.push(*ch);
                stack.push((child, next));
            }
        }
        results
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    fn find(&self, prefix: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_search_prefix() {
        let tree = PrefixTree::from_words(["hello", "help", "world", "he"]);

        assert_eq!(tree.search_prefix("hel"), vec!["hello", "help"]);
        assert_eq!(tree.search_prefix("he"), vec!["he", "hello", "help"]);
        assert!(tree.search_prefix("x").is_empty());
        assert!(tree.search_prefix("helloo").is_empty());
    }

    #[test]
    fn test_empty_prefix_returns_everything() {
        let tree = PrefixTree::from_words(["b", "a", "ab"]);
        assert_eq!(tree.search_prefix(""), vec!["a", "ab", "b"]);
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let mut tree = PrefixTree::new();
        assert!(tree.is_empty());
        assert!(tree.search_prefix("").is_empty());

        tree.insert("demo");
        tree.insert("demo");

        assert_eq!(tree.word_count(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.search_prefix("de"), vec!["demo"]);
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let tree = PrefixTree::from_words(["there"]);
        assert!(!tree.contains("the"));
        assert!(tree.contains("there"));
    }

    #[test]
    fn test_long_shared_prefix() {
        let long = "a".repeat(1_000);
        let tree = PrefixTree::from_words([long.clone(), format!("{long}b")]);
        assert_eq!(tree.search_prefix("aaa").len(), 2);
    }

    proptest! {
        #[test]
        fn test_inserted_words_are_found(words in prop::collection::vec("[a-z]{1,8}", 1..30)) {
            let tree = PrefixTree::from_words(&words);
            for word in &words {
                prop_assert!(tree.search_prefix(word).contains(word));
            }

            let mut expected = words.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(tree.search_prefix(""), expected);
        }

        #[test]
        fn test_results_start_with_prefix(
            words in prop::collection::vec("[a-c]{1,6}", 1..30),
            prefix in "[a-c]{0,3}",
        ) {
            let tree = PrefixTree::from_words(&words);
            for word in tree.search_prefix(&prefix) {
                prop_assert!(word.starts_with(&prefix));
            }
        }
    }
}
