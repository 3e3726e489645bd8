//! Dictionary management for spell checking.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{OrthosError, Result};
use crate::spelling::bktree::BkTree;

/// Configuration for dictionary suggestion retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Largest edit distance tried when collecting suggestions.
    pub max_radius: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig { max_radius: 5 }
    }
}

/// A word list supporting exact membership tests and ranked suggestions.
///
/// Words are normalized to lowercase on the way in. Exact lookups go
/// through a hash set; approximate lookups go through a [`BkTree`] built
/// from the same words in the same order. Both structures are filled at
/// load time and treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    tree: BkTree,
    config: DictionaryConfig,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    /// Create a new empty dictionary with custom configuration.
    pub fn with_config(config: DictionaryConfig) -> Self {
        Dictionary {
            words: HashSet::new(),
            tree: BkTree::new(),
            config,
        }
    }

    /// Add a word to the dictionary.
    ///
    /// The word is lowercased and inserted into both the membership set
    /// and the tree. Re-adding a word dedups in the set but still grows
    /// the tree by one node; the extra node is reachable but changes no
    /// lookup or suggestion result.
    pub fn add_word(&mut self, word: &str) {
        let normalized = word.to_lowercase();
        self.tree.insert(&normalized);
        self.words.insert(normalized);
    }

    /// Check if a word exists in the dictionary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get up to `limit` suggestions for a word, closest first.
    ///
    /// Radii 1 through `max_radius` are searched in turn, each round
    /// seeding the next with everything collected so far. A word found at
    /// a smaller radius is therefore never displaced by one found at a
    /// larger radius; ordering is bucketed by radius, with insertion order
    /// inside a bucket.
    ///
    /// A `limit` of 0 is a caller bug and is rejected rather than
    /// silently returning nothing.
    pub fn suggest(&self, word: &str, limit: usize) -> Result<Vec<String>> {
        if limit == 0 {
            return Err(OrthosError::invalid_argument(
                "suggestion limit must be positive",
            ));
        }

        let normalized = word.to_lowercase();
        let mut suggestions = Vec::new();

        for radius in 1..=self.config.max_radius {
            suggestions = self.tree.search(&normalized, radius, limit, &suggestions);
            if suggestions.len() >= limit {
                break;
            }
        }

        Ok(suggestions)
    }

    /// Number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Blank lines are skipped. Words are lowercased, so a capitalized
    /// word in the file still matches its lowercase form.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from_file_with_config(path, DictionaryConfig::default())
    }

    /// Load a dictionary from a file with custom configuration.
    pub fn load_from_file_with_config<P: AsRef<Path>>(
        path: P,
        config: DictionaryConfig,
    ) -> Result<Self> {
        let mut dictionary = Dictionary::with_config(config);
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                dictionary.add_word(word);
            }
        }

        debug!(
            "loaded {} words from {}",
            dictionary.word_count(),
            path.as_ref().display()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
