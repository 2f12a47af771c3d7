// Word frequency accumulation.
//
// The table keeps entries in first-seen order plus an index from text to
// position. Entries are only ever created or incremented; nothing is removed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tokenizer::Tokenizer;

/// One distinct normalized word and how many times it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "word")]
    text: String,
    count: u64,
}

impl WordEntry {
    /// Build an entry directly. Used for fixtures and for re-ranking
    /// entries that were counted elsewhere.
    pub fn new(text: impl Into<String>, count: u64) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    fn increment(&mut self) {
        self.count += 1;
    }
}

/// Accumulates word counts for a single run.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: Vec<WordEntry>,
    index: HashMap<String, usize>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    ///
    /// `word` is expected to be normalized already; the table does no
    /// case folding of its own.
    pub fn observe(&mut self, word: &str) {
        self.total += 1;
        if let Some(&pos) = self.index.get(word) {
            self.entries[pos].increment();
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push(WordEntry::new(word, 1));
        }
    }

    /// Tokenize `headline` and observe every retained word, in order.
    /// Returns how many words were observed.
    pub fn observe_headline(&mut self, tokenizer: &Tokenizer, headline: &str) -> usize {
        let mut observed = 0;
        for word in tokenizer.tokens(headline) {
            self.observe(&word);
            observed += 1;
        }
        observed
    }

    /// Current count for `word`, or 0 if it was never observed.
    pub fn count_of(&self, word: &str) -> u64 {
        self.index
            .get(word)
            .map(|&pos| self.entries[pos].count)
            .unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of observations (the sum of all counts).
    pub fn total_observed(&self) -> u64 {
        self.total
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Consume the table, handing its entries over for ranking.
    pub fn into_entries(self) -> Vec<WordEntry> {
        self.entries
    }
}
