// File: src/core/view.rs
use crate::core::dictionary::MasterDictionary;
use crate::core::types::{first_letter, Letter};
use crate::core::word_set::WordSet;
use std::collections::HashMap;
use std::sync::Arc;

/// A per-round overlay that hides words from a shared [`MasterDictionary`].
///
/// For each letter the view keeps a skip boundary N: the first N words of
/// that letter's sequence are hidden. Words hidden out of order wait in
/// `pending_hidden` until the boundary reaches them, so a word is hidden iff
/// its position is below the boundary or it is pending.
#[derive(Debug, Clone)]
pub struct DictionaryView {
    dictionary: Arc<MasterDictionary>,
    skip_counts: HashMap<Letter, usize>,
    pending_hidden: WordSet<String>,
}

impl DictionaryView {
    pub fn new(dictionary: Arc<MasterDictionary>) -> Self {
        Self {
            dictionary,
            skip_counts: HashMap::new(),
            pending_hidden: WordSet::new(),
        }
    }

    pub fn dictionary(&self) -> &Arc<MasterDictionary> {
        &self.dictionary
    }

    /// Number of leading words of `letter` absorbed into the boundary.
    pub fn skip_boundary(&self, letter: Letter) -> usize {
        self.skip_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Words hidden out of order that the boundary has not reached yet.
    pub fn pending_len(&self) -> usize {
        self.pending_hidden.len()
    }

    pub fn is_hidden(&self, word: &str) -> bool {
        if self.pending_hidden.contains(word) {
            return true;
        }
        let (Some(letter), Some(id)) = (first_letter(word), self.dictionary.lookup_id(word)) else {
            return false;
        };
        let boundary = self.skip_boundary(letter);
        // Sequences are sorted by id, so comparing against the id of the last
        // skipped word is the same as comparing positions.
        match boundary.checked_sub(1) {
            Some(last) => id <= self.dictionary.words_for(letter)[last],
            None => false,
        }
    }

    /// Marks `word` unavailable in this view.
    ///
    /// Returns `false` if the word was already hidden (or is not in the
    /// dictionary), `true` if this call hid it. Amortized O(1): every word
    /// enters and leaves the pending set at most once.
    pub fn hide_word(&mut self, word: &str) -> bool {
        if !self.dictionary.contains(word) || self.is_hidden(word) {
            return false;
        }
        let Some(letter) = first_letter(word) else {
            return false;
        };

        self.pending_hidden.add(word.to_string());
        self.advance_skip_boundary(letter);
        true
    }

    fn advance_skip_boundary(&mut self, letter: Letter) {
        let ids = self.dictionary.words_for(letter);
        let mut boundary = self.skip_boundary(letter);

        while let Some(next) = ids.get(boundary).and_then(|&id| self.dictionary.word(id)) {
            if !self.pending_hidden.contains(next) {
                break;
            }
            self.pending_hidden.delete(next);
            boundary += 1;
        }

        self.skip_counts.insert(letter, boundary);
    }

    /// The earliest-registered word for `letter` still visible in this view.
    pub fn get_most_frequent_word_by(&self, letter: Letter) -> Option<&str> {
        let ids = self.dictionary.words_for(letter);
        let id = *ids.get(self.skip_boundary(letter))?;
        self.dictionary.word(id)
    }
}
