// --- File: src/core/dictionary.rs
use crate::core::types::{first_letter, Letter, WordId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The registry of every known word, partitioned by first letter.
///
/// Built once by repeated [`MasterDictionary::add_word`] and then shared
/// read-only (behind an `Arc`) by every [`DictionaryView`](crate::core::view::DictionaryView).
/// Registration order is the frequency rank: word lists are expected to be
/// sorted most frequent first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterDictionary {
    /// Indexed by `WordId`.
    words: Vec<String>,
    word_to_id: HashMap<String, WordId>,
    /// Each sequence is sorted by id, ascending.
    letter_to_words: HashMap<Letter, Vec<WordId>>,
}

impl MasterDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `word` under its first character with the next sequential id.
    ///
    /// Returns `None` without touching the dictionary for an empty word or a
    /// word that is already registered; the first registration keeps its rank.
    pub fn add_word(&mut self, word: &str) -> Option<WordId> {
        let letter = first_letter(word)?;
        if self.word_to_id.contains_key(word) {
            return None;
        }

        let id = self.words.len();
        self.words.push(word.to_string());
        self.word_to_id.insert(word.to_string(), id);
        self.letter_to_words.entry(letter).or_default().push(id);
        Some(id)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_to_id.contains_key(word)
    }

    pub fn lookup_id(&self, word: &str) -> Option<WordId> {
        self.word_to_id.get(word).copied()
    }

    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Ids of every word starting with `letter`, in registration order.
    pub fn words_for(&self, letter: Letter) -> &[WordId] {
        self.letter_to_words
            .get(&letter)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every first letter with at least one word, sorted so that a seeded
    /// random pick is reproducible.
    pub fn letters_present(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self.letter_to_words.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for MasterDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for word in iter {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order_within_a_letter() {
        let dictionary: MasterDictionary = ["cat", "dog", "car", "cab"].into_iter().collect();

        assert_eq!(dictionary.len(), 4);
        assert_eq!(dictionary.lookup_id("cat"), Some(0));
        assert_eq!(dictionary.lookup_id("dog"), Some(1));
        assert_eq!(dictionary.words_for('c'), &[0, 2, 3]);
        assert_eq!(dictionary.words_for('d'), &[1]);
        assert!(dictionary.words_for('z').is_empty());
        assert_eq!(dictionary.word(3), Some("cab"));
    }

    #[test]
    fn rejects_empty_and_duplicate_words() {
        let mut dictionary = MasterDictionary::new();
        assert_eq!(dictionary.add_word(""), None);
        assert_eq!(dictionary.add_word("ёж"), Some(0));
        assert_eq!(dictionary.add_word("ёж"), None);
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.words_for('ё'), &[0]);
    }

    #[test]
    fn contains_and_letters_present() {
        let dictionary: MasterDictionary = ["owl", "ant", "ape"].into_iter().collect();
        assert!(dictionary.contains("ape"));
        assert!(!dictionary.contains("apex"));
        assert_eq!(dictionary.lookup_id("apex"), None);
        assert_eq!(dictionary.letters_present(), vec!['a', 'o']);
    }
}
