//! Dictionary of valid words

use super::{DICTIONARY, loader::words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Fixed set of words the game accepts, in their original order
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(DICTIONARY))
    }

    /// Build a dictionary from words, dropping repeats
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| lookup.insert(word.clone()))
            .collect();
        Self { words, lookup }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Check raw text, ignoring case
    ///
    /// Text that is not a well-formed word is never contained.
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Pick a random word, `None` if the dictionary is empty
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
