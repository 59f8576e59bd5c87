use crate::tokenizer::{Token, Tokenizer};
use std::collections::HashMap;

/// Exact occurrence counts of each distinct word in one source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Token, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self { Self::default() }

    /// Build a table by tokenizing every line of a text.
    pub fn from_lines<I, S>(lines: I, tokenizer: &Tokenizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut table = Self::new();
        for line in lines {
            table.add_text(line.as_ref(), tokenizer);
        }
        table
    }

    pub fn add_text(&mut self, text: impl AsRef<[u8]>, tokenizer: &Tokenizer) {
        for token in tokenizer.tokenize(text) {
            self.insert(token);
        }
    }

    /// Count one more occurrence of `word`, returning the new count.
    pub fn insert(&mut self, word: impl Into<Token>) -> u32 {
        let count = self.counts.entry(word.into()).or_insert(0);
        *count += 1;
        *count
    }

    /// Occurrences of `word`, 0 when absent.
    pub fn get(&self, word: impl AsRef<[u8]>) -> u32 { self.counts.get(word.as_ref()).copied().unwrap_or(0) }

    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool { self.counts.contains_key(word.as_ref()) }

    /// Number of distinct words.
    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }
}

impl<S: Into<Token>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for word in iter {
            table.insert(word);
        }
        table
    }
}
