//! TF-IDF scoring of a single query line against every document.
//!
//! The weighting is non-standard:
//!
//! * `tf = count_in_document / count_in_query`
//! * `idf = ln(D / (1 + document_count))`, where `document_count` is the number of documents
//!   containing the word *among those scanned so far*. It grows as documents are visited in
//!   index order, so later documents see a smaller idf for the same word.
//!
//! Terms are accumulated newest-first (reverse order of first appearance in the query). Float
//! addition is not associative, so this order is part of the result.

use crate::corpus::DocId;
use crate::frequency::FrequencyTable;
use crate::tokenizer::Token;
use std::collections::HashMap;

/// One TF-IDF score per document, indexed by [`DocId`].
pub type ScoreVector = Vec<f64>;

/// Per-word statistics for one query line.
#[derive(Debug, Clone, PartialEq)]
pub struct TermProfile {
    pub word: Token,
    /// Occurrences of the word in the query line itself.
    pub query_count: u32,
    /// Occurrences of the word in each document, 0 when absent.
    pub document_frequencies: Vec<u32>,
    /// Documents with a non-zero count, as accumulated by the last [`QueryProfile::score`].
    pub document_count: usize,
}

impl TermProfile {
    fn new(word: Token, num_docs: usize) -> Self {
        Self { word, query_count: 0, document_frequencies: vec![0; num_docs], document_count: 0 }
    }
}

/// The query-side profile: distinct query words in first-appearance order.
#[derive(Debug, Clone)]
pub struct QueryProfile {
    terms: Vec<TermProfile>,
    lookup: HashMap<Token, usize>,
    num_docs: usize,
}

impl QueryProfile {
    pub fn new(num_docs: usize) -> Self {
        Self { terms: Vec::new(), lookup: HashMap::new(), num_docs }
    }

    pub fn from_tokens<I, S>(tokens: I, num_docs: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        let mut profile = Self::new(num_docs);
        for token in tokens {
            profile.add_token(token);
        }
        profile
    }

    pub fn add_token(&mut self, token: impl Into<Token>) {
        let word = token.into();
        let idx = match self.lookup.get(&word) {
            Some(&idx) => idx,
            None => {
                self.terms.push(TermProfile::new(word.clone(), self.num_docs));
                self.lookup.insert(word, self.terms.len() - 1);
                self.terms.len() - 1
            }
        };
        self.terms[idx].query_count += 1;
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn terms(&self) -> &[TermProfile] { &self.terms }

    pub fn term(&self, word: impl AsRef<[u8]>) -> Option<&TermProfile> {
        self.lookup.get(word.as_ref()).map(|&idx| &self.terms[idx])
    }

    /// Record each query word's count in document `doc`.
    ///
    /// # Panics
    /// If `doc` is not below the profile's document count.
    pub fn observe(&mut self, doc: DocId, table: &FrequencyTable) {
        assert!(doc < self.num_docs, "document {doc} out of range for {} documents", self.num_docs);
        for term in self.terms.iter_mut() {
            term.document_frequencies[doc] = table.get(&term.word);
        }
    }

    /// Compute the score vector from the observed document frequencies.
    ///
    /// `document_count` is reset and re-accumulated on every call, so scoring the same profile
    /// twice gives the same result. Terms are summed newest first.
    pub fn score(&mut self) -> ScoreVector {
        let n = self.num_docs as f64;
        let mut scores = vec![0.0; self.num_docs];
        for term in self.terms.iter_mut().rev() {
            term.document_count = 0;
            let query_count = term.query_count.max(1) as f64;
            for (i, &df) in term.document_frequencies.iter().enumerate() {
                let tf = df as f64 / query_count;
                if df > 0 {
                    term.document_count += 1;
                }
                let idf = (n / (1.0 + term.document_count as f64)).ln();
                scores[i] += tf * idf;
            }
        }
        tracing::trace!(terms = self.terms.len(), num_docs = self.num_docs, "scored query");
        scores
    }
}

/// Score `tokens` against `tables`, where `tables[i]` is document `i`.
pub fn score<'a, I, S, T>(tokens: I, tables: T) -> ScoreVector
where
    I: IntoIterator<Item = S>,
    S: Into<Token>,
    T: IntoIterator<Item = &'a FrequencyTable>,
{
    let tables: Vec<&FrequencyTable> = tables.into_iter().collect();
    let mut profile = QueryProfile::from_tokens(tokens, tables.len());
    for (doc, table) in tables.into_iter().enumerate() {
        profile.observe(doc, table);
    }
    profile.score()
}
