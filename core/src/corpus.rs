use crate::frequency::FrequencyTable;
use crate::rank::Ranking;
use crate::scorer::QueryProfile;
use crate::tokenizer::{Token, Tokenizer};
use serde::Serialize;

/// Zero-based position of a document in its corpus.
pub type DocId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocStatus {
    Loaded,
    /// The source could not be read; the document scores as empty.
    Unavailable { reason: String },
}

#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub status: DocStatus,
    pub table: FrequencyTable,
}

impl Document {
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I, tokenizer: &Tokenizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self {
            name: name.into(),
            status: DocStatus::Loaded,
            table: FrequencyTable::from_lines(lines, tokenizer),
        }
    }

    pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DocStatus::Unavailable { reason: reason.into() },
            table: FrequencyTable::new(),
        }
    }

    pub fn is_available(&self) -> bool { self.status == DocStatus::Loaded }
}

/// The fixed, ordered set of documents queries are ranked against.
///
/// Tables are built once and only read afterwards, so a corpus can serve any number of queries.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, doc: Document) -> DocId {
        self.docs.push(doc);
        self.docs.len() - 1
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn get(&self, id: DocId) -> Option<&Document> { self.docs.get(id) }

    pub fn tables(&self) -> impl Iterator<Item = &FrequencyTable> {
        self.docs.iter().map(|d| &d.table)
    }

    pub fn unavailable(&self) -> impl Iterator<Item = (DocId, &Document)> {
        self.docs.iter().enumerate().filter(|(_, d)| !d.is_available())
    }

    /// Build a fresh profile for `tokens` and fill in every document's counts.
    pub fn profile<I, S>(&self, tokens: I) -> QueryProfile
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        let mut profile = QueryProfile::from_tokens(tokens, self.len());
        for (id, table) in self.tables().enumerate() {
            profile.observe(id, table);
        }
        profile
    }

    /// Score and rank the documents for one tokenized query.
    pub fn rank_tokens<I, S>(&self, tokens: I) -> Ranking
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        let mut profile = self.profile(tokens);
        Ranking::from_scores(profile.score())
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self { docs: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_documents_are_distinguishable_from_empty_ones() {
        let tok = Tokenizer::default();
        let corpus: Corpus = vec![
            Document::from_lines("empty", Vec::<String>::new(), &tok),
            Document::unavailable("missing", "not found"),
        ]
        .into_iter()
        .collect();
        assert!(corpus.get(0).unwrap().table.is_empty());
        assert!(corpus.get(1).unwrap().table.is_empty());
        let missing: Vec<DocId> = corpus.unavailable().map(|(id, _)| id).collect();
        assert_eq!(missing, vec![1]);
    }
}
