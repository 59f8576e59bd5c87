use crate::corpus::DocId;
use crate::scorer::ScoreVector;
use std::cmp::Ordering;

/// Document indices, most relevant first.
pub type RankedList = Vec<DocId>;

/// Order documents by descending score; equal scores keep ascending index order.
pub fn rank(scores: &[f64]) -> RankedList {
    let mut order: RankedList = (0..scores.len()).collect();
    order.sort_by(|&a, &b| compare(scores[b], scores[a]).then(a.cmp(&b)));
    order
}

// total_cmp orders -0.0 below 0.0; fold the two together first.
fn compare(a: f64, b: f64) -> Ordering { (a + 0.0).total_cmp(&(b + 0.0)) }

/// Scores for one query together with the resulting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub scores: ScoreVector,
    pub order: RankedList,
}

impl Ranking {
    pub fn from_scores(scores: ScoreVector) -> Self {
        let order = rank(&scores);
        Self { scores, order }
    }

    /// `(doc, score)` pairs in ranked order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, f64)> + '_ {
        self.order.iter().map(|&d| (d, self.scores[d]))
    }

    pub fn top(&self, k: usize) -> &[DocId] { &self.order[..k.min(self.order.len())] }
}
