use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::counter::{DocumentCounts, TieBreak};
use crate::error::TextStatError;
use crate::stats::CorpusStats;

#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfScore {
    pub document_id: String,
    pub term: String,
    pub tf: f64,
    pub idf: f64,
    pub tf_idf: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdfVariant {
    /// `ln(N / df)`; zero exactly when the term is in every document.
    #[default]
    Standard,
    /// `ln(1 + N / df)`; never zero.
    Smoothed,
}

impl IdfVariant {
    pub fn idf(self, num_docs: usize, df: u32) -> f64 {
        let ratio = num_docs as f64 / df.max(1) as f64;
        match self {
            IdfVariant::Standard => ratio.ln(),
            IdfVariant::Smoothed => (1.0 + ratio).ln(),
        }
    }
}

impl FromStr for IdfVariant {
    type Err = TextStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(IdfVariant::Standard),
            "smoothed" => Ok(IdfVariant::Smoothed),
            other => Err(TextStatError::config(format!("unsupported idf variant '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer {
    variant: IdfVariant,
}

impl TfIdfScorer {
    pub fn new(variant: IdfVariant) -> Self { Self { variant } }

    /// Score every `(document, term)` pair. Rows are grouped by document in
    /// the order of `counts`, terms in first-seen order.
    pub fn score(&self, counts: &[DocumentCounts], stats: &CorpusStats) -> Vec<TfIdfScore> {
        let n = stats.num_documents();
        let mut rows = Vec::new();
        for doc in counts {
            let total = doc.total();
            if total == 0 {
                continue;
            }
            for (term, count) in doc.terms() {
                let tf = count as f64 / total as f64;
                let idf = self.variant.idf(n, stats.document_frequency(term));
                rows.push(TfIdfScore {
                    document_id: doc.document_id().to_string(),
                    term: term.to_string(),
                    tf,
                    idf,
                    tf_idf: tf * idf,
                });
            }
        }
        rows
    }
}

/// Most characteristic terms of one document: `tf_idf` descending, ties per
/// `tie`. `rows` must hold that document's terms in first-seen order, as
/// produced by [`TfIdfScorer::score`].
pub fn top_for_document(rows: &[TfIdfScore], document_id: &str, n: usize, tie: TieBreak) -> Vec<TfIdfScore> {
    let mut doc_rows: Vec<(usize, &TfIdfScore)> =
        rows.iter().filter(|r| r.document_id == document_id).enumerate().collect();
    doc_rows.sort_by(|(ia, a), (ib, b)| {
        b.tf_idf
            .partial_cmp(&a.tf_idf)
            .unwrap_or(Ordering::Equal)
            .then_with(|| tie.compare((a.term.as_str(), *ia), (b.term.as_str(), *ib)))
    });
    doc_rows.into_iter().take(n).map(|(_, r)| r.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, terms: &[&str]) -> DocumentCounts {
        let mut c = DocumentCounts::new(id);
        for t in terms {
            c.add(t);
        }
        c
    }

    fn find<'a>(rows: &'a [TfIdfScore], id: &str, term: &str) -> &'a TfIdfScore {
        rows.iter().find(|r| r.document_id == id && r.term == term).unwrap()
    }

    #[test]
    fn cat_dog_scenario() {
        let counts = vec![doc("A", &["cat", "dog"]), doc("B", &["cat", "cat"])];
        let stats = CorpusStats::from_counts(&counts);
        let rows = TfIdfScorer::default().score(&counts, &stats);

        let cat = find(&rows, "A", "cat");
        assert_eq!(cat.idf, 0.0);
        assert_eq!(cat.tf_idf, 0.0);

        let dog = find(&rows, "A", "dog");
        assert!((dog.idf - 2f64.ln()).abs() < 1e-12);
        assert!((dog.tf_idf - 0.5 * 2f64.ln()).abs() < 1e-12);
        assert!((dog.tf_idf - 0.347).abs() < 1e-3);

        assert_eq!(find(&rows, "B", "cat").tf, 1.0);
    }

    #[test]
    fn idf_zero_iff_in_every_document() {
        let counts = vec![doc("A", &["x", "y"]), doc("B", &["x", "z"]), doc("C", &["x", "y", "w"])];
        let stats = CorpusStats::from_counts(&counts);
        for row in TfIdfScorer::default().score(&counts, &stats) {
            let everywhere = stats.document_frequency(&row.term) as usize == counts.len();
            assert_eq!(row.idf == 0.0, everywhere, "term {}", row.term);
            assert!(row.tf > 0.0 && row.tf <= 1.0);
        }
    }

    #[test]
    fn smoothed_idf_is_positive() {
        assert!((IdfVariant::Smoothed.idf(2, 2) - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn empty_corpus_scores_nothing() {
        let stats = CorpusStats::from_counts(&[]);
        assert!(TfIdfScorer::default().score(&[], &stats).is_empty());
    }

    #[test]
    fn top_orders_by_score_then_tie_break() {
        let counts = vec![doc("A", &["common", "zed", "abe"]), doc("B", &["common"])];
        let stats = CorpusStats::from_counts(&counts);
        let rows = TfIdfScorer::default().score(&counts, &stats);

        let first_seen: Vec<String> =
            top_for_document(&rows, "A", 3, TieBreak::FirstSeen).into_iter().map(|r| r.term).collect();
        assert_eq!(first_seen, vec!["zed", "abe", "common"]);

        let lexical: Vec<String> =
            top_for_document(&rows, "A", 2, TieBreak::Lexicographic).into_iter().map(|r| r.term).collect();
        assert_eq!(lexical, vec!["abe", "zed"]);
    }
}
