use std::collections::HashMap;

use crate::counter::DocumentCounts;

/// Corpus-wide aggregates derived from per-document counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusStats {
    num_documents: usize,
    totals: HashMap<String, u64>,
    document_frequency: HashMap<String, u32>,
}

impl CorpusStats {
    /// Single reduction pass over every document's counts.
    pub fn from_counts(counts: &[DocumentCounts]) -> Self {
        let mut stats = Self { num_documents: counts.len(), ..Self::default() };
        for doc in counts {
            stats.totals.insert(doc.document_id().to_string(), doc.total());
            for (term, _) in doc.terms() {
                *stats.document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }
        stats
    }

    pub fn num_documents(&self) -> usize { self.num_documents }

    pub fn total_terms(&self, document_id: &str) -> u64 {
        self.totals.get(document_id).copied().unwrap_or(0)
    }

    /// Number of documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> u32 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn vocabulary_size(&self) -> usize { self.document_frequency.len() }
}
