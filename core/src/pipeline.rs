use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::counter::{count_tokens, DocumentCounts, TermCount, TieBreak};
use crate::document::{Corpus, Document};
use crate::normalize::{FrequencyNormalizer, NormalizedFrequency};
use crate::sentiment::{lexicon_sentiment, DocumentSentiment, SentimentLexicon};
use crate::stats::CorpusStats;
use crate::stopwords::StopwordFilter;
use crate::tfidf::{top_for_document, TfIdfScore, TfIdfScorer};
use crate::tokenizer::Tokenizer;

/// Conditions worth reporting that do not abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "document_id", rename_all = "snake_case")]
pub enum Diagnostic {
    EmptyCorpus,
    /// No tokens survived filtering.
    EmptyDocument(String),
}

/// A validated, stateless analysis pipeline. Build it with
/// [`AnalysisConfig::build`](crate::config::AnalysisConfig::build).
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) stopwords: StopwordFilter,
    pub(crate) normalizer: FrequencyNormalizer,
    pub(crate) scorer: TfIdfScorer,
    pub(crate) tie_break: TieBreak,
    pub(crate) parallel: bool,
}

/// Output of one full run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub counts: Vec<DocumentCounts>,
    pub stats: CorpusStats,
    pub term_counts: Vec<TermCount>,
    pub normalized: Vec<NormalizedFrequency>,
    pub tfidf: Vec<TfIdfScore>,
    pub diagnostics: Vec<Diagnostic>,
    tie_break: TieBreak,
}

impl Pipeline {
    pub fn tie_break(&self) -> TieBreak { self.tie_break }

    pub fn stopwords(&self) -> &StopwordFilter { &self.stopwords }

    /// Tokenize, filter, stem and count a single document. Stopwords are
    /// matched before stemming.
    pub fn count_document(&self, doc: &Document) -> DocumentCounts {
        let tokens = self.stopwords.filter(self.tokenizer.tokenize(doc)).map(|t| self.tokenizer.stem_token(t));
        let counts = count_tokens(doc.id(), tokens);
        tracing::debug!(doc_id = doc.id(), tokens = counts.total(), terms = counts.distinct(), "counted document");
        counts
    }

    /// Join an analysis against `lexicon`, stemming the lexicon's terms the
    /// same way the analysis terms were stemmed.
    pub fn lexicon_sentiment(&self, analysis: &Analysis, lexicon: &SentimentLexicon) -> Vec<DocumentSentiment> {
        if self.tokenizer.stems() {
            lexicon_sentiment(&analysis.counts, &lexicon.stemmed(&self.tokenizer))
        } else {
            lexicon_sentiment(&analysis.counts, lexicon)
        }
    }

    /// Recompute every table from scratch.
    pub fn run(&self, corpus: &Corpus) -> Analysis {
        let docs = corpus.documents();
        let counts: Vec<DocumentCounts> = if self.parallel {
            docs.par_iter().map(|d| self.count_document(d)).collect()
        } else {
            docs.iter().map(|d| self.count_document(d)).collect()
        };

        let mut diagnostics = Vec::new();
        if counts.is_empty() {
            tracing::warn!("empty corpus, nothing to analyze");
            diagnostics.push(Diagnostic::EmptyCorpus);
        }
        for c in counts.iter().filter(|c| c.is_empty()) {
            tracing::warn!(doc_id = c.document_id(), "document has no tokens after filtering");
            diagnostics.push(Diagnostic::EmptyDocument(c.document_id().to_string()));
        }

        let stats = CorpusStats::from_counts(&counts);
        let term_counts = counts.iter().flat_map(DocumentCounts::rows).collect();
        let normalized = counts.iter().flat_map(|c| self.normalizer.normalize(c)).collect();
        let tfidf = self.scorer.score(&counts, &stats);

        tracing::info!(
            num_docs = stats.num_documents(),
            num_terms = stats.vocabulary_size(),
            "analysis complete"
        );
        Analysis { counts, stats, term_counts, normalized, tfidf, diagnostics, tie_break: self.tie_break }
    }
}

impl Analysis {
    /// True when the corpus produced no rows at all.
    pub fn is_empty(&self) -> bool {
        self.term_counts.is_empty() && self.normalized.is_empty() && self.tfidf.is_empty()
    }

    pub fn document(&self, document_id: &str) -> Option<&DocumentCounts> {
        self.counts.iter().find(|c| c.document_id() == document_id)
    }

    /// Most frequent terms of a document.
    pub fn top_terms(&self, document_id: &str, n: usize) -> Vec<TermCount> {
        self.document(document_id).map(|c| c.top(n, self.tie_break)).unwrap_or_default()
    }

    /// Most characteristic terms of a document by tf-idf.
    pub fn top_tfidf(&self, document_id: &str, n: usize) -> Vec<TfIdfScore> {
        top_for_document(&self.tfidf, document_id, n, self.tie_break)
    }
}
