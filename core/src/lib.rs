//! Batch text statistics: tokenization, stopword filtering, term counts,
//! per-million normalization and tf-idf over an in-memory corpus.

pub mod config;
pub mod counter;
pub mod document;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod sentiment;
pub mod stats;
pub mod stopwords;
pub mod tfidf;
pub mod tokenizer;

pub use config::AnalysisConfig;
pub use counter::{DocumentCounts, TermCount, TieBreak};
pub use document::{Corpus, Document};
pub use error::{Result, TextStatError};
pub use normalize::{FrequencyNormalizer, NormalizedFrequency};
pub use pipeline::{Analysis, Diagnostic, Pipeline};
pub use stats::CorpusStats;
pub use stopwords::StopwordFilter;
pub use tfidf::{IdfVariant, TfIdfScore, TfIdfScorer};
pub use tokenizer::{Token, Tokenizer};
