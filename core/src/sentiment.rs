//! Sentiment scoring as an injected capability.
//!
//! Word-level scoring joins counted terms against a caller-supplied
//! [`SentimentLexicon`]. Sentence-level scoring hands each document's
//! sentences to a [`SentenceScorer`]; context-aware models (negators,
//! amplifiers) plug in there and are not implemented here.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::counter::DocumentCounts;
use crate::document::Document;
use crate::error::{Result, TextStatError};
use crate::tokenizer::{normalize_term, split_sentences, Tokenizer};

/// Scores a batch of sentences, one score per sentence.
pub trait SentenceScorer {
    fn score(&self, sentences: &[&str]) -> Vec<f64>;
}

impl<F> SentenceScorer for F
where
    F: Fn(&[&str]) -> Vec<f64>,
{
    fn score(&self, sentences: &[&str]) -> Vec<f64> { self(sentences) }
}

/// Term to score lookup, e.g. a positive/negative word list (±1) or an
/// integer-valued list in the -5..=5 range.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    scores: HashMap<String, f64>,
}

impl SentimentLexicon {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let scores = pairs
            .into_iter()
            .filter_map(|(term, score)| normalize_term(term.as_ref()).map(|t| (t, score)))
            .collect();
        Self { scores }
    }

    /// Parse `term<TAB>score` lines, where score is a number or the words
    /// `positive` / `negative`. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let mut pairs = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parse_err = |message: String| TextStatError::Parse { path: origin.to_path_buf(), line: i + 1, message };
            let (term, value) = line
                .split_once('\t')
                .ok_or_else(|| parse_err("expected term<TAB>score".into()))?;
            let score = match value.trim() {
                "positive" => 1.0,
                "negative" => -1.0,
                v => v.parse::<f64>().map_err(|e| parse_err(format!("bad score '{v}': {e}")))?,
            };
            pairs.push((term.trim().to_string(), score));
        }
        Ok(Self::from_pairs(pairs))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| TextStatError::io(path, e))?;
        Self::parse(&text, path)
    }

    /// Re-key by stem. When several terms share a stem, the
    /// lexicographically smallest term's score wins.
    pub fn stemmed(&self, tokenizer: &Tokenizer) -> Self {
        let mut terms: Vec<(&String, &f64)> = self.scores.iter().collect();
        terms.sort_by(|a, b| a.0.cmp(b.0));
        let mut scores = HashMap::with_capacity(terms.len());
        for (term, score) in terms {
            scores.entry(tokenizer.stem_term(term)).or_insert(*score);
        }
        Self { scores }
    }

    pub fn get(&self, term: &str) -> Option<f64> { self.scores.get(term).copied() }

    pub fn len(&self) -> usize { self.scores.len() }

    pub fn is_empty(&self) -> bool { self.scores.is_empty() }
}

/// Plain dictionary sum per sentence, no context handling.
impl SentenceScorer for SentimentLexicon {
    fn score(&self, sentences: &[&str]) -> Vec<f64> {
        let tokenizer = Tokenizer::new();
        sentences
            .iter()
            .map(|s| {
                let doc = Document::new("", *s);
                let score: f64 = tokenizer.tokenize(&doc).filter_map(|t| self.get(&t.term)).sum();
                score
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSentiment {
    pub document_id: String,
    pub positive: f64,
    /// Magnitude of the negative contributions.
    pub negative: f64,
    pub net: f64,
    /// Token occurrences found in the lexicon.
    pub matched_terms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentenceSentiment {
    pub document_id: String,
    pub sentence_index: usize,
    pub sentence: String,
    pub score: f64,
}

/// Join each document's term counts against the lexicon.
pub fn lexicon_sentiment(counts: &[DocumentCounts], lexicon: &SentimentLexicon) -> Vec<DocumentSentiment> {
    counts
        .iter()
        .map(|doc| {
            let mut s = DocumentSentiment {
                document_id: doc.document_id().to_string(),
                positive: 0.0,
                negative: 0.0,
                net: 0.0,
                matched_terms: 0,
            };
            for (term, count) in doc.terms() {
                let Some(score) = lexicon.get(term) else { continue };
                let weighted = score * count as f64;
                if weighted >= 0.0 {
                    s.positive += weighted;
                } else {
                    s.negative -= weighted;
                }
                s.matched_terms += count as u64;
            }
            s.net = s.positive - s.negative;
            s
        })
        .collect()
}

/// Split a document into sentences and score them with `scorer`.
pub fn sentence_sentiment<S>(doc: &Document, scorer: &S) -> Result<Vec<SentenceSentiment>>
where
    S: SentenceScorer + ?Sized,
{
    let sentences = split_sentences(doc.text());
    let scores = scorer.score(&sentences);
    if scores.len() != sentences.len() {
        return Err(TextStatError::ScoreCountMismatch { expected: sentences.len(), got: scores.len() });
    }
    Ok(sentences
        .into_iter()
        .zip(scores)
        .enumerate()
        .map(|(sentence_index, (sentence, score))| SentenceSentiment {
            document_id: doc.id().to_string(),
            sentence_index,
            sentence: sentence.to_string(),
            score,
        })
        .collect())
}
