use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::TextStatError;
use crate::tokenizer::Token;

/// One `(document, term, count)` row. `count` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCount {
    pub document_id: String,
    pub term: String,
    pub count: u32,
}

/// How equal scores are ordered when ranking terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Earlier first occurrence in the document ranks first.
    #[default]
    FirstSeen,
    /// Byte-wise lexicographic order of the term.
    Lexicographic,
}

impl TieBreak {
    /// Order two terms given their first-seen indices.
    pub fn compare(self, a: (&str, usize), b: (&str, usize)) -> Ordering {
        match self {
            TieBreak::FirstSeen => a.1.cmp(&b.1),
            TieBreak::Lexicographic => a.0.cmp(b.0).then(a.1.cmp(&b.1)),
        }
    }
}

impl FromStr for TieBreak {
    type Err = TextStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-seen" => Ok(TieBreak::FirstSeen),
            "lexicographic" => Ok(TieBreak::Lexicographic),
            other => Err(TextStatError::config(format!("unsupported tie-break mode '{other}'"))),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TieBreak::FirstSeen => "first-seen",
            TieBreak::Lexicographic => "lexicographic",
        })
    }
}

/// Term counts for a single document, kept in first-encountered order.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCounts {
    document_id: String,
    terms: Vec<(String, u32)>,
    index: HashMap<String, usize>,
    total: u64,
}

impl DocumentCounts {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self { document_id: document_id.into(), terms: Vec::new(), index: HashMap::new(), total: 0 }
    }

    pub fn add(&mut self, term: &str) {
        match self.index.get(term) {
            Some(&i) => self.terms[i].1 += 1,
            None => {
                self.index.insert(term.to_string(), self.terms.len());
                self.terms.push((term.to_string(), 1));
            }
        }
        self.total += 1;
    }

    pub fn document_id(&self) -> &str { &self.document_id }

    /// Number of surviving tokens in the document.
    pub fn total(&self) -> u64 { self.total }

    pub fn get(&self, term: &str) -> Option<u32> {
        self.index.get(term).map(|&i| self.terms[i].1)
    }

    /// Distinct terms in first-seen order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, u32)> {
        self.terms.iter().map(|(t, c)| (t.as_str(), *c))
    }

    pub fn distinct(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn rows(&self) -> Vec<TermCount> {
        self.terms()
            .map(|(term, count)| TermCount { document_id: self.document_id.clone(), term: term.to_string(), count })
            .collect()
    }

    /// The `n` most frequent terms, count descending, ties per `tie`.
    pub fn top(&self, n: usize, tie: TieBreak) -> Vec<TermCount> {
        let mut order: Vec<usize> = (0..self.terms.len()).collect();
        order.sort_by(|&a, &b| {
            let (ta, ca) = &self.terms[a];
            let (tb, cb) = &self.terms[b];
            cb.cmp(ca).then_with(|| tie.compare((ta.as_str(), a), (tb.as_str(), b)))
        });
        order
            .into_iter()
            .take(n)
            .map(|i| TermCount { document_id: self.document_id.clone(), term: self.terms[i].0.clone(), count: self.terms[i].1 })
            .collect()
    }
}

/// Count a document's (already filtered) tokens.
pub fn count_tokens<'a, I>(document_id: &str, tokens: I) -> DocumentCounts
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut counts = DocumentCounts::new(document_id);
    for token in tokens {
        counts.add(&token.term);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::stopwords::StopwordFilter;
    use crate::tokenizer::Tokenizer;

    fn counts_of(text: &str, stop: &[&str]) -> DocumentCounts {
        let doc = Document::new("A", text);
        let filter = StopwordFilter::from_words(stop);
        count_tokens(doc.id(), filter.filter(Tokenizer::new().tokenize(&doc)))
    }

    #[test]
    fn counts_cat_sat_dog() {
        let c = counts_of("the cat sat. the dog sat.", &["the"]);
        let rows = c.rows();
        assert_eq!(
            rows,
            vec![
                TermCount { document_id: "A".into(), term: "cat".into(), count: 1 },
                TermCount { document_id: "A".into(), term: "sat".into(), count: 2 },
                TermCount { document_id: "A".into(), term: "dog".into(), count: 1 },
            ]
        );
        assert_eq!(c.total(), 4);
    }

    #[test]
    fn total_equals_sum_of_counts() {
        let c = counts_of("a b a c b a d", &[]);
        let sum: u64 = c.terms().map(|(_, n)| n as u64).sum();
        assert_eq!(sum, c.total());
    }

    #[test]
    fn top_breaks_ties_by_first_seen() {
        let c = counts_of("zeta alpha zeta alpha mid", &[]);
        let top: Vec<String> = c.top(3, TieBreak::FirstSeen).into_iter().map(|r| r.term).collect();
        assert_eq!(top, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn top_breaks_ties_lexicographically() {
        let c = counts_of("zeta alpha zeta alpha mid", &[]);
        let top: Vec<String> = c.top(2, TieBreak::Lexicographic).into_iter().map(|r| r.term).collect();
        assert_eq!(top, vec!["alpha", "zeta"]);
    }

    #[test]
    fn parses_tie_break_names() {
        assert_eq!("lexicographic".parse::<TieBreak>().unwrap(), TieBreak::Lexicographic);
        assert!("random".parse::<TieBreak>().is_err());
    }
}
