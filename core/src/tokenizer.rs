use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;

use crate::document::Document;

lazy_static! {
    static ref UNIT: Regex = Regex::new(r"(?u)[\p{L}\p{N}_'\u{2019}]+").expect("valid regex");
    static ref CORE: Regex = Regex::new(r"[a-z']+").expect("valid regex");
    static ref SENTENCE: Regex = Regex::new(r"[^.!?]+[.!?]*").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// A normalized word tagged with the document it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub doc_id: &'a str,
    pub term: String,
    /// Index of the source unit, counting units that produced no token.
    pub position: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    stem: bool,
}

impl Tokenizer {
    pub fn new() -> Self { Self::default() }

    /// Reduce terms to their English stem in [`Tokenizer::stem_token`].
    pub fn with_stemming(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }

    pub fn stems(&self) -> bool { self.stem }

    /// Lazily tokenize a document in source order. Terms are normalized but
    /// not stemmed, so stopword filtering sees the surface form.
    pub fn tokenize<'a>(&self, doc: &'a Document) -> impl Iterator<Item = Token<'a>> + 'a {
        let doc_id = doc.id();
        UNIT.find_iter(doc.text()).enumerate().filter_map(move |(position, unit)| {
            let term = normalize_term(unit.as_str())?;
            Some(Token { doc_id, term, position })
        })
    }

    /// Stem a normalized term when stemming is enabled.
    pub fn stem_term(&self, term: &str) -> String {
        if self.stem { STEMMER.stem(term).into_owned() } else { term.to_string() }
    }

    /// Stem a filtered token when stemming is enabled.
    pub fn stem_token<'a>(&self, token: Token<'a>) -> Token<'a> {
        if !self.stem {
            return token;
        }
        Token { term: self.stem_term(&token.term), ..token }
    }
}

/// NFKC + lowercase, then keep the first `[a-z']+` run that has a letter once
/// its outer apostrophes are trimmed. `_italic_` becomes `italic`, `42nd`
/// becomes `nd`, `1984` yields nothing.
pub fn normalize_term(unit: &str) -> Option<String> {
    let folded = unit.nfkc().collect::<String>().to_lowercase().replace('\u{2019}', "'");
    let run = CORE
        .find_iter(&folded)
        .map(|m| m.as_str().trim_matches('\''))
        .find(|run| !run.is_empty())?;
    Some(run.to_string())
}

/// Split text into sentences on runs of `.`, `!` and `?`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}
