use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use stop_words::{get, LANGUAGE};

use crate::error::{Result, TextStatError};
use crate::tokenizer::{normalize_term, Token};

lazy_static! {
    static ref ENGLISH: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","shan't","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Set of excluded terms. Terms are stored lowercase so they compare
/// against normalized tokens directly.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// The built-in English list.
    pub fn english() -> Self {
        Self { words: ENGLISH.iter().map(|w| w.to_string()).collect() }
    }

    /// Filters nothing.
    pub fn empty() -> Self { Self::default() }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::empty();
        filter.extend(words);
        filter
    }

    /// Resolve a stopword set by language code. `none` gives an empty set.
    pub fn for_language(code: &str) -> Result<Self> {
        let lang = match code.to_lowercase().as_str() {
            "none" => return Ok(Self::empty()),
            "en" | "english" => return Ok(Self::english()),
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            other => return Err(TextStatError::config(format!("unknown stopword language '{other}'"))),
        };
        Ok(Self::from_words(get(lang).iter().map(|s| s.to_string())))
    }

    /// Read one word per line; blank lines and `#` comments are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| TextStatError::io(path, e))?;
        Ok(Self::from_words(
            text.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')),
        ))
    }

    /// Add custom exclusions, e.g. character names. Each word is normalized
    /// exactly like a token; words with no term left are ignored.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(words.into_iter().filter_map(|w| normalize_term(w.as_ref())));
    }

    pub fn contains(&self, term: &str) -> bool { self.words.contains(term) }

    pub fn words(&self) -> impl Iterator<Item = &str> { self.words.iter().map(String::as_str) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Drop excluded tokens, preserving order.
    pub fn filter<'f, 'a, I>(&'f self, tokens: I) -> impl Iterator<Item = Token<'a>> + 'f
    where
        I: IntoIterator<Item = Token<'a>>,
        I::IntoIter: 'f,
        'a: 'f,
    {
        tokens.into_iter().filter(move |t| !self.contains(&t.term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn filters_english_and_preserves_order() {
        let doc = Document::new("A", "The quick brown fox and the lazy dog");
        let filter = StopwordFilter::english();
        let words: Vec<String> = filter.filter(Tokenizer::new().tokenize(&doc)).map(|t| t.term).collect();
        assert_eq!(words, vec!["quick", "brown", "fox", "lazy", "dog"]);
    }

    #[test]
    fn custom_exclusions_are_lowercased() {
        let mut filter = StopwordFilter::english();
        filter.extend(["Elizabeth", " Darcy "]);
        assert!(filter.contains("elizabeth"));
        assert!(filter.contains("darcy"));
        assert!(!filter.contains("bennet"));
    }

    #[test]
    fn exclusions_match_the_tokens_they_name() {
        let doc = Document::new("A", "Don't stop _Emma_ now");
        let filter = StopwordFilter::from_words(["don\u{2019}t", "_Emma_", "1999"]);
        assert_eq!(filter.len(), 2);
        let words: Vec<String> = filter.filter(Tokenizer::new().tokenize(&doc)).map(|t| t.term).collect();
        assert_eq!(words, vec!["stop", "now"]);
    }

    #[test]
    fn other_languages_come_from_the_stop_words_lists() {
        let filter = StopwordFilter::for_language("de").unwrap();
        assert!(filter.contains("und"));
        assert!(!filter.contains("maschine"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(matches!(
            StopwordFilter::for_language("klingon"),
            Err(TextStatError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn loads_word_list_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "# characters\nEmma\n\nknightley\n_Harriet_\n").unwrap();
        let filter = StopwordFilter::load(&path).unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter.contains("emma"));
        assert!(filter.contains("harriet"));
    }
}
