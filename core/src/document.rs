use serde::{Deserialize, Serialize};

use crate::error::{Result, TextStatError};

/// A single text under analysis. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn text(&self) -> &str { &self.text }
}

/// Documents in ingestion order. Output tables follow this order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Build a corpus from `(id, text)` pairs, rejecting duplicate ids.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut corpus = Self::new();
        for (id, text) in pairs {
            corpus.push(Document::new(id, text))?;
        }
        Ok(corpus)
    }

    pub fn push(&mut self, doc: Document) -> Result<()> {
        if self.docs.iter().any(|d| d.id == doc.id) {
            return Err(TextStatError::config(format!("duplicate document id '{}'", doc.id)));
        }
        self.docs.push(doc);
        Ok(())
    }

    pub fn documents(&self) -> &[Document] { &self.docs }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter { self.docs.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let err = Corpus::from_pairs([("a", "x"), ("a", "y")]).unwrap_err();
        assert!(matches!(err, TextStatError::InvalidConfiguration(_)));
    }

    #[test]
    fn keeps_ingestion_order() {
        let corpus = Corpus::from_pairs([("b", "1"), ("a", "2")]).unwrap();
        let ids: Vec<&str> = corpus.documents().iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
