use textstat_core::{Document, StopwordFilter, Tokenizer};

fn words(text: &str) -> Vec<String> {
    let doc = Document::new("doc", text);
    Tokenizer::new().tokenize(&doc).map(|t| t.term).collect()
}

#[test]
fn it_lowercases_and_keeps_alphabetic_core() {
    let toks = words("Running RUNNERS _run_ 2nd 1999 caf\u{e9}'s");
    assert_eq!(toks, vec!["running", "runners", "run", "nd", "caf"]);
}

#[test]
fn it_filters_stopwords() {
    let doc = Document::new("doc", "The quick brown fox and the lazy dog");
    let filter = StopwordFilter::english();
    let toks: Vec<String> = filter.filter(Tokenizer::new().tokenize(&doc)).map(|t| t.term).collect();
    assert!(!toks.contains(&"the".to_string()));
    assert!(!toks.contains(&"and".to_string()));
    assert!(toks.contains(&"fox".to_string()));
}

#[test]
fn it_is_lazy_and_tags_every_token_with_its_document() {
    let doc = Document::new("emma", "Emma Woodhouse, handsome, clever, and rich");
    let mut iter = Tokenizer::new().tokenize(&doc);
    let first = iter.next().unwrap();
    assert_eq!(first.term, "emma");
    assert_eq!(first.doc_id, "emma");
    assert_eq!(iter.count(), 5);
}
