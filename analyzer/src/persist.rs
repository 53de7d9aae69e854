use anyhow::Result;
use serde::{Deserialize, Serialize};
use textstat_core::sentiment::{DocumentSentiment, SentenceSentiment};
use textstat_core::{AnalysisConfig, Diagnostic, NormalizedFrequency, TermCount, TfIdfScore};

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: u32,
    pub num_terms: u32,
    pub created_at: String,
    pub version: u32,
    pub config: AnalysisConfig,
    /// Empty corpus / empty documents seen during the run.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

pub struct OutputPaths {
    pub root: PathBuf,
}

impl OutputPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn term_counts(&self) -> PathBuf { self.root.join("term_counts.tsv") }
    pub fn normalized(&self) -> PathBuf { self.root.join("normalized.tsv") }
    pub fn tfidf(&self) -> PathBuf { self.root.join("tfidf.tsv") }
    pub fn sentiment(&self) -> PathBuf { self.root.join("sentiment.tsv") }
    pub fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

/// A flat row that can be written as one line of tab-separated text.
pub trait DelimitedRecord {
    const HEADER: &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

impl DelimitedRecord for TermCount {
    const HEADER: &'static [&'static str] = &["document_id", "term", "count"];
    fn fields(&self) -> Vec<String> {
        vec![self.document_id.clone(), self.term.clone(), self.count.to_string()]
    }
}

impl DelimitedRecord for NormalizedFrequency {
    const HEADER: &'static [&'static str] = &["document_id", "term", "count", "per_base"];
    fn fields(&self) -> Vec<String> {
        vec![self.document_id.clone(), self.term.clone(), self.count.to_string(), self.per_base.to_string()]
    }
}

impl DelimitedRecord for TfIdfScore {
    const HEADER: &'static [&'static str] = &["document_id", "term", "tf", "idf", "tf_idf"];
    fn fields(&self) -> Vec<String> {
        vec![
            self.document_id.clone(),
            self.term.clone(),
            self.tf.to_string(),
            self.idf.to_string(),
            self.tf_idf.to_string(),
        ]
    }
}

impl DelimitedRecord for DocumentSentiment {
    const HEADER: &'static [&'static str] = &["document_id", "positive", "negative", "net", "matched_terms"];
    fn fields(&self) -> Vec<String> {
        vec![
            self.document_id.clone(),
            self.positive.to_string(),
            self.negative.to_string(),
            self.net.to_string(),
            self.matched_terms.to_string(),
        ]
    }
}

impl DelimitedRecord for SentenceSentiment {
    const HEADER: &'static [&'static str] = &["document_id", "sentence_index", "score", "sentence"];
    fn fields(&self) -> Vec<String> {
        vec![self.document_id.clone(), self.sentence_index.to_string(), self.score.to_string(), self.sentence.clone()]
    }
}

/// Tabs and line breaks inside a field would split the record.
fn escape(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

pub fn write_records<R: DelimitedRecord, W: Write>(out: &mut W, rows: &[R]) -> Result<()> {
    writeln!(out, "{}", R::HEADER.join("\t"))?;
    for row in rows {
        let fields: Vec<String> = row.fields().iter().map(|f| escape(f)).collect();
        writeln!(out, "{}", fields.join("\t"))?;
    }
    Ok(())
}

pub fn save_table<R: DelimitedRecord>(path: &Path, rows: &[R]) -> Result<()> {
    if let Some(dir) = path.parent() {
        create_dir_all(dir)?;
    }
    let mut f = BufWriter::new(File::create(path)?);
    write_records(&mut f, rows)?;
    f.flush()?;
    Ok(())
}

pub fn save_meta(paths: &OutputPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &OutputPaths) -> Result<MetaFile> {
    let mut f = File::open(paths.meta())?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}
