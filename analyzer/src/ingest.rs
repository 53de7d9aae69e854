use anyhow::{anyhow, Result};
use serde::Deserialize;
use textstat_core::{Corpus, Document};
use walkdir::WalkDir;

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const EXTENSIONS: &[&str] = &["txt", "json", "jsonl", "tsv"];

#[derive(Debug, Deserialize)]
struct InputDoc {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(alias = "body")]
    text: String,
}

impl From<InputDoc> for Document {
    fn from(doc: InputDoc) -> Self {
        match doc.title {
            Some(title) if !title.is_empty() => Document::new(doc.id, format!("{title}\n{}", doc.text)),
            _ => Document::new(doc.id, doc.text),
        }
    }
}

/// Supported files under `input`, sorted by path so ingestion order is stable.
pub fn collect_files(input: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && extension(p).is_some_and(|ext| EXTENSIONS.contains(&ext)) {
                files.push(p.to_path_buf());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files.sort();
    files
}

/// Load every document found at `input` (file or directory).
pub fn load_corpus(input: &Path) -> Result<Corpus> {
    let files = collect_files(input);
    if files.is_empty() && !input.exists() {
        return Err(anyhow!("input path {} does not exist", input.display()));
    }
    let mut corpus = Corpus::new();
    for file in &files {
        let docs = match extension(file) {
            Some("jsonl") => read_jsonl(file)?,
            Some("json") => read_json(file)?,
            Some("tsv") => read_tsv(file)?,
            _ => vec![read_text(file)?],
        };
        tracing::debug!(file = %file.display(), docs = docs.len(), "read input file");
        for doc in docs {
            corpus.push(doc)?;
        }
    }
    tracing::info!(files = files.len(), num_docs = corpus.len(), "ingested documents");
    Ok(corpus)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

fn read_text(file: &Path) -> Result<Document> {
    let id = file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("file name of {} is not valid UTF-8", file.display()))?;
    Ok(Document::new(id, fs::read_to_string(file)?))
}

fn read_jsonl(file: &Path) -> Result<Vec<Document>> {
    let reader = BufReader::new(File::open(file)?);
    let mut docs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)?;
        docs.push(doc.into());
    }
    Ok(docs)
}

fn read_json(file: &Path) -> Result<Vec<Document>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(|v| -> Result<Document> { Ok(serde_json::from_value::<InputDoc>(v)?.into()) })
            .collect(),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value::<InputDoc>(json)?.into()]),
        _ => Err(anyhow!("{}: expected a JSON object or array of objects", file.display())),
    }
}

/// `id<TAB>text` per line. Lines sharing an id are joined into one document.
fn read_tsv(file: &Path) -> Result<Vec<Document>> {
    let reader = BufReader::new(File::open(file)?);
    let mut rows: Vec<(String, String)> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let (id, text) = line
            .split_once('\t')
            .ok_or_else(|| anyhow!("{}:{}: expected id<TAB>text", file.display(), i + 1))?;
        match rows.iter_mut().find(|(existing, _)| existing == id) {
            Some((_, body)) => {
                body.push('\n');
                body.push_str(text);
            }
            None => rows.push((id.to_string(), text.to_string())),
        }
    }
    Ok(rows.into_iter().map(|(id, text)| Document::new(id, text)).collect())
}
