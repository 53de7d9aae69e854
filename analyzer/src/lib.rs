pub mod args;
pub mod ingest;
pub mod persist;

use anyhow::Result;
use textstat_core::{Analysis, AnalysisConfig, Corpus};

use persist::{save_meta, save_table, MetaFile, OutputPaths, FORMAT_VERSION};

/// Run the pipeline and write all three tables plus `meta.json` under `output`.
pub fn analyze_to_dir(corpus: &Corpus, config: &AnalysisConfig, output: &str) -> Result<Analysis> {
    let pipeline = config.build()?;
    let analysis = pipeline.run(corpus);

    let paths = OutputPaths::new(output);
    save_table(&paths.term_counts(), &analysis.term_counts)?;
    save_table(&paths.normalized(), &analysis.normalized)?;
    save_table(&paths.tfidf(), &analysis.tfidf)?;
    let meta = MetaFile {
        num_docs: analysis.stats.num_documents() as u32,
        num_terms: analysis.stats.vocabulary_size() as u32,
        created_at: time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339).unwrap_or_else(|_| "".into()),
        version: FORMAT_VERSION,
        config: config.clone(),
        diagnostics: analysis.diagnostics.clone(),
    };
    save_meta(&paths, &meta)?;

    tracing::info!(output, rows = analysis.term_counts.len(), "analysis written");
    Ok(analysis)
}
