use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::counter::TieBreak;
use crate::error::{Result, TextStatError};
use crate::normalize::{FrequencyNormalizer, DEFAULT_BASE};
use crate::pipeline::Pipeline;
use crate::stopwords::StopwordFilter;
use crate::tfidf::{IdfVariant, TfIdfScorer};
use crate::tokenizer::Tokenizer;

/// Settings for one analysis run. Everything is checked in [`AnalysisConfig::build`]
/// before any document is touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Stopword language code (`en`, `de`, ...) or `none`.
    pub stopwords: String,
    /// Extra exclusions, e.g. character names.
    pub extra_stopwords: Vec<String>,
    /// Word-list files merged into the exclusion set.
    pub stopword_files: Vec<PathBuf>,
    pub normalization_base: f64,
    pub tie_break: TieBreak,
    pub idf: IdfVariant,
    pub stem: bool,
    /// Tokenize and count documents on the rayon pool.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords: "en".to_string(),
            extra_stopwords: Vec::new(),
            stopword_files: Vec::new(),
            normalization_base: DEFAULT_BASE,
            tie_break: TieBreak::default(),
            idf: IdfVariant::default(),
            stem: false,
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TextStatError::config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| TextStatError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Validate and assemble the pipeline.
    pub fn build(&self) -> Result<Pipeline> {
        let normalizer = FrequencyNormalizer::new(self.normalization_base)?;
        let mut stopwords = StopwordFilter::for_language(&self.stopwords)?;
        for path in &self.stopword_files {
            let extra = StopwordFilter::load(path)?;
            stopwords.extend(extra.words());
        }
        stopwords.extend(&self.extra_stopwords);
        Ok(Pipeline {
            tokenizer: Tokenizer::new().with_stemming(self.stem),
            stopwords,
            normalizer,
            scorer: TfIdfScorer::new(self.idf),
            tie_break: self.tie_break,
            parallel: self.parallel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build() {
        let pipeline = AnalysisConfig::default().build().unwrap();
        assert_eq!(pipeline.tie_break(), TieBreak::FirstSeen);
    }

    #[test]
    fn parses_partial_json() {
        let cfg = AnalysisConfig::from_json_str(
            r#"{"stopwords": "none", "tie_break": "lexicographic", "idf": "smoothed", "normalization_base": 1000}"#,
        )
        .unwrap();
        assert_eq!(cfg.stopwords, "none");
        assert_eq!(cfg.tie_break, TieBreak::Lexicographic);
        assert_eq!(cfg.idf, IdfVariant::Smoothed);
        assert_eq!(cfg.normalization_base, 1000.0);
        assert!(cfg.parallel);
    }

    #[test]
    fn unsupported_tie_break_is_invalid_configuration() {
        let err = AnalysisConfig::from_json_str(r#"{"tie_break": "random"}"#).unwrap_err();
        assert!(matches!(err, TextStatError::InvalidConfiguration(_)));
    }

    #[test]
    fn bad_base_fails_before_running() {
        let cfg = AnalysisConfig { normalization_base: 0.0, ..AnalysisConfig::default() };
        assert!(matches!(cfg.build(), Err(TextStatError::InvalidConfiguration(_))));
    }

    #[test]
    fn missing_stopword_file_is_an_io_error() {
        let cfg = AnalysisConfig {
            stopword_files: vec![PathBuf::from("/nonexistent/stopwords.txt")],
            ..AnalysisConfig::default()
        };
        assert!(matches!(cfg.build(), Err(TextStatError::Io { .. })));
    }
}
