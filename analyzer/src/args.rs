use anyhow::Result;
use clap::Args;
use textstat_core::{AnalysisConfig, IdfVariant, TieBreak};

use std::path::PathBuf;

pub const CONFIG_ENV: &str = "TEXTSTAT_CONFIG";

/// Analysis options shared by every subcommand. Flags override values
/// from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// JSON config file (defaults to $TEXTSTAT_CONFIG when set)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Stopword language: en, de, fr, es, it, pt, nl, ru or none
    #[arg(long)]
    pub stopwords: Option<String>,
    /// Extra comma-separated exclusions, e.g. character names
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
    /// Word-list file (one word per line) to exclude as well
    #[arg(long = "stopword-file")]
    pub stopword_files: Vec<PathBuf>,
    /// Normalization base for frequency-per-base output
    #[arg(long)]
    pub base: Option<f64>,
    /// Ranking tie-break: first-seen or lexicographic
    #[arg(long)]
    pub tie_break: Option<TieBreak>,
    /// IDF variant: standard = ln(N/df), smoothed = ln(1 + N/df)
    #[arg(long)]
    pub idf: Option<IdfVariant>,
    /// Stem terms with the English Snowball stemmer
    #[arg(long, default_value_t = false)]
    pub stem: bool,
    /// Count documents on one thread
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
}

impl AnalysisArgs {
    /// Flags that shape the term pipeline (stopwords, stemming). Sentence
    /// scoring reads raw sentences, so it cannot honor them.
    pub fn term_filter_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.stopwords.is_some() { flags.push("--stopwords"); }
        if !self.exclude.is_empty() { flags.push("--exclude"); }
        if !self.stopword_files.is_empty() { flags.push("--stopword-file"); }
        if self.stem { flags.push("--stem"); }
        flags
    }

    pub fn resolve(&self) -> Result<AnalysisConfig> {
        let path = self.config.clone().or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        let mut cfg = match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config file");
                AnalysisConfig::load(&p)?
            }
            None => AnalysisConfig::default(),
        };
        if let Some(lang) = &self.stopwords { cfg.stopwords = lang.clone(); }
        cfg.extra_stopwords.extend(self.exclude.iter().cloned());
        cfg.stopword_files.extend(self.stopword_files.iter().cloned());
        if let Some(base) = self.base { cfg.normalization_base = base; }
        if let Some(tie) = self.tie_break { cfg.tie_break = tie; }
        if let Some(idf) = self.idf { cfg.idf = idf; }
        if self.stem { cfg.stem = true; }
        if self.sequential { cfg.parallel = false; }
        Ok(cfg)
    }
}
