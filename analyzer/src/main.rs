use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use textstat::args::AnalysisArgs;
use textstat::ingest::load_corpus;
use textstat::persist::{save_table, write_records, OutputPaths};
use textstat_core::sentiment::{sentence_sentiment, SentimentLexicon};
use tracing_subscriber::{EnvFilter, fmt};

use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "textstat")]
#[command(about = "Word frequencies, tf-idf and lexicon sentiment for a set of texts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum RankBy {
    Count,
    Tfidf,
}

#[derive(Subcommand)]
enum Commands {
    /// Write term counts, per-million frequencies and tf-idf tables
    Analyze {
        /// Input path (file or directory of .txt, .json, .jsonl, .tsv)
        #[arg(long)]
        input: String,
        /// Output directory
        #[arg(long)]
        output: String,
        #[command(flatten)]
        opts: AnalysisArgs,
    },
    /// Print the top terms of each document
    Top {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum, default_value_t = RankBy::Tfidf)]
        by: RankBy,
        #[arg(long, default_value_t = 10)]
        n: usize,
        /// Only this document
        #[arg(long)]
        doc: Option<String>,
        #[command(flatten)]
        opts: AnalysisArgs,
    },
    /// Score documents against a term<TAB>score sentiment lexicon
    Sentiment {
        #[arg(long)]
        input: String,
        #[arg(long)]
        lexicon: PathBuf,
        /// Score each sentence instead of whole documents. Sentences are
        /// scored unfiltered and unstemmed, so --stopwords, --exclude,
        /// --stopword-file and --stem are rejected with it.
        #[arg(long, default_value_t = false)]
        sentences: bool,
        /// Write sentiment.tsv here instead of printing
        #[arg(long)]
        output: Option<String>,
        #[command(flatten)]
        opts: AnalysisArgs,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input, output, opts } => {
            let config = opts.resolve()?;
            let corpus = load_corpus(Path::new(&input))?;
            textstat::analyze_to_dir(&corpus, &config, &output)?;
            Ok(())
        }
        Commands::Top { input, by, n, doc, opts } => top(&input, by, n, doc.as_deref(), &opts),
        Commands::Sentiment { input, lexicon, sentences, output, opts } => {
            sentiment(&input, &lexicon, sentences, output.as_deref(), &opts)
        }
    }
}

fn top(input: &str, by: RankBy, n: usize, only: Option<&str>, opts: &AnalysisArgs) -> Result<()> {
    let pipeline = opts.resolve()?.build()?;
    let corpus = load_corpus(Path::new(input))?;
    let analysis = pipeline.run(&corpus);

    let ids: Vec<&str> = match only {
        Some(id) if analysis.document(id).is_none() => return Err(anyhow!("no document with id '{id}'")),
        Some(id) => vec![id],
        None => analysis.counts.iter().map(|c| c.document_id()).collect(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match by {
        RankBy::Count => {
            let rows: Vec<_> = ids.iter().flat_map(|id| analysis.top_terms(id, n)).collect();
            write_records(&mut out, &rows)?;
        }
        RankBy::Tfidf => {
            let rows: Vec<_> = ids.iter().flat_map(|id| analysis.top_tfidf(id, n)).collect();
            write_records(&mut out, &rows)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn sentiment(input: &str, lexicon: &Path, sentences: bool, output: Option<&str>, opts: &AnalysisArgs) -> Result<()> {
    if sentences {
        let flags = opts.term_filter_flags();
        if !flags.is_empty() {
            return Err(anyhow!("{} cannot be combined with --sentences", flags.join(", ")));
        }
    }
    let pipeline = opts.resolve()?.build()?;
    let lexicon = SentimentLexicon::load(lexicon)?;
    let corpus = load_corpus(Path::new(input))?;
    tracing::info!(lexicon_terms = lexicon.len(), num_docs = corpus.len(), "scoring sentiment");

    let stdout = io::stdout();
    if sentences {
        let mut rows = Vec::new();
        for doc in &corpus {
            rows.extend(sentence_sentiment(doc, &lexicon)?);
        }
        match output {
            Some(dir) => save_table(&OutputPaths::new(dir).sentiment(), &rows)?,
            None => write_records(&mut stdout.lock(), &rows)?,
        }
    } else {
        let analysis = pipeline.run(&corpus);
        let rows = pipeline.lexicon_sentiment(&analysis, &lexicon);
        match output {
            Some(dir) => save_table(&OutputPaths::new(dir).sentiment(), &rows)?,
            None => write_records(&mut stdout.lock(), &rows)?,
        }
    }
    Ok(())
}
