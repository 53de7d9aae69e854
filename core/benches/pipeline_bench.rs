use criterion::{criterion_group, criterion_main, Criterion};
use textstat_core::{AnalysisConfig, Corpus, Document, Tokenizer};

fn bench_pipeline(c: &mut Criterion) {
    let text = include_str!("../README.md");
    let doc = Document::new("readme", text);
    c.bench_function("tokenize_readme", |b| b.iter(|| Tokenizer::new().tokenize(&doc).count()));

    let corpus = Corpus::from_pairs((0..64).map(|i| (format!("doc{i}"), text.repeat(i % 4 + 1)))).unwrap();
    let pipeline = AnalysisConfig::default().build().unwrap();
    c.bench_function("analyze_64_docs", |b| b.iter(|| pipeline.run(&corpus)));
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
