use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docrank_core::tokenizer::Tokenizer;
use docrank_core::{Corpus, Document};

fn build_corpus() -> Corpus {
    let tok = Tokenizer::default();
    (0..6)
        .map(|i| {
            let lines: Vec<String> = (0..500).map(|j| format!("word{} term{} shared common{}", j % 97, (i * j) % 31, i)).collect();
            Document::from_lines(format!("doc{i}"), lines, &tok)
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let corpus = build_corpus();
    let query = Tokenizer::default().tokenize("shared word3 term7 common2 missing");
    c.bench_function("rank_query", |b| b.iter(|| corpus.rank_tokens(black_box(query.iter().cloned()))));
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
