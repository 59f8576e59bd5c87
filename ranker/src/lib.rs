pub mod config;
pub mod output;

use anyhow::{bail, Result};
use config::RunConfig;
use docrank_core::source::{load_corpus, load_queries, load_stopwords_or_empty};
use docrank_core::{Stopwords, Tokenizer};
use output::RankingWriter;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub num_docs: usize,
    pub unavailable: Vec<String>,
    pub queries: usize,
    pub elapsed: Duration,
}

/// Load the corpus and queries described by `cfg` and write one ranking per query line.
pub fn run<W: Write>(cfg: &RunConfig, out: W) -> Result<RunSummary> {
    let start = Instant::now();
    cfg.validate()?;
    let doc_paths = cfg.document_paths()?;

    let stopwords = cfg.stopwords.as_ref().map(load_stopwords_or_empty).unwrap_or_default();
    let doc_tokenizer = Tokenizer::new(stopwords).with_max_token_len(cfg.max_token_len);
    let corpus = load_corpus(&doc_paths, &doc_tokenizer);

    let unavailable: Vec<String> = corpus.unavailable().map(|(_, d)| d.name.clone()).collect();
    if cfg.strict && !unavailable.is_empty() {
        bail!("{} document(s) unavailable: {}", unavailable.len(), unavailable.join(", "));
    }
    tracing::info!(num_docs = corpus.len(), unavailable = unavailable.len(), "corpus loaded");

    let queries = match &cfg.queries {
        Some(path) => load_queries(path)?,
        None => bail!("no query file configured"),
    };
    // Query lines are never stopword-filtered.
    let query_tokenizer = Tokenizer::default().with_max_token_len(cfg.max_token_len);

    let mut writer = RankingWriter::new(out, cfg.format);
    for (i, query) in queries.iter().enumerate() {
        let ranking = corpus.rank_tokens(query_tokenizer.tokenize(query));
        tracing::debug!(line = i + 1, top = ?ranking.top(1), "ranked query");
        writer.write_ranking(i + 1, query, &ranking, &corpus)?;
    }

    let elapsed = start.elapsed();
    if cfg.timing {
        writer.write_timing(elapsed)?;
    }
    writer.flush()?;
    tracing::info!(queries = queries.len(), elapsed_s = elapsed.as_secs_f64(), "ranking complete");

    Ok(RunSummary { num_docs: corpus.len(), unavailable, queries: queries.len(), elapsed })
}

/// Print the tokens of `text` one per line, as documents would be tokenized.
pub fn write_tokens<W: Write>(text: &str, stopwords: Option<&Path>, max_token_len: usize, mut out: W) -> Result<()> {
    if max_token_len == 0 {
        bail!("max_token_len must be at least 1");
    }
    let stopwords = stopwords.map(load_stopwords_or_empty).unwrap_or_else(Stopwords::new);
    let tokenizer = Tokenizer::new(stopwords).with_max_token_len(max_token_len);
    for token in tokenizer.tokenize(text) {
        out.write_all(token.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
