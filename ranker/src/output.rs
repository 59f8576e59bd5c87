use crate::config::OutputFormat;
use anyhow::Result;
use docrank_core::{Corpus, DocStatus, Ranking};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;
use std::time::Duration;

#[derive(Serialize)]
pub struct QueryReport<'a> {
    pub line: usize,
    pub query: Cow<'a, str>,
    pub ranking: Vec<RankedDoc<'a>>,
}

#[derive(Serialize)]
pub struct RankedDoc<'a> {
    pub position: usize,
    /// 1-based document identifier.
    pub document: usize,
    pub name: &'a str,
    pub score: f64,
    #[serde(flatten)]
    pub status: &'a DocStatus,
}

pub struct RankingWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> RankingWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self { Self { out, format } }

    pub fn write_ranking(&mut self, line: usize, query: &[u8], ranking: &Ranking, corpus: &Corpus) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "Ranking for query line {line}:")?;
                for (pos, doc) in ranking.order.iter().enumerate() {
                    writeln!(self.out, "{}. Document {}", pos + 1, doc + 1)?;
                }
                writeln!(self.out)?;
            }
            OutputFormat::Json => {
                let report = QueryReport { line, query: String::from_utf8_lossy(query), ranking: ranked_docs(ranking, corpus) };
                serde_json::to_writer(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn write_timing(&mut self, elapsed: Duration) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "Total time: {:.6} seconds", elapsed.as_secs_f64())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &serde_json::json!({ "total_time_s": elapsed.as_secs_f64() }))?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

fn ranked_docs<'a>(ranking: &Ranking, corpus: &'a Corpus) -> Vec<RankedDoc<'a>> {
    ranking
        .iter()
        .enumerate()
        .filter_map(|(pos, (doc, score))| {
            let meta = corpus.get(doc)?;
            Some(RankedDoc { position: pos + 1, document: doc + 1, name: &meta.name, score, status: &meta.status })
        })
        .collect()
}
