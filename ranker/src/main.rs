use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use docrank::config::{OutputFormat, RunConfig};
use docrank_core::MAX_TOKEN_LEN;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docrank")]
#[command(about = "Rank a fixed set of documents against each line of a query file by TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the documents for every line of the query file
    Rank(RankArgs),
    /// Print the tokens a document line would produce
    Tokenize {
        text: String,
        /// Stopword list, one word per line
        #[arg(long)]
        stopwords: Option<PathBuf>,
        #[arg(long, default_value_t = MAX_TOKEN_LEN)]
        max_token_len: usize,
    },
}

#[derive(Args)]
struct RankArgs {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Document file, repeatable; order gives the document numbers
    #[arg(long = "doc")]
    docs: Vec<PathBuf>,
    /// Use every .txt file in this directory, sorted by name
    #[arg(long, conflicts_with = "docs")]
    corpus_dir: Option<PathBuf>,
    /// Stopword list applied to documents
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Query file, one query per line
    #[arg(long)]
    queries: Option<PathBuf>,
    /// Longest token kept, in bytes; longer ones are truncated
    #[arg(long)]
    max_token_len: Option<usize>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Fail if any document cannot be read
    #[arg(long)]
    strict: bool,
    /// Print total elapsed time at the end
    #[arg(long)]
    timing: bool,
}

impl RankArgs {
    fn into_config(self) -> Result<RunConfig> {
        let mut cfg = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };
        if !self.docs.is_empty() {
            cfg.documents = self.docs;
            cfg.corpus_dir = None;
        }
        if let Some(dir) = self.corpus_dir {
            cfg.corpus_dir = Some(dir);
            cfg.documents.clear();
        }
        if self.stopwords.is_some() { cfg.stopwords = self.stopwords; }
        if self.queries.is_some() { cfg.queries = self.queries; }
        if let Some(n) = self.max_token_len { cfg.max_token_len = n; }
        if let Some(f) = self.format { cfg.format = f; }
        cfg.strict |= self.strict;
        cfg.timing |= self.timing;
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => {
            let cfg = args.into_config()?;
            let summary = docrank::run(&cfg, io::stdout().lock())?;
            if !summary.unavailable.is_empty() {
                eprintln!(
                    "warning: {} document(s) could not be read and were ranked as empty: {}",
                    summary.unavailable.len(),
                    summary.unavailable.join(", ")
                );
            }
            Ok(())
        }
        Commands::Tokenize { text, stopwords, max_token_len } => {
            docrank::write_tokens(&text, stopwords.as_deref(), max_token_len, io::stdout().lock())
        }
    }
}
