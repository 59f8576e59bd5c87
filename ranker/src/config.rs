use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use docrank_core::MAX_TOKEN_LEN;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One numbered block per query line
    #[default]
    Text,
    /// One JSON object per query line
    Json,
}

/// Everything a ranking run needs. Loaded from a JSON file and/or the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Documents in ranking order; document `i` is reported as `i + 1`.
    pub documents: Vec<PathBuf>,
    /// Alternative to `documents`: every `*.txt` under this directory, sorted by file name.
    pub corpus_dir: Option<PathBuf>,
    pub stopwords: Option<PathBuf>,
    pub queries: Option<PathBuf>,
    pub max_token_len: usize,
    pub format: OutputFormat,
    /// Abort when any document cannot be read instead of scoring it as empty.
    pub strict: bool,
    /// Print total elapsed time after the rankings.
    pub timing: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            corpus_dir: None,
            stopwords: None,
            queries: None,
            max_token_len: MAX_TOKEN_LEN,
            format: OutputFormat::Text,
            strict: false,
            timing: false,
        }
    }
}

impl RunConfig {
    /// Read a JSON config. Relative paths inside it are taken relative to the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let mut cfg: RunConfig = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parsing config {}", path.display()))?;
        if let Some(base) = path.parent() {
            cfg.rebase(base);
        }
        Ok(cfg)
    }

    fn rebase(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() { *p = base.join(&*p); }
        };
        self.documents.iter_mut().for_each(join);
        self.corpus_dir.iter_mut().for_each(join);
        self.stopwords.iter_mut().for_each(join);
        self.queries.iter_mut().for_each(join);
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_token_len == 0 {
            bail!("max_token_len must be at least 1");
        }
        if self.queries.is_none() {
            bail!("no query file configured");
        }
        match (self.documents.is_empty(), &self.corpus_dir) {
            (true, None) => bail!("no documents configured"),
            (false, Some(_)) => bail!("give either explicit documents or a corpus directory, not both"),
            _ => Ok(()),
        }
    }

    /// Resolve the ordered list of document paths.
    pub fn document_paths(&self) -> Result<Vec<PathBuf>> {
        let Some(dir) = &self.corpus_dir else {
            return Ok(self.documents.clone());
        };
        let exclude: Vec<&Path> = self.stopwords.iter().chain(self.queries.iter()).map(PathBuf::as_path).collect();
        let files = collect_documents(dir, &exclude)?;
        if files.is_empty() {
            bail!("no .txt documents found under {}", dir.display());
        }
        Ok(files)
    }
}

/// Every `*.txt` file under `dir`, sorted by file name, minus `exclude`.
pub fn collect_documents(dir: &Path, exclude: &[&Path]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("corpus directory {} does not exist", dir.display());
    }
    let excluded: Vec<PathBuf> = exclude.iter().filter_map(|p| fs::canonicalize(p).ok()).collect();
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if !p.is_file() || p.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        if let Ok(canon) = fs::canonicalize(p) {
            if excluded.contains(&canon) { continue; }
        }
        files.push(p.to_path_buf());
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn config_file_paths_are_relative_to_the_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("docrank.json");
        fs::write(&cfg_path, r#"{"documents": ["a.txt", "/abs/b.txt"], "queries": "q.txt", "format": "json"}"#).unwrap();
        let cfg = RunConfig::from_file(&cfg_path).unwrap();
        assert_eq!(cfg.documents, vec![dir.path().join("a.txt"), PathBuf::from("/abs/b.txt")]);
        assert_eq!(cfg.queries, Some(dir.path().join("q.txt")));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.max_token_len, MAX_TOKEN_LEN);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("bad.json");
        fs::write(&cfg_path, r#"{"documnets": []}"#).unwrap();
        assert!(RunConfig::from_file(&cfg_path).is_err());
    }

    #[test]
    fn validate_requires_documents_and_queries() {
        let mut cfg = RunConfig::default();
        assert!(cfg.validate().is_err());
        cfg.queries = Some("q.txt".into());
        assert!(cfg.validate().is_err());
        cfg.documents.push("a.txt".into());
        assert!(cfg.validate().is_ok());
        cfg.max_token_len = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn corpus_dir_is_sorted_and_skips_inputs() {
        let dir = tempdir().unwrap();
        for name in ["b.txt", "a.txt", "stopwords.txt", "input.txt", "notes.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let stop = dir.path().join("stopwords.txt");
        let queries = dir.path().join("input.txt");
        let files = collect_documents(dir.path(), &[&stop, &queries]).unwrap();
        assert_eq!(files, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);
    }
}
