use crate::corpus::{Corpus, DocStatus, Document};
use crate::tokenizer::{Stopwords, Tokenizer};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a file as raw byte lines without their `\n` / `\r\n` terminators.
///
/// No decoding happens here; UTF-8 and single-byte encodings are handled alike by the tokenizer.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = BufReader::new(f);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).with_context(|| format!("reading {}", path.display()))?;
        if n == 0 { break; }
        if buf.last() == Some(&b'\n') { buf.pop(); }
        if buf.last() == Some(&b'\r') { buf.pop(); }
        lines.push(buf.clone());
    }
    Ok(lines)
}

/// Load a stopword list, one word per line. Blank lines are ignored.
pub fn load_stopwords<P: AsRef<Path>>(path: P) -> Result<Stopwords> {
    let lines = read_lines(path)?;
    Ok(lines.into_iter().filter(|l| !l.is_empty()).collect())
}

/// Load a stopword list, falling back to an empty one if the file cannot be read.
pub fn load_stopwords_or_empty<P: AsRef<Path>>(path: P) -> Stopwords {
    let path = path.as_ref();
    match load_stopwords(path) {
        Ok(words) => {
            tracing::debug!(path = %path.display(), count = words.len(), "loaded stopwords");
            words
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "stopwords unavailable, continuing without");
            Stopwords::new()
        }
    }
}

/// Load one document. A read failure yields an unavailable document instead of an error.
pub fn load_document<P: AsRef<Path>>(path: P, tokenizer: &Tokenizer) -> Document {
    let path = path.as_ref();
    let name = document_name(path);
    match read_lines(path) {
        Ok(lines) => Document::from_lines(name, lines, tokenizer),
        Err(err) => Document::unavailable(name, format!("{err:#}")),
    }
}

/// Load documents in the given order; document `i` is `paths[i]`.
pub fn load_corpus<P: AsRef<Path>>(paths: &[P], tokenizer: &Tokenizer) -> Corpus {
    let mut corpus = Corpus::new();
    for path in paths {
        let doc = load_document(path, tokenizer);
        match &doc.status {
            DocStatus::Loaded => {
                tracing::debug!(path = %path.as_ref().display(), words = doc.table.len(), "loaded document")
            }
            DocStatus::Unavailable { reason } => {
                tracing::warn!(path = %path.as_ref().display(), %reason, "document unavailable, scoring as empty")
            }
        }
        corpus.push(doc);
    }
    corpus
}

/// Load query lines. Unlike documents, an unreadable query file is an error.
pub fn load_queries<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    read_lines(path).with_context(|| format!("loading queries from {}", path.display()))
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
