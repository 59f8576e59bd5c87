use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Default upper bound on a token's length in bytes.
pub const MAX_TOKEN_LEN: usize = 255;

lazy_static! {
    // ASCII alphanumerics or any byte with the high bit set. Text is never decoded, so UTF-8
    // sequences and single-byte encodings such as Latin-1 both pass through untouched.
    static ref RE: Regex = Regex::new(r"(?-u:[0-9A-Za-z\x80-\xFF])+").expect("valid regex");
}

/// A normalized word, held as raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(Vec<u8>);

impl Token {
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl Borrow<[u8]> for Token {
    fn borrow(&self) -> &[u8] { &self.0 }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl From<Vec<u8>> for Token {
    fn from(bytes: Vec<u8>) -> Self { Self(bytes) }
}

impl From<&[u8]> for Token {
    fn from(bytes: &[u8]) -> Self { Self(bytes.to_vec()) }
}

impl From<String> for Token {
    fn from(s: String) -> Self { Self(s.into_bytes()) }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self { Self(s.as_bytes().to_vec()) }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool { self.0 == other.as_bytes() }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool { self.0 == other.as_bytes() }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Words dropped from document text. Matched verbatim against already-lowercased tokens.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<Token>,
}

impl Stopwords {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, token: &[u8]) -> bool { self.words.contains(token) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<Token>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

/// Splits text into normalized tokens.
///
/// A token is a maximal run of ASCII alphanumerics and high-bit bytes, lowercased in the ASCII
/// range only. Runs longer than `max_token_len` bytes are cut to that length and a warning is
/// logged.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Stopwords,
    max_token_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::new(Stopwords::new()) }
}

impl Tokenizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords, max_token_len: MAX_TOKEN_LEN }
    }

    pub fn with_max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = max_token_len;
        self
    }

    pub fn tokenize(&self, text: impl AsRef<[u8]>) -> Vec<Token> {
        tokenize_bounded(text.as_ref(), &self.stopwords, self.max_token_len)
    }
}

/// Tokenize `text` with the default length cap.
pub fn tokenize(text: impl AsRef<[u8]>, stopwords: &Stopwords) -> Vec<Token> {
    tokenize_bounded(text.as_ref(), stopwords, MAX_TOKEN_LEN)
}

fn tokenize_bounded(text: &[u8], stopwords: &Stopwords, max_len: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    for mat in RE.find_iter(text) {
        let token = truncate(mat.as_bytes(), max_len).to_ascii_lowercase();
        if token.is_empty() || stopwords.contains(&token) { continue; }
        tokens.push(Token(token));
    }
    tokens
}

fn truncate(raw: &[u8], max_len: usize) -> &[u8] {
    if raw.len() <= max_len { return raw; }
    tracing::warn!(len = raw.len(), max_len, "token exceeds maximum length, truncating");
    &raw[..max_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Hello, World! 42", &Stopwords::new());
        assert_eq!(t, vec!["hello", "world", "42"]);
    }

    #[test]
    fn underscore_and_apostrophe_split() {
        let t = tokenize("snake_case don't", &Stopwords::new());
        assert_eq!(t, vec!["snake", "case", "don", "t"]);
    }

    #[test]
    fn truncate_counts_bytes() {
        assert_eq!(truncate(b"abcdef", 3), b"abc");
        assert_eq!(truncate("aé".as_bytes(), 2), b"a\xc3");
        assert_eq!(truncate(b"ab", 3), b"ab");
    }

    #[test]
    fn display_is_lossy_utf8() {
        assert_eq!(Token::from("café").to_string(), "café");
        assert_eq!(Token::from(&b"caf\xe9"[..]).to_string(), "caf\u{FFFD}");
    }
}
