pub mod corpus;
pub mod frequency;
pub mod rank;
pub mod scorer;
pub mod source;
pub mod tokenizer;

pub use corpus::{Corpus, DocId, DocStatus, Document};
pub use frequency::FrequencyTable;
pub use rank::{rank, RankedList, Ranking};
pub use scorer::{QueryProfile, ScoreVector, TermProfile};
pub use tokenizer::{Stopwords, Token, Tokenizer, MAX_TOKEN_LEN};
