//! Text corpus input.
//!
//! Turns a plain-text document into the token stream consumed by the index
//! builder:
//!
//! ```rust,ignore
//! use soundseek::corpus::TextCorpus;
//! use soundseek::index::build_index;
//!
//! let corpus = TextCorpus::load("story.txt")?;
//! let index = build_index(corpus.tokens());
//! ```
//!
//! ## Format
//!
//! Any UTF-8 text file with a `.txt` extension. Tokens are maximal runs of
//! word characters; punctuation and whitespace separate them.

pub mod error;
pub mod parser;
pub mod tokenize;

pub use error::CorpusError;
pub use parser::{validate_corpus_path, TextCorpus};
pub use tokenize::tokenize;
