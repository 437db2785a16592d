//! Plain-text corpus loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::error::{CorpusError, Result};
use super::tokenize::tokenize;

/// Checks that `path` names an existing `.txt` file.
///
/// # Errors
///
/// Returns [`CorpusError::NotFound`], [`CorpusError::NotAFile`] or
/// [`CorpusError::NotText`] accordingly.
pub fn validate_corpus_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CorpusError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CorpusError::NotAFile(path.to_path_buf()));
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Ok(()),
        _ => Err(CorpusError::NotText(path.to_path_buf())),
    }
}

/// Tokens of a text document, in order of appearance.
///
/// Repeated words are kept; deduplication is the index builder's job.
///
/// # Example
///
/// ```rust,ignore
/// use soundseek::corpus::TextCorpus;
///
/// let corpus = TextCorpus::load("data/story.txt")?;
/// println!("{} tokens", corpus.total_tokens());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCorpus {
    /// Tokens in document order
    pub tokens: Vec<String>,
}

impl TextCorpus {
    /// Load and tokenize a `.txt` file.
    ///
    /// The file is read line by line; tokens never span line breaks.
    ///
    /// # Errors
    ///
    /// Returns an error if the path fails [`validate_corpus_path`] or the
    /// file cannot be read as UTF-8.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_corpus_path(path)?;

        let io_error = |source| CorpusError::Io {
            path: PathBuf::from(path),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let reader = BufReader::new(file);

        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(io_error)?;
            tokens.extend(tokenize(&line).map(str::to_owned));
        }

        tracing::debug!(path = %path.display(), tokens = tokens.len(), "loaded corpus");
        Ok(Self { tokens })
    }

    /// Tokenize in-memory text.
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: tokenize(text).map(str::to_owned).collect(),
        }
    }

    /// Tokens in document order.
    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens, repeats included.
    #[inline]
    pub fn total_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Consume the corpus, yielding its tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}
