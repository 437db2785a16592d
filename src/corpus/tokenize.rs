//! Word tokenization.

/// Returns true for characters that may appear inside a token.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits text into word tokens, in order of appearance.
///
/// A token is a maximal run of word characters (Unicode letters and digits,
/// plus underscore). Tokens may still contain non-letters; the encoder
/// discards those.
///
/// # Example
///
/// ```rust,ignore
/// let tokens: Vec<_> = tokenize("Hello oxylabs! Welcome to testing.").collect();
/// assert_eq!(tokens, ["Hello", "oxylabs", "Welcome", "to", "testing"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}
