//! The fixed-width phonetic code produced by the encoder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when parsing a [`PhoneticCode`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The input is not exactly four characters long.
    #[error("Phonetic code must be 4 characters, got {0}")]
    InvalidLength(usize),

    /// The leading character is not an uppercase ASCII letter.
    #[error("Phonetic code must start with an uppercase letter, got {0:?}")]
    InvalidLetter(char),

    /// One of the trailing characters is not an ASCII digit.
    #[error("Phonetic code must end with three digits, got {0:?}")]
    InvalidDigit(char),
}

/// A Soundex code: one uppercase letter followed by exactly three digits.
///
/// Values are only constructed by the encoder or by [`PhoneticCode::parse`],
/// both of which enforce the `[A-Z][0-9]{3}` shape, so the accessors below
/// never fail.
///
/// # Example
///
/// ```rust,ignore
/// use soundseek::phonetic::PhoneticCode;
///
/// let code: PhoneticCode = "L350".parse()?;
/// assert_eq!(code.letter(), 'L');
/// assert_eq!(code.magnitude(), 350);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneticCode([u8; 4]);

impl PhoneticCode {
    /// Number of characters in every code.
    pub const LEN: usize = 4;

    /// Builds a code from already-validated parts.
    #[inline]
    pub(crate) fn from_parts(letter: u8, digits: [u8; 3]) -> Self {
        debug_assert!(letter.is_ascii_uppercase());
        debug_assert!(digits.iter().all(u8::is_ascii_digit));
        Self([letter, digits[0], digits[1], digits[2]])
    }

    /// Parses a code such as `"E251"`.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError`] if the input is not an uppercase ASCII letter
    /// followed by three ASCII digits.
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != Self::LEN {
            return Err(CodeError::InvalidLength(chars.len()));
        }
        if !chars[0].is_ascii_uppercase() {
            return Err(CodeError::InvalidLetter(chars[0]));
        }
        if let Some(&bad) = chars[1..].iter().find(|c| !c.is_ascii_digit()) {
            return Err(CodeError::InvalidDigit(bad));
        }

        let b = s.as_bytes();
        Ok(Self([b[0], b[1], b[2], b[3]]))
    }

    /// The leading letter.
    #[inline]
    pub fn letter(&self) -> char {
        self.0[0] as char
    }

    /// The three trailing digits as a string slice.
    #[inline]
    pub fn digits(&self) -> &str {
        // Bytes 1..4 are ASCII digits by construction.
        std::str::from_utf8(&self.0[1..]).unwrap_or("000")
    }

    /// Integer value of the three-digit suffix (`"L350"` → 350).
    #[inline]
    pub fn magnitude(&self) -> u32 {
        self.0[1..]
            .iter()
            .fold(0, |acc, &d| acc * 10 + u32::from(d - b'0'))
    }

    /// Raw bytes of the code.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.digits())
    }
}

impl FromStr for PhoneticCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PhoneticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PhoneticCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let code = PhoneticCode::parse("E251").unwrap();
        assert_eq!(code.letter(), 'E');
        assert_eq!(code.digits(), "251");
        assert_eq!(code.magnitude(), 251);
        assert_eq!(code.to_string(), "E251");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert_eq!(PhoneticCode::parse("E25"), Err(CodeError::InvalidLength(3)));
        assert_eq!(PhoneticCode::parse("e251"), Err(CodeError::InvalidLetter('e')));
        assert_eq!(PhoneticCode::parse("E2X1"), Err(CodeError::InvalidDigit('X')));
        assert_eq!(PhoneticCode::parse("É251"), Err(CodeError::InvalidLetter('É')));
    }

    #[test]
    fn test_magnitude_keeps_leading_zeros_out() {
        assert_eq!(PhoneticCode::parse("G200").unwrap().magnitude(), 200);
        assert_eq!(PhoneticCode::parse("A005").unwrap().magnitude(), 5);
        assert_eq!(PhoneticCode::parse("A000").unwrap().magnitude(), 0);
    }

    #[test]
    fn test_serde_as_string() {
        let code = PhoneticCode::parse("H555").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"H555\"");
        let back: PhoneticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<PhoneticCode>("\"H55\"").is_err());
    }
}
