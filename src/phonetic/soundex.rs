//! American Soundex encoder.
//!
//! Words are reduced to their ASCII letters, the first letter is kept, and
//! the remaining letters are mapped to sound classes:
//!
//! | Letters | Class |
//! |---------|-------|
//! | a e i o u | `0` (no contribution) |
//! | b f p v | `1` |
//! | c g j k q s x z | `2` |
//! | d t | `3` |
//! | l | `4` |
//! | m n | `5` |
//! | r | `6` |
//! | h w y | separator |
//!
//! Adjacent identical classes collapse into one, separators let identical
//! classes on either side of them merge, and vowel placeholders are removed
//! before the result is padded or truncated to three digits.
//!
//! # Example
//!
//! ```rust,ignore
//! use soundseek::phonetic::encode;
//!
//! let encoded = encode("123abc").unwrap();
//! assert_eq!(encoded.word, "abc");
//! assert_eq!(encoded.code.to_string(), "A120");
//! ```

use smallvec::SmallVec;

use super::code::PhoneticCode;

/// Class digit for vowels; dropped from the final code.
const VOWEL: u8 = b'0';

/// Sound class of a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SoundClass {
    /// A class digit `'0'..='6'`.
    Digit(u8),
    /// One of `h`, `w`, `y`, kept as its lowercase letter.
    Separator(u8),
}

#[inline]
fn classify(letter: u8) -> SoundClass {
    match letter.to_ascii_lowercase() {
        b'a' | b'e' | b'i' | b'o' | b'u' => SoundClass::Digit(VOWEL),
        b'b' | b'f' | b'p' | b'v' => SoundClass::Digit(b'1'),
        b'c' | b'g' | b'j' | b'k' | b'q' | b's' | b'x' | b'z' => SoundClass::Digit(b'2'),
        b'd' | b't' => SoundClass::Digit(b'3'),
        b'l' => SoundClass::Digit(b'4'),
        b'm' | b'n' => SoundClass::Digit(b'5'),
        b'r' => SoundClass::Digit(b'6'),
        other => SoundClass::Separator(other),
    }
}

/// A word together with its phonetic code.
///
/// `word` is the input reduced to its ASCII letters, which is the form the
/// code was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoded {
    /// The input with every non-ASCII-letter character removed.
    pub word: String,
    /// The Soundex code of `word`.
    pub code: PhoneticCode,
}

/// Encodes a word, returning the filtered word and its code.
///
/// Returns `None` when the input contains no ASCII letters.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(encode("lithuania!!").unwrap().code.to_string(), "L350");
/// assert!(encode("!!!").is_none());
/// ```
pub fn encode(word: &str) -> Option<Encoded> {
    let filtered: String = word.chars().filter(char::is_ascii_alphabetic).collect();
    let code = encode_letters(filtered.as_bytes())?;
    Some(Encoded {
        word: filtered,
        code,
    })
}

/// Encodes a word, returning only the code.
pub fn soundex(word: &str) -> Option<PhoneticCode> {
    let letters: SmallVec<[u8; 32]> = word
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .collect();
    encode_letters(&letters)
}

/// Core of the algorithm over a slice of ASCII letters.
fn encode_letters(letters: &[u8]) -> Option<PhoneticCode> {
    let (&first, _) = letters.split_first()?;

    let classes: SmallVec<[SoundClass; 32]> = letters.iter().map(|&b| classify(b)).collect();
    let lead = classes[0];
    let last = classes.len() - 1;

    let mut retained: SmallVec<[u8; 32]> = SmallVec::new();

    for (i, &class) in classes.iter().enumerate().skip(1) {
        // The second letter never repeats the sound of the first.
        if i == 1 && class == lead {
            continue;
        }

        match class {
            SoundClass::Separator(_) => {
                if i == last {
                    continue;
                }
                if let Some(&prev) = retained.last() {
                    if classes[i + 1] == SoundClass::Digit(prev) {
                        retained.pop();
                    }
                }
            }
            SoundClass::Digit(digit) => {
                if retained.last() != Some(&digit) {
                    retained.push(digit);
                }
            }
        }
    }

    let mut digits = [b'0'; 3];
    for (slot, &digit) in digits
        .iter_mut()
        .zip(retained.iter().filter(|&&d| d != VOWEL))
    {
        *slot = digit;
    }

    Some(PhoneticCode::from_parts(first.to_ascii_uppercase(), digits))
}
