//! Phonetic encoding.
//!
//! Maps arbitrary words to fixed-width American Soundex codes. Encoding is a
//! pure function: the filtered word is returned alongside the code rather
//! than retained anywhere, so concurrent callers cannot observe each other.
//!
//! # Usage
//!
//! ```rust,ignore
//! use soundseek::phonetic::{encode, PhoneticCode};
//!
//! let encoded = encode("Tymczak").unwrap();
//! assert_eq!(encoded.code, PhoneticCode::parse("T522")?);
//! ```
//!
//! Codes always have the shape `[A-Z][0-9]{3}`. Inputs without any ASCII
//! letter have no phonetic content and encode to `None`.

pub mod code;
pub mod soundex;

pub use code::{CodeError, PhoneticCode};
pub use soundex::{encode, soundex, Encoded};
