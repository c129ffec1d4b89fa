use alloc::string::String;

use thiserror::Error;

use crate::Reflect;

/// A value with a single-field text encoding.
///
/// Encoded text never contains a tab or a newline, and never starts with
/// the `§` marker.
///
/// # Examples
///
/// ```
/// use vc_codec::ops::Scalar;
///
/// let mut out = String::new();
/// true.encode_text(&mut out);
/// assert_eq!(out, "1");
///
/// let mut text = String::new();
/// text.decode_text("\"a\\tb\"").unwrap();
/// assert_eq!(text, "a\tb");
/// ```
pub trait Scalar: Reflect {
    /// Appends the encoded value to `out`.
    fn encode_text(&self, out: &mut String);

    /// Replaces the value with the one encoded in `text`.
    fn decode_text(&mut self, text: &str) -> Result<(), ScalarError>;
}

/// An error returned when a document field is not a valid scalar encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScalarError {
    #[error("`{text}` is not a valid {expected}")]
    Invalid { text: String, expected: &'static str },
    #[error("string `{text}` is not wrapped in quotes")]
    Unquoted { text: String },
    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),
    #[error("`{text}` is not a discriminant of `{type_path}`")]
    UnknownVariant { text: String, type_path: &'static str },
}

impl ScalarError {
    /// Creates an [`ScalarError::Invalid`] for `text`.
    #[inline]
    pub fn invalid(text: &str, expected: &'static str) -> Self {
        Self::Invalid {
            text: text.into(),
            expected,
        }
    }
}
