//! Decoding documents into values.

mod decoder;
mod error;

pub use decoder::Decoder;
pub use error::{DecodeError, DecodeWarning, GrammarError};
