//! Encoding values into documents.

mod config;
mod encoder;
mod error;

pub use config::EncoderConfig;
pub use encoder::Encoder;
pub use error::EncodeError;
