use thiserror::Error;

use crate::access::AccessError;
use crate::ops::LengthError;
use crate::schema::SchemaError;

/// An error that aborts encoding. No partial document is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("`{type_path}` cannot be a document root: {reason}")]
    UnsupportedRoot {
        type_path: &'static str,
        reason: &'static str,
    },
    #[error("the root value is absent")]
    AbsentRoot,
    #[error("placeholder for member `{member}`: {source}")]
    Placeholder {
        member: &'static str,
        source: LengthError,
    },
}
