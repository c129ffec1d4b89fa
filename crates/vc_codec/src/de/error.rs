use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::access::AccessError;
use crate::ops::{LengthError, MapInsertError, ScalarError};
use crate::schema::SchemaError;

// -----------------------------------------------------------------------------
// GrammarError

/// A line that does not have the shape expected at its position.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GrammarError {
    #[error("the document is empty")]
    EmptyDocument,
    #[error("the scalar row is missing")]
    MissingScalarRow,
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("expected a `name:` member line")]
    ExpectedMemberLine,
    #[error("expected the scalar row of a collection element")]
    ExpectedElement,
}

// -----------------------------------------------------------------------------
// DecodeError

/// An error that aborts decoding. No partial value is returned.
///
/// Errors found in the document carry its 1-based line number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("`{type_path}` cannot be decoded as a document root: {reason}")]
    UnsupportedRoot {
        type_path: &'static str,
        reason: &'static str,
    },
    #[error("the root object is absent")]
    AbsentRoot,
    #[error("line {line}: {kind}")]
    Malformed { line: usize, kind: GrammarError },
    #[error("line {line}: member `{member}` of `{owner}`: {source}")]
    Scalar {
        line: usize,
        owner: &'static str,
        member: &'static str,
        source: ScalarError,
    },
    #[error("line {line}: an object of `{owner}` cannot be absent here")]
    AbsentValue { line: usize, owner: &'static str },
    #[error("line {line}: member `{member}` of `{owner}`: {source}")]
    LengthMismatch {
        line: usize,
        owner: &'static str,
        member: &'static str,
        source: LengthError,
    },
    #[error("line {line}: duplicate key in map member `{member}` of `{owner}`")]
    DuplicateKey {
        line: usize,
        owner: &'static str,
        member: &'static str,
    },
    #[error("line {line}: map member `{member}` of `{owner}`: {source}")]
    MapEntry {
        line: usize,
        owner: &'static str,
        member: &'static str,
        source: MapInsertError,
    },
}

impl DecodeError {
    #[inline]
    pub(crate) const fn malformed(line: usize, kind: GrammarError) -> Self {
        Self::Malformed { line, kind }
    }

    /// Returns the document line the error was found on, if any.
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Malformed { line, .. }
            | Self::Scalar { line, .. }
            | Self::AbsentValue { line, .. }
            | Self::LengthMismatch { line, .. }
            | Self::DuplicateKey { line, .. }
            | Self::MapEntry { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// DecodeWarning

/// A recoverable mismatch between a document and the current schema.
///
/// The named column or member is skipped and decoding continues.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DecodeWarning {
    /// A header column that is not a scalar member.
    UnknownColumn { owner: &'static str, column: String },
    /// A member line in the collection block that is not a scalar collection.
    UnknownCollection { owner: &'static str, name: String },
    /// A member line in a nested block that is not a nested member.
    UnknownMember { owner: &'static str, name: String },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColumn { owner, column } => {
                write!(f, "`{owner}` has no scalar member `{column}`, column skipped")
            }
            Self::UnknownCollection { owner, name } => {
                write!(f, "`{owner}` has no scalar collection `{name}`, lines skipped")
            }
            Self::UnknownMember { owner, name } => {
                write!(f, "`{owner}` has no nested member `{name}`, block skipped")
            }
        }
    }
}
