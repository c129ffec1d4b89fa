use thiserror::Error;

use crate::schema::Unsupported;

/// An error returned when a type cannot be described by a schema.
///
/// Schema errors are fatal: no document is produced or consumed for a type
/// graph that contains one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("`{type_path}` is not a struct")]
    NotAStruct { type_path: &'static str },
    #[error("member `{member}` of `{owner}`: {source}")]
    Unsupported {
        owner: &'static str,
        member: &'static str,
        source: Unsupported,
    },
    #[error("the descriptor of `{owner}` names member `{member}`, which the type does not have")]
    MissingDescriptorMember {
        owner: &'static str,
        member: &'static str,
    },
    #[error("`{owner}` declares member `{member}` more than once")]
    DuplicateMember {
        owner: &'static str,
        member: &'static str,
    },
    #[error("`{owner}` contains itself through member `{member}`")]
    Recursive {
        owner: &'static str,
        member: &'static str,
    },
}
