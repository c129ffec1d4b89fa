//! Parsing of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod tabular_derive;
mod tabular_meta;
mod type_parser;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use tabular_derive::{TabularDerive, TabularEnum, TabularStruct};
pub(crate) use tabular_meta::TabularMeta;
pub(crate) use type_parser::TypeParser;
