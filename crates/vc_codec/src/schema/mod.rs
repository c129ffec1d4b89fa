//! Schema derivation.
//!
//! A [`Schema`] splits the members of a struct into scalars, scalar
//! collections and nested object groups. It is derived once per type from
//! [`TypeInfo`](crate::info::TypeInfo), after consulting the special-type
//! [descriptors](TypeDescriptor), and cached for the process lifetime.

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod classify;
mod descriptor;
mod error;
mod schema;

// -----------------------------------------------------------------------------
// Exports

pub use classify::{CollectionShape, TypeMode, Unsupported, classify};
pub use descriptor::{
    DescriptorKey, RegisterError, TypeDescriptor, find_descriptor, register_descriptor,
};
pub use error::SchemaError;
pub use schema::{NestedGroup, NestedMember, ScalarCollection, Schema};
