//! Compile-time type information.
//!
//! Every codec-aware type implements [`Typed`], which exposes a `'static`
//! [`TypeInfo`] describing its shape. The schema deriver reads only this
//! information and never inspects values.

// -----------------------------------------------------------------------------
// Modules

mod list_info;
mod map_info;
mod opaque_info;
mod option_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use option_info::OptionInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::{MemberInfo, StructInfo};
pub use type_info::{TypeInfo, TypeKind};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
