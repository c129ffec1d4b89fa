//! Kind traits giving uniform access to reflected values.

// -----------------------------------------------------------------------------
// Modules

mod key_value;
mod list_ops;
mod map_ops;
mod option_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use key_value::{KEY_MEMBER, KeyValue, VALUE_MEMBER};
pub use list_ops::{LengthError, List, ListIter};
pub use map_ops::{Map, MapInsertError};
pub use option_ops::Optional;
pub use scalar_ops::{Scalar, ScalarError};
pub use struct_ops::Struct;

use crate::Reflect;
use crate::info::TypeKind;

// -----------------------------------------------------------------------------
// ReflectRef / ReflectMut

/// An immutable view of a reflected value, by kind.
pub enum ReflectRef<'a> {
    Scalar(&'a dyn Scalar),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Struct(&'a dyn Struct),
    Opaque(&'a dyn Reflect),
}

/// A mutable view of a reflected value, by kind.
pub enum ReflectMut<'a> {
    Scalar(&'a mut dyn Scalar),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Struct(&'a mut dyn Struct),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_kind_fn {
    ($name:ident) => {
        impl $name<'_> {
            /// Returns the [`TypeKind`] of this view.
            pub fn kind(&self) -> TypeKind {
                match self {
                    Self::Scalar(_) => TypeKind::Scalar,
                    Self::List(_) => TypeKind::List,
                    Self::Map(_) => TypeKind::Map,
                    Self::Optional(_) => TypeKind::Optional,
                    Self::Struct(_) => TypeKind::Struct,
                    Self::Opaque(_) => TypeKind::Opaque,
                }
            }
        }
    };
}

impl_kind_fn!(ReflectRef);
impl_kind_fn!(ReflectMut);
