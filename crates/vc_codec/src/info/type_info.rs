use core::fmt;

use crate::info::{ListInfo, MapInfo, OpaqueInfo, OptionInfo, ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// TypeKind

/// The shape of a reflected type, as seen by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    List,
    Map,
    Optional,
    Struct,
    Opaque,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Optional => f.pad("Optional"),
            Self::Struct => f.pad("Struct"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a codec-aware type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info) when the
/// type is known, or [`DynamicTyped::reflect_type_info`] from a `dyn Reflect`.
///
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    List(ListInfo),
    Map(MapInfo),
    Optional(OptionInfo),
    Struct(StructInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`] if this is a `", stringify!($kind), "`.")]
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_optional: Optional => OptionInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the [`TypeKind`].
    #[inline]
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::List(_) => TypeKind::List,
            Self::Map(_) => TypeKind::Map,
            Self::Optional(_) => TypeKind::Optional,
            Self::Struct(_) => TypeKind::Struct,
            Self::Opaque(_) => TypeKind::Opaque,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// See [`TypePath::type_path`](crate::info::TypePath::type_path).
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// See [`TypePath::type_name`](crate::info::TypePath::type_name).
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }
}
