use crate::info::{Type, TypePath};

/// The text encoding family of a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Signed or unsigned integer, written in decimal.
    Integer,
    /// Floating point, written in its shortest round-trip form.
    Float,
    /// `1` or `0`.
    Bool,
    /// Quoted and escaped text.
    String,
    /// Field-less enum, written as its discriminant.
    Enum,
}

/// A container for compile-time scalar info.
///
/// # Examples
///
/// ```
/// use vc_codec::info::{ScalarKind, Typed};
///
/// let info = <u16 as Typed>::type_info().as_scalar().unwrap();
/// assert_eq!(info.kind(), ScalarKind::Integer);
/// ```
#[derive(Debug, Clone)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    /// Creates a new [`ScalarInfo`].
    #[inline]
    pub const fn new<T: TypePath>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`ScalarKind`].
    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}
