use crate::info::{Type, TypePath};

/// Info for a type the codec can name but not encode.
///
/// Classification rejects these with the recorded reason, so a member of
/// such a type fails schema derivation instead of failing to compile.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    reason: &'static str,
}

impl OpaqueInfo {
    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath>(reason: &'static str) -> Self {
        Self {
            ty: Type::of::<T>(),
            reason,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns why the type cannot be encoded.
    #[inline]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}
