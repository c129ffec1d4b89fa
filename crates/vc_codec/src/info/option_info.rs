use crate::info::{Type, TypeInfo, TypePath, Typed};

/// A container for compile-time info of a nullable slot, such as `Option<T>`.
#[derive(Debug, Clone)]
pub struct OptionInfo {
    ty: Type,
    inner: fn() -> &'static TypeInfo,
}

impl OptionInfo {
    /// Creates a new [`OptionInfo`] wrapping `T`.
    #[inline]
    pub const fn new<O: TypePath, T: Typed>() -> Self {
        Self {
            ty: Type::of::<O>(),
            inner: T::type_info,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the wrapped type.
    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner)()
    }
}
