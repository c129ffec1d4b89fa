use crate::info::{Type, TypeInfo, TypePath, Typed};

/// A container for compile-time list and array info.
///
/// # Examples
///
/// ```
/// use vc_codec::info::Typed;
///
/// let info = <[u8; 3] as Typed>::type_info().as_list().unwrap();
/// assert_eq!(info.fixed_len(), Some(3));
///
/// let info = <Vec<u8> as Typed>::type_info().as_list().unwrap();
/// assert_eq!(info.fixed_len(), None);
/// ```
#[derive(Debug, Clone)]
pub struct ListInfo {
    ty: Type,
    item: fn() -> &'static TypeInfo,
    fixed_len: Option<usize>,
}

impl ListInfo {
    /// Creates a new [`ListInfo`] for a growable sequence of `T`.
    #[inline]
    pub const fn new<L: TypePath, T: Typed>() -> Self {
        Self {
            ty: Type::of::<L>(),
            item: T::type_info,
            fixed_len: None,
        }
    }

    /// Creates a new [`ListInfo`] for an array of exactly `len` items.
    #[inline]
    pub const fn fixed<L: TypePath, T: Typed>(len: usize) -> Self {
        Self {
            ty: Type::of::<L>(),
            item: T::type_info,
            fixed_len: Some(len),
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item)()
    }

    /// Returns the required length for arrays.
    #[inline]
    pub const fn fixed_len(&self) -> Option<usize> {
        self.fixed_len
    }
}
