use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// MemberInfo

/// Information for a named member of a struct.
///
/// # Examples
///
/// ```
/// use vc_codec::{derive::Tabular, info::Typed};
///
/// #[derive(Tabular, Default)]
/// struct Foo {
///     #[tabular(rename = "Count")]
///     count: u32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let member = info.member_at(0).unwrap();
///
/// assert!(member.type_is::<u32>());
/// assert_eq!(member.name(), "Count");
/// ```
#[derive(Clone, Debug)]
pub struct MemberInfo {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
}

impl MemberInfo {
    /// Creates a new [`MemberInfo`] for the given member `name` and type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            type_info: T::type_info,
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the member name used in documents.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the member's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// StructInfo

/// A container for compile-time struct info.
///
/// Members are kept in declaration order, excluding skipped fields.
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    header_name: Option<&'static str>,
    members: Box<[MemberInfo]>,
}

impl StructInfo {
    /// Creates a new [`StructInfo`].
    pub fn new<T: TypePath>(members: &[MemberInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            header_name: None,
            members: members.into(),
        }
    }

    /// Overrides the name written in type headers, see [`header_name`](Self::header_name).
    #[inline]
    pub fn with_header_name(mut self, name: &'static str) -> Self {
        self.header_name = Some(name);
        self
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the name written after the marker in type headers,
    /// [`TypePath::type_name`] unless overridden.
    #[inline]
    pub fn header_name(&self) -> &'static str {
        self.header_name.unwrap_or_else(|| self.ty.name())
    }

    /// Returns the [`MemberInfo`] for the given `name`, if present.
    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Returns the [`MemberInfo`] at the given index, if present.
    #[inline]
    pub fn member_at(&self, index: usize) -> Option<&MemberInfo> {
        self.members.get(index)
    }

    /// Returns an iterator over the members in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &MemberInfo> {
        self.members.iter()
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }
}
