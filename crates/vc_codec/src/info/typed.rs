use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Tabular)]`](crate::derive::Tabular) and by the
/// built-in implementations in [`impls`](crate::impls).
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] for non-generic types and
/// [`GenericTypeInfoCell`] when the `static` would be shared across
/// instantiations.
///
/// ```
/// use vc_codec::info::{MemberInfo, StructInfo, TypeInfo, TypePath, Typed};
/// use vc_codec::impls::NonGenericTypeInfoCell;
/// # use vc_codec::{Reflect, ops::{ReflectRef, ReflectMut, Struct}};
///
/// #[derive(Default)]
/// struct Point { x: f32, y: f32 }
///
/// impl TypePath for Point {
///     fn type_path() -> &'static str { "demo::Point" }
///     fn type_name() -> &'static str { "Point" }
///     fn type_ident() -> &'static str { "Point" }
/// }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(StructInfo::new::<Self>(&[
///             MemberInfo::new::<f32>("x"),
///             MemberInfo::new::<f32>("y"),
///         ])))
///     }
/// }
/// # impl Reflect for Point {
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
/// #     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Struct(self) }
/// # }
/// # impl Struct for Point {
/// #     fn field(&self, name: &str) -> Option<&dyn Reflect> {
/// #         match name { "x" => Some(&self.x), "y" => Some(&self.y), _ => None }
/// #     }
/// #     fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
/// #         match name { "x" => Some(&mut self.x), "y" => Some(&mut self.y), _ => None }
/// #     }
/// # }
///
/// assert_eq!(Point::type_info().as_struct().unwrap().len(), 2);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
