use core::any::Any;

use crate::info::{DynamicTypePath, DynamicTyped, TypeKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The object-safe view of a codec-aware value.
///
/// The schema is derived from [`Typed`](crate::info::Typed); `Reflect` gives
/// the encoder and decoder access to the value itself, through one of the
/// kind traits in [`ops`](crate::ops).
///
/// Usually implemented by [`#[derive(Tabular)]`](crate::derive::Tabular).
pub trait Reflect: DynamicTypePath + DynamicTyped + Any {
    /// Returns an immutable view of the value's kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the value's kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns the [`TypeKind`] of the value.
    #[inline]
    fn reflect_kind(&self) -> TypeKind {
        self.reflect_ref().kind()
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}
