use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef};

// Types with an obvious text form that the document format still refuses,
// so that a member using one fails classification with a clear reason.
macro_rules! impl_opaque {
    ($($ty:ty => $name:literal: $reason:literal),* $(,)?) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $name
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>($reason)))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Opaque(self)
            }
        }
    )*};
}

impl_opaque! {
    char => "char": "characters are not a scalar type, use `String`",
    () => "()": "the unit type carries no data",
    usize => "usize": "pointer-sized integers have no portable width",
    isize => "isize": "pointer-sized integers have no portable width",
    u128 => "u128": "128-bit integers are not a scalar type",
    i128 => "i128": "128-bit integers are not a scalar type",
}
