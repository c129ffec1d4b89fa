use crate::info::{Type, TypeInfo, TypePath, Typed};
use crate::ops::KeyValue;

/// A container for compile-time map info.
///
/// Besides key and value, records the synthetic [`KeyValue`] record used to
/// encode each entry as a nested object.
#[derive(Debug, Clone)]
pub struct MapInfo {
    ty: Type,
    key: fn() -> &'static TypeInfo,
    value: fn() -> &'static TypeInfo,
    entry: fn() -> &'static TypeInfo,
}

impl MapInfo {
    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<M, K, V>() -> Self
    where
        M: TypePath,
        KeyValue<K, V>: Typed,
        K: Typed,
        V: Typed,
    {
        Self {
            ty: Type::of::<M>(),
            key: K::type_info,
            value: V::type_info,
            entry: <KeyValue<K, V> as Typed>::type_info,
        }
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the keys.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key)()
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value)()
    }

    /// Returns the [`TypeInfo`] of the synthetic entry record.
    #[inline]
    pub fn entry_info(&self) -> &'static TypeInfo {
        (self.entry)()
    }
}
