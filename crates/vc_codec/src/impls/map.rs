use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::any::Any;
use core::hash::{BuildHasher, Hash};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{KeyValue, Map, MapInsertError, ReflectMut, ReflectRef};

/// Unpacks an entry record built by `new_entry`.
fn unpack_entry<K, V>(entry: Box<dyn Reflect>) -> Result<KeyValue<K, V>, MapInsertError>
where
    KeyValue<K, V>: Reflect + TypePath,
{
    let entry: Box<dyn Any> = entry;
    entry
        .downcast::<KeyValue<K, V>>()
        .map(|entry| *entry)
        .map_err(|_| MapInsertError::EntryType {
            expected: <KeyValue<K, V> as TypePath>::type_path(),
        })
}

macro_rules! impl_map_reflect {
    (
        $ty:ty, $module:literal, $ident:literal,
        key: [$($key:tt)*],
        extra: [$($bounds:tt)*],
        entry: $($entry:ident)::+
    ) => {
        impl<K: Typed, V: Typed, $($bounds)*> TypePath for $ty {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[
                        $module, "::", $ident, "<", K::type_path(), ", ", V::type_path(), ">",
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$ident, "<", K::type_name(), ", ", V::type_name(), ">"])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<K, V, $($bounds)*> Typed for $ty
        where
            K: Typed + Reflect + Default + $($key)*,
            V: Typed + Reflect + Default,
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V, $($bounds)*> Reflect for $ty
        where
            K: Typed + Reflect + Default + $($key)*,
            V: Typed + Reflect + Default,
        {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Map(self)
            }
        }

        impl<K, V, $($bounds)*> Map for $ty
        where
            K: Typed + Reflect + Default + $($key)*,
            V: Typed + Reflect + Default,
        {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(
                    self.iter()
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }

            #[inline]
            fn clear(&mut self) {
                <$ty>::clear(self);
            }

            fn new_entry(&self) -> Box<dyn Reflect> {
                Box::new(KeyValue::<K, V>::default())
            }

            fn insert_entry(&mut self, entry: Box<dyn Reflect>) -> Result<(), MapInsertError> {
                let KeyValue { key, value } = unpack_entry::<K, V>(entry)?;
                match self.entry(key) {
                    $($entry)::+::Occupied(_) => Err(MapInsertError::DuplicateKey),
                    $($entry)::+::Vacant(slot) => {
                        slot.insert(value);
                        Ok(())
                    }
                }
            }
        }
    };
}

impl_map_reflect!(
    std::collections::HashMap<K, V, S>,
    "std::collections",
    "HashMap",
    key: [Eq + Hash],
    extra: [S: BuildHasher + Default + 'static],
    entry: std::collections::hash_map::Entry
);

impl_map_reflect!(
    hashbrown::HashMap<K, V, S>,
    "hashbrown",
    "HashMap",
    key: [Eq + Hash],
    extra: [S: BuildHasher + Default + 'static],
    entry: hashbrown::hash_map::Entry
);

impl_map_reflect!(
    BTreeMap<K, V>,
    "alloc::collections",
    "BTreeMap",
    key: [Ord],
    extra: [],
    entry: alloc::collections::btree_map::Entry
);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;

    use crate::info::{TypeKind, TypePath, Typed};
    use crate::ops::{KeyValue, Map, MapInsertError};

    #[test]
    fn insert_entries() {
        let mut map: BTreeMap<u8, bool> = BTreeMap::new();

        let mut entry = Map::new_entry(&map);
        *entry.downcast_mut::<KeyValue<u8, bool>>().unwrap() = KeyValue::new(3, true);
        assert_eq!(Map::insert_entry(&mut map, entry), Ok(()));
        assert_eq!(map.get(&3), Some(&true));

        let again = Box::new(KeyValue::new(3_u8, false));
        assert_eq!(Map::insert_entry(&mut map, again), Err(MapInsertError::DuplicateKey));
        assert_eq!(map.get(&3), Some(&true));

        assert_eq!(
            Map::insert_entry(&mut map, Box::new(7_u8)),
            Err(MapInsertError::EntryType {
                expected: <KeyValue<u8, bool> as TypePath>::type_path(),
            })
        );
        assert_eq!(Map::len(&map), 1);
    }

    #[test]
    fn info() {
        let info = <std::collections::HashMap<u8, i32> as Typed>::type_info();
        assert_eq!(info.kind(), TypeKind::Map);

        let map = info.as_map().unwrap();
        assert_eq!(map.key_info().kind(), TypeKind::Scalar);
        assert_eq!(map.entry_info().kind(), TypeKind::Struct);
    }
}
