use core::fmt;

use thiserror::Error;

use crate::info::{ScalarInfo, StructInfo, TypeInfo};

// -----------------------------------------------------------------------------
// TypeMode

/// How a member is stored in a document.
#[derive(Debug, Clone, Copy)]
pub enum TypeMode {
    /// One column of the scalar row.
    ScalarSingle(&'static ScalarInfo),
    /// A `name:` line with tab-separated items.
    ScalarMany { item: &'static ScalarInfo },
    /// A nested object under its type header.
    ObjectSingle(&'static StructInfo),
    /// A collection of nested objects sharing one type header.
    ///
    /// For maps, `item` is the synthetic [`KeyValue`](crate::ops::KeyValue) record.
    ObjectMany {
        item: &'static StructInfo,
        shape: CollectionShape,
    },
    /// Cannot be encoded.
    Unsupported(Unsupported),
}

/// The container behind [`TypeMode::ObjectMany`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionShape {
    List,
    Map,
}

impl fmt::Display for CollectionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
        }
    }
}

/// A type rejected by [`classify`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("`{type_path}` is not supported: {reason}")]
pub struct Unsupported {
    pub type_path: &'static str,
    pub reason: &'static str,
}

// -----------------------------------------------------------------------------
// classify

/// Decides how values of a type are stored.
///
/// `Option<T>` is a nullable slot for objects and collections, list items
/// may be nullable objects, and every other nesting is rejected.
///
/// # Examples
///
/// ```
/// use vc_codec::info::Typed;
/// use vc_codec::schema::{TypeMode, classify};
///
/// assert!(matches!(classify(<f32>::type_info()), TypeMode::ScalarSingle(_)));
/// assert!(matches!(classify(<Vec<String>>::type_info()), TypeMode::ScalarMany { .. }));
/// assert!(matches!(classify(<Vec<Vec<u8>>>::type_info()), TypeMode::Unsupported(_)));
/// assert!(matches!(classify(<usize>::type_info()), TypeMode::Unsupported(_)));
/// ```
pub fn classify(info: &'static TypeInfo) -> TypeMode {
    let unsupported = |reason| {
        TypeMode::Unsupported(Unsupported {
            type_path: info.type_path(),
            reason,
        })
    };

    match info {
        TypeInfo::Scalar(scalar) => TypeMode::ScalarSingle(scalar),
        TypeInfo::Struct(object) => TypeMode::ObjectSingle(object),
        TypeInfo::List(list) => match list.item_info() {
            TypeInfo::Scalar(item) => TypeMode::ScalarMany { item },
            TypeInfo::Struct(item) => TypeMode::ObjectMany {
                item,
                shape: CollectionShape::List,
            },
            TypeInfo::Optional(item) => match item.inner_info() {
                TypeInfo::Struct(item) => TypeMode::ObjectMany {
                    item,
                    shape: CollectionShape::List,
                },
                _ => unsupported("only objects may be absent inside a collection"),
            },
            TypeInfo::List(_) | TypeInfo::Map(_) => {
                unsupported("collections of collections are not supported")
            }
            TypeInfo::Opaque(item) => unsupported(item.reason()),
        },
        TypeInfo::Map(map) => match map.entry_info() {
            TypeInfo::Struct(item) => TypeMode::ObjectMany {
                item,
                shape: CollectionShape::Map,
            },
            _ => unsupported("map entries must be records"),
        },
        TypeInfo::Optional(optional) => match optional.inner_info() {
            TypeInfo::Scalar(_) => unsupported("a scalar has no absent encoding"),
            TypeInfo::Optional(_) => unsupported("nested optionals are not supported"),
            inner => classify(inner),
        },
        TypeInfo::Opaque(opaque) => unsupported(opaque.reason()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, VecDeque};
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{CollectionShape, TypeMode, classify};
    use crate::derive::Tabular;
    use crate::info::Typed;

    #[derive(Tabular, Default)]
    struct Leaf {
        id: u8,
    }

    fn mode<T: Typed>() -> TypeMode {
        classify(T::type_info())
    }

    #[test]
    fn scalars() {
        assert!(matches!(mode::<i64>(), TypeMode::ScalarSingle(_)));
        assert!(matches!(mode::<bool>(), TypeMode::ScalarSingle(_)));
        assert!(matches!(mode::<String>(), TypeMode::ScalarSingle(_)));
        assert!(matches!(mode::<[f64; 3]>(), TypeMode::ScalarMany { .. }));
        assert!(matches!(mode::<VecDeque<u16>>(), TypeMode::ScalarMany { .. }));
        assert!(matches!(mode::<Option<Vec<u8>>>(), TypeMode::ScalarMany { .. }));
    }

    #[test]
    fn objects() {
        assert!(matches!(mode::<Leaf>(), TypeMode::ObjectSingle(_)));
        assert!(matches!(mode::<Option<Leaf>>(), TypeMode::ObjectSingle(_)));
        assert!(matches!(
            mode::<Vec<Option<Leaf>>>(),
            TypeMode::ObjectMany { shape: CollectionShape::List, .. }
        ));

        let TypeMode::ObjectMany { item, shape } = mode::<BTreeMap<String, Leaf>>() else {
            panic!("maps are object collections");
        };
        assert_eq!(shape, CollectionShape::Map);
        assert_eq!(item.len(), 2);
    }

    #[test]
    fn rejected() {
        let reason = |mode: TypeMode| match mode {
            TypeMode::Unsupported(unsupported) => unsupported.reason,
            other => panic!("unexpected {other:?}"),
        };

        assert!(reason(mode::<char>()).contains("String"));
        assert!(reason(mode::<Vec<Vec<Leaf>>>()).contains("collections of collections"));
        assert!(reason(mode::<Option<u32>>()).contains("absent"));
        assert!(reason(mode::<Vec<Option<u32>>>()).contains("absent"));
        assert!(reason(mode::<Option<Option<Leaf>>>()).contains("nested"));
        assert!(reason(mode::<Vec<usize>>()).contains("pointer-sized"));
    }
}
