//! Uniform member access for the encoder and decoder.
//!
//! Objects are either real structs or borrowed map entries. Both are read
//! through [`ObjectRef`], so the grammar code never sees the difference.

use thiserror::Error;

use crate::Reflect;
use crate::info::{MemberInfo, StructInfo, TypeKind};
use crate::ops::{KEY_MEMBER, List, Map, ReflectMut, ReflectRef, Scalar, Struct, VALUE_MEMBER};

// -----------------------------------------------------------------------------
// AccessError

/// An error returned when a value does not match its schema.
///
/// Derived types never produce these; they guard hand-written implementations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("`{owner}` has no member `{member}`")]
    MissingMember {
        owner: &'static str,
        member: &'static str,
    },
    #[error("member `{member}` of `{owner}` is a {found}, expected a {expected}")]
    KindMismatch {
        owner: &'static str,
        member: &'static str,
        expected: TypeKind,
        found: TypeKind,
    },
}

fn mismatch(owner: &StructInfo, member: &MemberInfo, expected: TypeKind, found: TypeKind) -> AccessError {
    AccessError::KindMismatch {
        owner: owner.ty().path(),
        member: member.name(),
        expected,
        found,
    }
}

// -----------------------------------------------------------------------------
// Reading

/// Returns the value behind an optional slot, or the value itself.
///
/// # Examples
///
/// ```
/// use vc_codec::{Reflect, access::present};
///
/// let some: Option<String> = Some("a".into());
/// let none: Option<String> = None;
///
/// assert!(present(&some).unwrap().is::<String>());
/// assert!(present(&none).is_none());
/// assert!(present(&3_u8).is_some());
/// ```
pub fn present(value: &dyn Reflect) -> Option<&dyn Reflect> {
    match value.reflect_ref() {
        ReflectRef::Optional(optional) => optional.get(),
        _ => Some(value),
    }
}

/// A readable object.
#[derive(Clone, Copy)]
pub enum ObjectRef<'a> {
    /// A struct value.
    Struct(&'a dyn Struct),
    /// A map entry, read as a `Key`/`Value` record.
    Entry {
        key: &'a dyn Reflect,
        value: &'a dyn Reflect,
    },
}

impl<'a> ObjectRef<'a> {
    /// Views `value` as an object of type `owner`.
    pub fn of(value: &'a dyn Reflect, owner: &StructInfo) -> Result<Self, AccessError> {
        match value.reflect_ref() {
            ReflectRef::Struct(object) => Ok(Self::Struct(object)),
            other => Err(AccessError::KindMismatch {
                owner: owner.ty().path(),
                member: "",
                expected: TypeKind::Struct,
                found: other.kind(),
            }),
        }
    }

    /// Returns the value of `member`.
    pub fn get(&self, owner: &StructInfo, member: &MemberInfo) -> Result<&'a dyn Reflect, AccessError> {
        let value = match *self {
            Self::Struct(object) => object.field(member.name()),
            Self::Entry { key, value } => match member.name() {
                KEY_MEMBER => Some(key),
                VALUE_MEMBER => Some(value),
                _ => None,
            },
        };
        value.ok_or(AccessError::MissingMember {
            owner: owner.ty().path(),
            member: member.name(),
        })
    }

    /// Returns the value of a scalar `member`.
    pub fn scalar(&self, owner: &StructInfo, member: &MemberInfo) -> Result<&'a dyn Scalar, AccessError> {
        match self.get(owner, member)?.reflect_ref() {
            ReflectRef::Scalar(scalar) => Ok(scalar),
            other => Err(mismatch(owner, member, TypeKind::Scalar, other.kind())),
        }
    }
}

/// Views a present member value as a scalar.
pub fn as_scalar<'a>(
    value: &'a dyn Reflect,
    owner: &StructInfo,
    member: &MemberInfo,
) -> Result<&'a dyn Scalar, AccessError> {
    match value.reflect_ref() {
        ReflectRef::Scalar(scalar) => Ok(scalar),
        other => Err(mismatch(owner, member, TypeKind::Scalar, other.kind())),
    }
}

/// Views a present member value as a list.
pub fn as_list<'a>(
    value: &'a dyn Reflect,
    owner: &StructInfo,
    member: &MemberInfo,
) -> Result<&'a dyn List, AccessError> {
    match value.reflect_ref() {
        ReflectRef::List(list) => Ok(list),
        other => Err(mismatch(owner, member, TypeKind::List, other.kind())),
    }
}

// -----------------------------------------------------------------------------
// Writing

/// A writable object.
pub struct ObjectMut<'a>(&'a mut dyn Struct);

/// A writable collection of objects.
pub enum CollectionMut<'a> {
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
}

impl<'a> ObjectMut<'a> {
    /// Views `slot` as an object, filling an optional slot with a default
    /// value first.
    pub fn materialize(slot: &'a mut dyn Reflect, owner: &StructInfo) -> Result<Self, AccessError> {
        let found = match slot.reflect_mut() {
            ReflectMut::Struct(object) => return Ok(Self(object)),
            ReflectMut::Optional(optional) => match optional.insert_default().reflect_mut() {
                ReflectMut::Struct(object) => return Ok(Self(object)),
                other => other.kind(),
            },
            other => other.kind(),
        };
        Err(AccessError::KindMismatch {
            owner: owner.ty().path(),
            member: "",
            expected: TypeKind::Struct,
            found,
        })
    }

    /// Returns the slot of `member`.
    pub fn get_mut(&mut self, owner: &StructInfo, member: &MemberInfo) -> Result<&mut dyn Reflect, AccessError> {
        self.0
            .field_mut(member.name())
            .ok_or(AccessError::MissingMember {
                owner: owner.ty().path(),
                member: member.name(),
            })
    }

    /// Returns the slot of a scalar `member`.
    pub fn scalar_mut(&mut self, owner: &StructInfo, member: &MemberInfo) -> Result<&mut dyn Scalar, AccessError> {
        as_scalar_mut(self.get_mut(owner, member)?, owner, member)
    }

    /// Returns the collection behind `member`, filling an optional slot first.
    pub fn collection_mut(
        &mut self,
        owner: &StructInfo,
        member: &MemberInfo,
    ) -> Result<CollectionMut<'_>, AccessError> {
        let slot = self.get_mut(owner, member)?;
        let found = match slot.reflect_mut() {
            ReflectMut::List(list) => return Ok(CollectionMut::List(list)),
            ReflectMut::Map(map) => return Ok(CollectionMut::Map(map)),
            ReflectMut::Optional(optional) => match optional.insert_default().reflect_mut() {
                ReflectMut::List(list) => return Ok(CollectionMut::List(list)),
                ReflectMut::Map(map) => return Ok(CollectionMut::Map(map)),
                other => other.kind(),
            },
            other => other.kind(),
        };
        Err(mismatch(owner, member, TypeKind::List, found))
    }
}

/// Views a member slot as a scalar.
pub fn as_scalar_mut<'a>(
    slot: &'a mut dyn Reflect,
    owner: &StructInfo,
    member: &MemberInfo,
) -> Result<&'a mut dyn Scalar, AccessError> {
    match slot.reflect_mut() {
        ReflectMut::Scalar(scalar) => Ok(scalar),
        other => Err(mismatch(owner, member, TypeKind::Scalar, other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{AccessError, CollectionMut, ObjectMut, ObjectRef};
    use crate::Reflect;
    use crate::derive::Tabular;
    use crate::info::{Typed, TypeKind};
    use crate::ops::KeyValue;

    #[derive(Tabular, Default)]
    struct Pair {
        left: i32,
        items: Option<alloc::vec::Vec<u8>>,
    }

    #[test]
    fn read_struct_and_entry() {
        let pair = Pair { left: 5, items: None };
        let info = Pair::type_info().as_struct().unwrap();
        let object = ObjectRef::of(&pair, info).unwrap();
        let left = info.member("left").unwrap();
        assert_eq!(object.get(info, left).unwrap().downcast_ref::<i32>(), Some(&5));

        let entry_info = <KeyValue<String, u8>>::type_info().as_struct().unwrap();
        let (key, value) = (String::from("k"), 9_u8);
        let entry = ObjectRef::Entry { key: &key, value: &value };
        let value_member = entry_info.member("Value").unwrap();
        assert_eq!(
            entry.get(entry_info, value_member).unwrap().downcast_ref::<u8>(),
            Some(&9)
        );

        assert!(matches!(
            entry.scalar(entry_info, info.member("items").unwrap()),
            Err(AccessError::MissingMember { member: "items", .. })
        ));
    }

    #[test]
    fn write_fills_optional_slots() {
        let mut pair = Pair::default();
        let info = Pair::type_info().as_struct().unwrap();
        let items = info.member("items").unwrap();

        let mut object = ObjectMut::materialize(&mut pair, info).unwrap();
        match object.collection_mut(info, items).unwrap() {
            CollectionMut::List(list) => list.reset(2).unwrap(),
            CollectionMut::Map(_) => panic!("expected a list"),
        }
        assert_eq!(pair.items.as_deref(), Some(&[0, 0][..]));

        let mut number = 1_u8;
        let err = ObjectMut::materialize(&mut number, info).err().unwrap();
        assert!(matches!(err, AccessError::KindMismatch { found: TypeKind::Scalar, .. }));
        assert!((&number as &dyn Reflect).is::<u8>());
    }
}
