use alloc::vec::Vec;
use core::any::{Any, TypeId};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::info::Type;
use crate::ops::{KEY_MEMBER, VALUE_MEMBER};
use crate::schema::cache;

// -----------------------------------------------------------------------------
// TypeDescriptor

/// Identifies the type(s) a [`TypeDescriptor`] applies to.
#[derive(Debug, Clone, Copy)]
pub enum DescriptorKey {
    /// Exactly one type.
    Type(fn() -> TypeId),
    /// Every instantiation of a generic definition, by `module_path::type_ident`.
    Definition(&'static str),
}

/// An explicit, ordered member list replacing a type's own member list.
///
/// Used for types whose declaration cannot carry `#[tabular(skip)]`, or whose
/// member order must differ from the declaration.
///
/// # Examples
///
/// ```
/// use vc_codec::info::Type;
/// use vc_codec::ops::KeyValue;
/// use vc_codec::schema::{TypeDescriptor, find_descriptor};
///
/// let point = TypeDescriptor::of::<[f32; 3]>(&["x", "y", "z"]);
/// assert!(point.matches(&Type::of::<[f32; 3]>()));
///
/// let entry = find_descriptor(&Type::of::<KeyValue<u8, bool>>()).unwrap();
/// assert_eq!(entry.members(), ["Key", "Value"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    key: DescriptorKey,
    members: &'static [&'static str],
}

impl TypeDescriptor {
    /// Creates a descriptor for the type `T`.
    #[inline]
    pub const fn of<T: Any>(members: &'static [&'static str]) -> Self {
        Self {
            key: DescriptorKey::Type(TypeId::of::<T>),
            members,
        }
    }

    /// Creates a descriptor for every instantiation of a generic definition.
    #[inline]
    pub const fn definition(path: &'static str, members: &'static [&'static str]) -> Self {
        Self {
            key: DescriptorKey::Definition(path),
            members,
        }
    }

    /// Returns the [`DescriptorKey`].
    #[inline]
    pub const fn key(&self) -> DescriptorKey {
        self.key
    }

    /// Returns the member names, in document order.
    #[inline]
    pub const fn members(&self) -> &'static [&'static str] {
        self.members
    }

    /// Returns `true` if this descriptor applies to `ty`.
    pub fn matches(&self, ty: &Type) -> bool {
        match self.key {
            DescriptorKey::Type(id) => id() == ty.id(),
            DescriptorKey::Definition(path) => ty.is_definition(path),
        }
    }
}

// -----------------------------------------------------------------------------
// Registry

#[cfg(feature = "auto_register")]
inventory::collect!(TypeDescriptor);

static BUILTIN: [TypeDescriptor; 1] = [TypeDescriptor::definition(
    "vc_codec::ops::KeyValue",
    &[KEY_MEMBER, VALUE_MEMBER],
)];

static REGISTERED: RwLock<Vec<TypeDescriptor>> = RwLock::new(Vec::new());

// Bumped by every successful registration.
static GENERATION: AtomicUsize = AtomicUsize::new(0);

#[inline]
pub(super) fn generation() -> usize {
    GENERATION.load(Ordering::Acquire)
}

/// An error returned by [`register_descriptor`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegisterError {
    #[error("the schema of `{type_path}` is already in use and cannot change")]
    SchemaInUse { type_path: &'static str },
}

/// Registers a descriptor at run time.
///
/// Schemas never change once derived, so registration fails if a type the
/// descriptor applies to already has a cached schema. Later registrations
/// take precedence over earlier ones and over submitted descriptors.
///
/// # Examples
///
/// ```
/// use vc_codec::derive::Tabular;
/// use vc_codec::schema::{TypeDescriptor, register_descriptor};
///
/// #[derive(Tabular, Default)]
/// struct Vec4 { x: f32, y: f32, z: f32, w: f32 }
///
/// register_descriptor(TypeDescriptor::of::<Vec4>(&["x", "y", "z"])).unwrap();
///
/// let text = vc_codec::try_encode(&Vec4 { x: 1.0, y: 2.0, z: 3.0, w: 4.0 }).unwrap();
/// assert_eq!(text, "x\ty\tz\n1\t2\t3");
/// ```
pub fn register_descriptor(descriptor: TypeDescriptor) -> Result<(), RegisterError> {
    let mut registered = REGISTERED.write().unwrap_or_else(PoisonError::into_inner);
    let in_use = cache::find_type_or(
        |ty| descriptor.matches(ty),
        || {
            GENERATION.fetch_add(1, Ordering::AcqRel);
        },
    );
    if let Some(ty) = in_use {
        return Err(RegisterError::SchemaInUse {
            type_path: ty.path(),
        });
    }
    registered.push(descriptor);
    Ok(())
}

/// Returns the descriptor that applies to `ty`, if any.
///
/// Run-time registrations are searched first, newest first, then
/// [`submit_descriptor!`](crate::submit_descriptor) entries, then the
/// built-in table.
pub fn find_descriptor(ty: &Type) -> Option<TypeDescriptor> {
    let registered = REGISTERED.read().unwrap_or_else(PoisonError::into_inner);
    if let Some(found) = registered.iter().rev().find(|d| d.matches(ty)) {
        return Some(*found);
    }
    drop(registered);

    find_submitted(ty).or_else(|| BUILTIN.iter().find(|d| d.matches(ty)).copied())
}

#[cfg(feature = "auto_register")]
fn find_submitted(ty: &Type) -> Option<TypeDescriptor> {
    inventory::iter::<TypeDescriptor>
        .into_iter()
        .find(|d| d.matches(ty))
        .copied()
}

#[cfg(not(feature = "auto_register"))]
#[inline(always)]
fn find_submitted(_: &Type) -> Option<TypeDescriptor> {
    None
}

/// Submits a [`TypeDescriptor`] at link time.
///
/// ```
/// use vc_codec::derive::Tabular;
///
/// #[derive(Tabular, Default)]
/// struct Color { r: u8, g: u8, b: u8, a: u8 }
///
/// vc_codec::submit_descriptor!(Color => ["r", "g", "b"]);
///
/// let text = vc_codec::try_encode(&Color { r: 1, g: 2, b: 3, a: 4 }).unwrap();
/// assert_eq!(text, "r\tg\tb\n1\t2\t3");
/// ```
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! submit_descriptor {
    ($ty:ty => [$($member:literal),* $(,)?]) => {
        $crate::__macro_exports::inventory::submit! {
            $crate::schema::TypeDescriptor::of::<$ty>(&[$($member),*])
        }
    };
}

#[cfg(test)]
mod tests {
    use super::{RegisterError, TypeDescriptor, find_descriptor, register_descriptor};
    use crate::derive::Tabular;
    use crate::info::{Type, Typed};
    use crate::schema::Schema;

    #[derive(Tabular, Default)]
    struct Cached {
        a: u8,
    }

    #[derive(Tabular, Default)]
    struct Reordered {
        a: u8,
        b: u8,
    }

    #[test]
    fn registration_rejected_after_use() {
        Schema::of(Cached::type_info().as_struct().unwrap()).unwrap();
        assert_eq!(
            register_descriptor(TypeDescriptor::of::<Cached>(&["a"])),
            Err(RegisterError::SchemaInUse {
                type_path: Type::of::<Cached>().path()
            })
        );
    }

    #[test]
    fn registration_before_use() {
        register_descriptor(TypeDescriptor::of::<Reordered>(&["b", "a"])).unwrap();
        let found = find_descriptor(&Type::of::<Reordered>()).unwrap();
        assert_eq!(found.members(), ["b", "a"]);

        let schema = Schema::of(Reordered::type_info().as_struct().unwrap()).unwrap();
        assert_eq!(schema.header(), "b\ta");
    }
}
