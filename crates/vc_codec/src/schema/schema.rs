use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::grammar::{EMPTY, TAB};
use crate::info::{MemberInfo, ScalarInfo, StructInfo, Typed};
use crate::schema::{SchemaError, TypeMode, cache, classify, find_descriptor};

// -----------------------------------------------------------------------------
// Parts

/// A member holding a collection of scalars.
#[derive(Debug)]
pub struct ScalarCollection {
    member: &'static MemberInfo,
    item: &'static ScalarInfo,
}

impl ScalarCollection {
    /// Returns the member.
    #[inline]
    pub fn member(&self) -> &'static MemberInfo {
        self.member
    }

    /// Returns the item type.
    #[inline]
    pub fn item(&self) -> &'static ScalarInfo {
        self.item
    }
}

/// The members of an owner that hold objects of one nested type.
///
/// All of them are written under a single type header.
#[derive(Debug)]
pub struct NestedGroup {
    info: &'static StructInfo,
    singles: Vec<&'static MemberInfo>,
    many: Vec<&'static MemberInfo>,
}

impl NestedGroup {
    /// Returns the nested type.
    #[inline]
    pub fn info(&self) -> &'static StructInfo {
        self.info
    }

    /// Returns the members holding one object, in member order.
    #[inline]
    pub fn singles(&self) -> &[&'static MemberInfo] {
        &self.singles
    }

    /// Returns the members holding a collection of objects, in member order.
    #[inline]
    pub fn many(&self) -> &[&'static MemberInfo] {
        &self.many
    }
}

/// A nested member found by name, see [`Schema::nested`].
#[derive(Debug, Clone, Copy)]
pub struct NestedMember<'a> {
    pub group: &'a NestedGroup,
    pub member: &'static MemberInfo,
    pub many: bool,
}

// -----------------------------------------------------------------------------
// Schema

/// The cached document layout of a struct.
///
/// # Examples
///
/// ```
/// use vc_codec::derive::Tabular;
/// use vc_codec::schema::Schema;
///
/// #[derive(Tabular, Default)]
/// struct Tag { label: String }
///
/// #[derive(Tabular, Default)]
/// struct Item {
///     id: u32,
///     scores: Vec<f32>,
///     main: Option<Tag>,
///     extra: Vec<Tag>,
///     weight: f64,
/// }
///
/// let schema = Schema::of_type::<Item>().unwrap();
/// assert_eq!(schema.header(), "id\tweight");
/// assert_eq!(schema.scalar_collections().len(), 1);
///
/// let group = &schema.nested_groups()[0];
/// assert_eq!(group.info().header_name(), "Tag");
/// assert_eq!(group.singles()[0].name(), "main");
/// assert_eq!(group.many()[0].name(), "extra");
/// ```
#[derive(Debug)]
pub struct Schema {
    info: &'static StructInfo,
    header: String,
    scalars: Box<[&'static MemberInfo]>,
    scalar_collections: Box<[ScalarCollection]>,
    nested_groups: Box<[NestedGroup]>,
}

impl Schema {
    /// Returns the cached schema of a struct, deriving it and every nested
    /// schema on first use.
    #[inline]
    pub fn of(info: &'static StructInfo) -> Result<&'static Schema, SchemaError> {
        cache::get_or_derive(info)
    }

    /// Returns the cached schema of `T`, which must be a struct.
    pub fn of_type<T: Typed>() -> Result<&'static Schema, SchemaError> {
        let info = T::type_info();
        let object = info.as_struct().ok_or(SchemaError::NotAStruct {
            type_path: info.type_path(),
        })?;
        Self::of(object)
    }

    /// Derives the schema of one struct, without its nested types.
    pub(super) fn derive(info: &'static StructInfo) -> Result<Self, SchemaError> {
        let owner = info.ty().path();
        let members = Self::members(info)?;

        let mut scalars = Vec::new();
        let mut scalar_collections = Vec::new();
        let mut nested_groups: Vec<NestedGroup> = Vec::new();

        for (index, member) in members.iter().copied().enumerate() {
            if members[..index].iter().any(|m| m.name() == member.name()) {
                return Err(SchemaError::DuplicateMember {
                    owner,
                    member: member.name(),
                });
            }

            let (nested, many) = match classify(member.type_info()) {
                TypeMode::ScalarSingle(_) => {
                    scalars.push(member);
                    continue;
                }
                TypeMode::ScalarMany { item } => {
                    scalar_collections.push(ScalarCollection { member, item });
                    continue;
                }
                TypeMode::ObjectSingle(nested) => (nested, false),
                TypeMode::ObjectMany { item, .. } => (item, true),
                TypeMode::Unsupported(source) => {
                    return Err(SchemaError::Unsupported {
                        owner,
                        member: member.name(),
                        source,
                    });
                }
            };

            let position = nested_groups.iter().position(|g| g.info.ty() == nested.ty());
            let group = match position {
                Some(position) => &mut nested_groups[position],
                None => {
                    nested_groups.push(NestedGroup {
                        info: nested,
                        singles: Vec::new(),
                        many: Vec::new(),
                    });
                    let last = nested_groups.len() - 1;
                    &mut nested_groups[last]
                }
            };

            if many {
                group.many.push(member);
            } else {
                group.singles.push(member);
            }
        }

        let header = if scalars.is_empty() {
            String::from(EMPTY)
        } else {
            let mut header = String::new();
            for (index, member) in scalars.iter().enumerate() {
                if index > 0 {
                    header.push(TAB);
                }
                header.push_str(member.name());
            }
            header
        };

        Ok(Self {
            info,
            header,
            scalars: scalars.into_boxed_slice(),
            scalar_collections: scalar_collections.into_boxed_slice(),
            nested_groups: nested_groups.into_boxed_slice(),
        })
    }

    // Members in document order: the descriptor's list if one applies,
    // otherwise the declaration order.
    fn members(info: &'static StructInfo) -> Result<Vec<&'static MemberInfo>, SchemaError> {
        let Some(descriptor) = find_descriptor(info.ty()) else {
            return Ok(info.iter().collect());
        };

        descriptor
            .members()
            .iter()
            .map(|&name| {
                info.member(name)
                    .ok_or(SchemaError::MissingDescriptorMember {
                        owner: info.ty().path(),
                        member: name,
                    })
            })
            .collect()
    }

    /// Returns the struct this schema describes.
    #[inline]
    pub fn info(&self) -> &'static StructInfo {
        self.info
    }

    /// Returns the scalar column names joined by tabs, or `§§` without scalars.
    #[inline]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the scalar members, in column order.
    #[inline]
    pub fn scalars(&self) -> &[&'static MemberInfo] {
        &self.scalars
    }

    /// Returns the scalar collection members, in document order.
    #[inline]
    pub fn scalar_collections(&self) -> &[ScalarCollection] {
        &self.scalar_collections
    }

    /// Returns the nested groups, in order of first appearance.
    #[inline]
    pub fn nested_groups(&self) -> &[NestedGroup] {
        &self.nested_groups
    }

    /// Returns the scalar member named `name`.
    pub fn scalar(&self, name: &str) -> Option<&'static MemberInfo> {
        self.scalars.iter().copied().find(|m| m.name() == name)
    }

    /// Returns the scalar collection member named `name`.
    pub fn scalar_collection(&self, name: &str) -> Option<&ScalarCollection> {
        self.scalar_collections
            .iter()
            .find(|c| c.member.name() == name)
    }

    /// Returns the nested member named `name`, with its group.
    pub fn nested(&self, name: &str) -> Option<NestedMember<'_>> {
        self.nested_groups.iter().find_map(|group| {
            let single = group.singles.iter().copied().find(|m| m.name() == name);
            let member = single.or_else(|| group.many.iter().copied().find(|m| m.name() == name))?;
            Some(NestedMember {
                group,
                member,
                many: single.is_none(),
            })
        })
    }
}

#[cfg(test)]
#[deny(unreachable_patterns)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Tabular;
    use crate::ops::Struct;
    use crate::schema::{Schema, SchemaError};

    #[derive(Tabular, Default)]
    struct Leaf {
        id: u8,
    }

    #[derive(Tabular, Default)]
    struct Marker {}

    #[derive(Tabular, Default)]
    struct Owner {
        name: String,
        first: Leaf,
        #[tabular(skip)]
        hidden: Vec<Vec<u8>>,
        marker: Option<Marker>,
        rest: Vec<Leaf>,
        by_name: BTreeMap<String, Leaf>,
        flags: [bool; 2],
    }

    #[derive(Tabular, Default)]
    struct WithPointer {
        ok: i32,
        size: usize,
    }

    #[derive(Tabular, Default)]
    struct Outer {
        inner: Option<WithPointer>,
    }

    #[derive(Tabular, Default)]
    struct Clash {
        a: u8,
        #[tabular(rename = "a")]
        b: u8,
    }

    #[derive(Tabular, Default)]
    struct Node {
        children: Vec<Node>,
    }

    #[test]
    fn layout() {
        let schema = Schema::of_type::<Owner>().unwrap();
        assert_eq!(schema.header(), "name");
        assert_eq!(schema.scalar_collections()[0].member().name(), "flags");

        let groups: Vec<_> = schema
            .nested_groups()
            .iter()
            .map(|g| (g.singles().len(), g.many().len()))
            .collect();
        // Leaf, Marker, then the synthetic entry record.
        assert_eq!(groups, [(1, 1), (1, 0), (0, 1)]);

        let nested = schema.nested("rest").unwrap();
        assert!(nested.many);
        assert!(schema.nested("hidden").is_none());

        let marker = Schema::of(schema.nested("marker").unwrap().group.info()).unwrap();
        assert_eq!(marker.header(), "§§");
    }

    #[test]
    fn nested_failure_is_fatal() {
        let err = Schema::of_type::<Outer>().unwrap_err();
        assert!(matches!(err, SchemaError::Unsupported { member: "size", .. }));
    }

    #[test]
    fn duplicate_and_recursive() {
        assert!(matches!(
            Schema::of_type::<Clash>(),
            Err(SchemaError::DuplicateMember { member: "a", .. })
        ));
        // The first field claiming a name wins the lookup.
        let clash = Clash { a: 1, b: 2 };
        assert_eq!(clash.field("a").unwrap().downcast_ref::<u8>(), Some(&1));
        assert!(clash.field("b").is_none());
        assert!(matches!(
            Schema::of_type::<Node>(),
            Err(SchemaError::Recursive { member: "children", .. })
        ));
    }
}
