use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Reflect;
use crate::access::{self, AccessError, ObjectRef};
use crate::grammar::{ABSENT, EMPTY, NAME_SUFFIX, NEWLINE, TAB, type_header};
use crate::info::{MemberInfo, StructInfo, TypeKind};
use crate::ops::{List, ReflectMut, ReflectRef};
use crate::schema::{Schema, TypeMode, classify};
use crate::ser::{EncodeError, EncoderConfig};

/// Encodes values into documents.
///
/// # Examples
///
/// ```
/// use vc_codec::{Encoder, EncoderConfig, derive::Tabular};
///
/// #[derive(Tabular, Default)]
/// struct Tag { label: String }
///
/// #[derive(Tabular, Default)]
/// struct Item { id: u32, tag: Option<Tag>, sizes: Option<Vec<u8>> }
///
/// let item = Item { id: 1, tag: None, sizes: None };
///
/// let plain = Encoder::default().encode(&item).unwrap();
/// assert_eq!(plain, "id\n1");
///
/// let template = Encoder::new(EncoderConfig::new().with_template(true).with_placeholder_len(2));
/// assert_eq!(
///     template.encode(&item).unwrap(),
///     "id\n1\nsizes:\t0\t0\n§Tag\tlabel\ntag:\t\"\"",
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Creates an encoder with the given configuration.
    #[inline]
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes `value` into a document.
    ///
    /// The root must be an object, an optional object, or a list or map of
    /// objects. A collection root is written as the element header followed
    /// by the element lines.
    pub fn encode(&self, value: &dyn Reflect) -> Result<String, EncodeError> {
        let info = value.reflect_type_info();
        let mut lines = Vec::new();

        match classify(info) {
            TypeMode::ObjectSingle(object) => {
                let schema = Schema::of(object)?;
                let value = access::present(value).ok_or(EncodeError::AbsentRoot)?;
                lines.push(String::from(schema.header()));
                self.write_object(schema, ObjectRef::of(value, object)?, &mut lines)?;
            }
            TypeMode::ObjectMany { item, .. } => {
                let schema = Schema::of(item)?;
                let value = access::present(value).ok_or(EncodeError::AbsentRoot)?;
                lines.push(String::from(schema.header()));
                self.write_collection(schema, value, &mut lines)?;
            }
            TypeMode::Unsupported(unsupported) => {
                return Err(EncodeError::UnsupportedRoot {
                    type_path: unsupported.type_path,
                    reason: unsupported.reason,
                });
            }
            TypeMode::ScalarSingle(_) | TypeMode::ScalarMany { .. } => {
                return Err(EncodeError::UnsupportedRoot {
                    type_path: info.type_path(),
                    reason: "the root must be an object or a collection of objects",
                });
            }
        }

        Ok(lines.join(NEWLINE.encode_utf8(&mut [0; 4])))
    }

    // -------------------------------------------------------------------------
    // Objects

    fn write_object(
        &self,
        schema: &Schema,
        object: ObjectRef<'_>,
        out: &mut Vec<String>,
    ) -> Result<(), EncodeError> {
        let owner = schema.info();
        out.push(Self::scalar_row(schema, object)?);

        for collection in schema.scalar_collections() {
            let member = collection.member();
            let placeholder: Box<dyn Reflect>;
            let value = match access::present(object.get(owner, member)?) {
                Some(value) => value,
                None if self.config.template() => {
                    placeholder = self.placeholder_list(object.get(owner, member)?, owner, member)?;
                    &*placeholder
                }
                None => continue,
            };
            let list = access::as_list(value, owner, member)?;
            let chunks = self.scalar_chunks(list, owner, member)?;
            push_member(out, member.name(), chunks);
        }

        for group in schema.nested_groups() {
            let nested = Schema::of(group.info())?;
            let mut block = Vec::new();

            for &member in group.singles() {
                let slot = object.get(owner, member)?;
                let placeholder: Box<dyn Reflect>;
                let value = match access::present(slot) {
                    Some(value) => value,
                    None if self.config.template() => {
                        placeholder = optional_placeholder(slot, owner, member)?;
                        &*placeholder
                    }
                    None => continue,
                };
                let mut lines = Vec::new();
                self.write_object(nested, ObjectRef::of(value, nested.info())?, &mut lines)?;
                push_member(&mut block, member.name(), lines);
            }

            for &member in group.many() {
                let mut lines = Vec::new();
                match access::present(object.get(owner, member)?) {
                    Some(value) => self.write_collection(nested, value, &mut lines)?,
                    None if self.config.template() => {}
                    None => continue,
                }
                push_member(&mut block, member.name(), lines);
            }

            if !block.is_empty() {
                out.push(type_header(group.info().header_name(), nested.header()));
                out.append(&mut block);
            }
        }

        Ok(())
    }

    fn scalar_row(schema: &Schema, object: ObjectRef<'_>) -> Result<String, EncodeError> {
        if schema.scalars().is_empty() {
            return Ok(String::from(EMPTY));
        }

        let owner = schema.info();
        let mut row = String::new();
        for (index, &member) in schema.scalars().iter().enumerate() {
            if index > 0 {
                row.push(TAB);
            }
            object.scalar(owner, member)?.encode_text(&mut row);
        }
        Ok(row)
    }

    /// Writes every element of a list or map of objects, `§` for absent ones.
    fn write_collection(
        &self,
        schema: &Schema,
        value: &dyn Reflect,
        out: &mut Vec<String>,
    ) -> Result<(), EncodeError> {
        let owner = schema.info();
        match value.reflect_ref() {
            ReflectRef::List(list) => {
                for item in list.iter() {
                    match access::present(item) {
                        Some(item) => self.write_object(schema, ObjectRef::of(item, owner)?, out)?,
                        None => out.push(String::from(ABSENT)),
                    }
                }
            }
            ReflectRef::Map(map) => {
                for (key, value) in map.entries() {
                    self.write_object(schema, ObjectRef::Entry { key, value }, out)?;
                }
            }
            other => {
                return Err(EncodeError::Access(AccessError::KindMismatch {
                    owner: value.reflect_type_path(),
                    member: "",
                    expected: TypeKind::List,
                    found: other.kind(),
                }));
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Scalar collections

    /// Splits the encoded items into lines of `items_per_line`.
    fn scalar_chunks(
        &self,
        list: &dyn List,
        owner: &StructInfo,
        member: &MemberInfo,
    ) -> Result<Vec<String>, EncodeError> {
        let per_line = self.config.items_per_line();
        let mut chunks: Vec<String> = Vec::with_capacity(list.len().div_ceil(per_line));

        for (index, item) in list.iter().enumerate() {
            let scalar = access::as_scalar(item, owner, member)?;
            if index % per_line == 0 {
                chunks.push(String::new());
            }
            if let Some(line) = chunks.last_mut() {
                if !line.is_empty() {
                    line.push(TAB);
                }
                scalar.encode_text(line);
            }
        }
        Ok(chunks)
    }

    fn placeholder_list(
        &self,
        slot: &dyn Reflect,
        owner: &StructInfo,
        member: &MemberInfo,
    ) -> Result<Box<dyn Reflect>, EncodeError> {
        let mut placeholder = optional_placeholder(slot, owner, member)?;
        if let ReflectMut::List(list) = placeholder.reflect_mut() {
            let fixed = list.reflect_type_info().as_list().and_then(|info| info.fixed_len());
            let len = fixed.unwrap_or(self.config.placeholder_len());
            list.reset(len).map_err(|source| EncodeError::Placeholder {
                member: member.name(),
                source,
            })?;
        }
        Ok(placeholder)
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn optional_placeholder(
    slot: &dyn Reflect,
    owner: &StructInfo,
    member: &MemberInfo,
) -> Result<Box<dyn Reflect>, EncodeError> {
    match slot.reflect_ref() {
        ReflectRef::Optional(optional) => Ok(optional.placeholder()),
        other => Err(EncodeError::Access(AccessError::KindMismatch {
            owner: owner.ty().path(),
            member: member.name(),
            expected: TypeKind::Optional,
            found: other.kind(),
        })),
    }
}

/// Appends `name:` with the first line on the same line and the rest
/// shifted one tab deeper.
fn push_member(out: &mut Vec<String>, name: &str, lines: Vec<String>) {
    let mut lines = lines.into_iter();

    let mut head = String::with_capacity(name.len() + 1);
    head.push_str(name);
    head.push(NAME_SUFFIX);
    if let Some(first) = lines.next() {
        head.push(TAB);
        head.push_str(&first);
    }
    out.push(head);

    out.extend(lines.map(|line| {
        let mut shifted = String::with_capacity(line.len() + 1);
        shifted.push(TAB);
        shifted.push_str(&line);
        shifted
    }));
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::derive::Tabular;
    use crate::ser::{EncodeError, Encoder, EncoderConfig};

    #[derive(Tabular, Default)]
    struct Cell {
        value: i32,
    }

    #[derive(Tabular, Default)]
    struct Sheet {
        title: String,
        numbers: Vec<u16>,
        cells: Vec<Option<Cell>>,
        pinned: Option<Cell>,
    }

    #[test]
    fn chunked_scalar_collection() {
        let sheet = Sheet {
            numbers: (1..=12).collect(),
            ..Default::default()
        };
        let text = Encoder::default().encode(&sheet).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[..5],
            [
                "title",
                "\"\"",
                "numbers:\t1\t2\t3\t4\t5",
                "\t6\t7\t8\t9\t10",
                "\t11\t12",
            ]
        );
        // Empty object collection keeps its member line.
        assert_eq!(lines[5..], ["§Cell\tvalue", "cells:"]);
    }

    #[test]
    fn nested_lines() {
        let sheet = Sheet {
            title: "t".into(),
            numbers: vec![],
            cells: vec![Some(Cell { value: 1 }), None, Some(Cell { value: 3 })],
            pinned: Some(Cell { value: 9 }),
        };
        let text = Encoder::new(EncoderConfig::new().with_items_per_line(2))
            .encode(&sheet)
            .unwrap();
        assert_eq!(
            text,
            "title\n\"t\"\nnumbers:\n§Cell\tvalue\npinned:\t9\ncells:\t1\n\t§\n\t3"
        );
    }

    #[test]
    fn collection_root() {
        let cells = vec![Cell { value: 4 }, Cell { value: 5 }];
        assert_eq!(Encoder::default().encode(&cells).unwrap(), "value\n4\n5");
    }

    #[test]
    fn rejected_roots() {
        assert!(matches!(
            Encoder::default().encode(&3_u8),
            Err(EncodeError::UnsupportedRoot { .. })
        ));
        assert_eq!(
            Encoder::default().encode(&None::<Cell>),
            Err(EncodeError::AbsentRoot)
        );
    }
}
