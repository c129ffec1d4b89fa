use alloc::vec::Vec;

use crate::Reflect;
use crate::access::{AccessError, CollectionMut, ObjectMut, as_scalar_mut};
use crate::de::{DecodeError, DecodeWarning, GrammarError};
use crate::grammar::{
    ABSENT, EMPTY, NEWLINE, TAB, is_object_start, is_type_header, member_name,
    type_header_columns,
};
use crate::hash::HashSet;
use crate::info::{TypeKind, Typed};
use crate::ops::{MapInsertError, ReflectMut};
use crate::schema::{Schema, TypeMode, classify};

// -----------------------------------------------------------------------------
// Lines

/// A document line, possibly unshifted, with its 1-based number.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

/// The lines of one `name:` member, in the member's own frame.
struct MemberBlock<'a> {
    name: &'a str,
    number: usize,
    lines: Vec<Line<'a>>,
}

/// Groups lines by the member line that starts them, unshifting the
/// continuation lines by one tab.
fn member_blocks<'a>(lines: &[Line<'a>]) -> Result<Vec<MemberBlock<'a>>, DecodeError> {
    let mut blocks: Vec<MemberBlock<'a>> = Vec::new();

    for line in lines {
        if let Some(name) = member_name(line.text) {
            let rest = &line.text[name.len() + 1..];
            let mut block = MemberBlock {
                name,
                number: line.number,
                lines: Vec::new(),
            };
            if let Some(first) = rest.strip_prefix(TAB).filter(|first| !first.is_empty()) {
                block.lines.push(Line {
                    number: line.number,
                    text: first,
                });
            }
            blocks.push(block);
        } else if let Some(text) = line.text.strip_prefix(TAB)
            && let Some(block) = blocks.last_mut()
        {
            block.lines.push(Line {
                number: line.number,
                text,
            });
        } else {
            return Err(DecodeError::malformed(line.number, GrammarError::ExpectedMemberLine));
        }
    }

    Ok(blocks)
}

/// Splits the lines of an object collection into elements.
fn split_elements<'s, 'a>(lines: &'s [Line<'a>]) -> Result<Vec<&'s [Line<'a>]>, DecodeError> {
    let Some(first) = lines.first() else {
        return Ok(Vec::new());
    };
    if !is_object_start(first.text) {
        return Err(DecodeError::malformed(first.number, GrammarError::ExpectedElement));
    }

    let mut elements = Vec::new();
    let mut start = 0;
    for (index, line) in lines.iter().enumerate().skip(1) {
        if is_object_start(line.text) {
            elements.push(&lines[start..index]);
            start = index;
        }
    }
    elements.push(&lines[start..]);
    Ok(elements)
}

fn columns(text: &str) -> Vec<&str> {
    if text == EMPTY {
        Vec::new()
    } else {
        text.split(TAB).collect()
    }
}

// -----------------------------------------------------------------------------
// Decoder

/// Decodes documents into values.
///
/// A decoder collects the recoverable mismatches of the last document it
/// read. Each one is also logged once with [`log::warn!`].
///
/// # Examples
///
/// ```
/// use vc_codec::{DecodeWarning, Decoder, derive::Tabular};
///
/// #[derive(Tabular, Default, Debug, PartialEq)]
/// struct Item { id: u32 }
///
/// let mut decoder = Decoder::new();
/// let item: Item = decoder.decode("id\tcolor\n3\t\"red\"").unwrap();
///
/// assert_eq!(item, Item { id: 3 });
/// assert!(matches!(
///     &decoder.warnings()[0],
///     DecodeWarning::UnknownColumn { column, .. } if column == "color",
/// ));
/// ```
#[derive(Debug, Default)]
pub struct Decoder {
    warnings: Vec<DecodeWarning>,
    seen: HashSet<DecodeWarning>,
}

impl Decoder {
    /// Creates a decoder without warnings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the warnings of the last decoded document, in document order.
    #[inline]
    pub fn warnings(&self) -> &[DecodeWarning] {
        &self.warnings
    }

    /// Takes the warnings of the last decoded document.
    #[inline]
    pub fn take_warnings(&mut self) -> Vec<DecodeWarning> {
        self.seen.clear();
        core::mem::take(&mut self.warnings)
    }

    /// Decodes a document into a default-constructed `T`.
    pub fn decode<T: Typed + Reflect + Default>(&mut self, text: &str) -> Result<T, DecodeError> {
        let mut value = T::default();
        self.decode_into(text, &mut value)?;
        Ok(value)
    }

    /// Decodes a document into `target`.
    ///
    /// The target must be a struct or an optional struct. Members that the
    /// document does not mention keep their current value.
    pub fn decode_into(&mut self, text: &str, target: &mut dyn Reflect) -> Result<(), DecodeError> {
        self.warnings.clear();
        self.seen.clear();

        let info = target.reflect_type_info();
        let object = match classify(info) {
            TypeMode::ObjectSingle(object) => object,
            TypeMode::Unsupported(unsupported) => {
                return Err(DecodeError::UnsupportedRoot {
                    type_path: unsupported.type_path,
                    reason: unsupported.reason,
                });
            }
            _ => {
                return Err(DecodeError::UnsupportedRoot {
                    type_path: info.type_path(),
                    reason: "only a single object can be decoded",
                });
            }
        };
        let schema = Schema::of(object)?;

        let mut lines: Vec<Line<'_>> = text
            .split(NEWLINE)
            .enumerate()
            .map(|(index, text)| Line {
                number: index + 1,
                text: text.strip_suffix('\r').unwrap_or(text),
            })
            .collect();
        while lines.last().is_some_and(|line| line.text.is_empty()) {
            lines.pop();
        }

        let Some((header, body)) = lines.split_first() else {
            return Err(DecodeError::malformed(1, GrammarError::EmptyDocument));
        };
        if body.first().is_some_and(|row| row.text == ABSENT)
            && target.reflect_kind() != TypeKind::Optional
        {
            return Err(DecodeError::AbsentRoot);
        }

        self.decode_object(target, schema, header.text, header.number, body)
    }

    fn warn(&mut self, warning: DecodeWarning) {
        if self.seen.insert(warning.clone()) {
            log::warn!("{warning}");
            self.warnings.push(warning);
        }
    }

    // -------------------------------------------------------------------------
    // Objects

    /// Decodes the object written on `lines` into `slot`.
    ///
    /// `header` is the scalar column header the document wrote for the type,
    /// `at` the line to report when the object has no lines at all.
    fn decode_object(
        &mut self,
        slot: &mut dyn Reflect,
        schema: &Schema,
        header: &str,
        at: usize,
        lines: &[Line<'_>],
    ) -> Result<(), DecodeError> {
        let info = schema.info();
        let Some((row, body)) = lines.split_first() else {
            return Err(DecodeError::malformed(at, GrammarError::MissingScalarRow));
        };

        if row.text == ABSENT {
            return match slot.reflect_mut() {
                ReflectMut::Optional(optional) => {
                    optional.clear();
                    Ok(())
                }
                _ => Err(DecodeError::AbsentValue {
                    line: row.number,
                    owner: info.ty().path(),
                }),
            };
        }

        let mut object = ObjectMut::materialize(slot, info)?;
        self.decode_row(&mut object, schema, header, *row)?;

        let split = body
            .iter()
            .position(|line| is_type_header(line.text))
            .unwrap_or(body.len());
        let (collections, mut nested) = body.split_at(split);

        for block in member_blocks(collections)? {
            self.decode_scalar_collection(&mut object, schema, block)?;
        }

        // Every segment starts with a type header.
        while let Some((type_header, rest)) = nested.split_first() {
            let end = rest
                .iter()
                .position(|line| is_type_header(line.text))
                .unwrap_or(rest.len());
            let header = type_header_columns(type_header.text);
            for block in member_blocks(&rest[..end])? {
                self.decode_nested(&mut object, schema, header, block)?;
            }
            nested = &rest[end..];
        }

        Ok(())
    }

    fn decode_row(
        &mut self,
        object: &mut ObjectMut<'_>,
        schema: &Schema,
        header: &str,
        row: Line<'_>,
    ) -> Result<(), DecodeError> {
        let info = schema.info();
        let names = columns(header);
        let fields = columns(row.text);
        if names.len() != fields.len() {
            return Err(DecodeError::malformed(
                row.number,
                GrammarError::ColumnCount {
                    expected: names.len(),
                    found: fields.len(),
                },
            ));
        }

        for (name, field) in names.into_iter().zip(fields) {
            let Some(member) = schema.scalar(name) else {
                self.warn(DecodeWarning::UnknownColumn {
                    owner: info.ty().path(),
                    column: name.into(),
                });
                continue;
            };
            object
                .scalar_mut(info, member)?
                .decode_text(field)
                .map_err(|source| DecodeError::Scalar {
                    line: row.number,
                    owner: info.ty().path(),
                    member: member.name(),
                    source,
                })?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Members

    fn decode_scalar_collection(
        &mut self,
        object: &mut ObjectMut<'_>,
        schema: &Schema,
        block: MemberBlock<'_>,
    ) -> Result<(), DecodeError> {
        let info = schema.info();
        let owner = info.ty().path();
        let Some(collection) = schema.scalar_collection(block.name) else {
            self.warn(DecodeWarning::UnknownCollection {
                owner,
                name: block.name.into(),
            });
            return Ok(());
        };
        let member = collection.member();

        let fields: Vec<(usize, &str)> = block
            .lines
            .iter()
            .flat_map(|line| line.text.split(TAB).map(move |field| (line.number, field)))
            .collect();

        let CollectionMut::List(list) = object.collection_mut(info, member)? else {
            return Err(AccessError::KindMismatch {
                owner,
                member: member.name(),
                expected: TypeKind::List,
                found: TypeKind::Map,
            }
            .into());
        };
        list.reset(fields.len())
            .map_err(|source| DecodeError::LengthMismatch {
                line: block.number,
                owner,
                member: member.name(),
                source,
            })?;

        for (index, (line, field)) in fields.into_iter().enumerate() {
            let Some(item) = list.get_mut(index) else {
                break;
            };
            as_scalar_mut(item, info, member)?
                .decode_text(field)
                .map_err(|source| DecodeError::Scalar {
                    line,
                    owner,
                    member: member.name(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Decodes one member of a nested segment.
    ///
    /// The member is resolved by name on the owner, never by the type named
    /// in the segment header.
    fn decode_nested(
        &mut self,
        object: &mut ObjectMut<'_>,
        schema: &Schema,
        header: &str,
        block: MemberBlock<'_>,
    ) -> Result<(), DecodeError> {
        let info = schema.info();
        let owner = info.ty().path();
        let Some(nested) = schema.nested(block.name) else {
            self.warn(DecodeWarning::UnknownMember {
                owner,
                name: block.name.into(),
            });
            return Ok(());
        };
        let inner = Schema::of(nested.group.info())?;
        let member = nested.member;

        if !nested.many {
            let slot = object.get_mut(info, member)?;
            return self.decode_object(slot, inner, header, block.number, &block.lines);
        }

        let elements = split_elements(&block.lines)?;
        match object.collection_mut(info, member)? {
            CollectionMut::List(list) => {
                list.reset(elements.len())
                    .map_err(|source| DecodeError::LengthMismatch {
                        line: block.number,
                        owner,
                        member: member.name(),
                        source,
                    })?;
                for (index, element) in elements.into_iter().enumerate() {
                    let Some(item) = list.get_mut(index) else {
                        break;
                    };
                    self.decode_object(item, inner, header, block.number, element)?;
                }
            }
            CollectionMut::Map(map) => {
                map.clear();
                for element in elements {
                    let line = element.first().map_or(block.number, |line| line.number);
                    let mut entry = map.new_entry();
                    self.decode_object(&mut *entry, inner, header, line, element)?;
                    map.insert_entry(entry).map_err(|err| match err {
                        MapInsertError::DuplicateKey => DecodeError::DuplicateKey {
                            line,
                            owner,
                            member: member.name(),
                        },
                        source => DecodeError::MapEntry {
                            line,
                            owner,
                            member: member.name(),
                            source,
                        },
                    })?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Line, member_blocks, split_elements};
    use crate::de::{DecodeError, DecodeWarning, Decoder, GrammarError};
    use crate::derive::Tabular;

    fn lines(text: &str) -> Vec<Line<'_>> {
        text.split('\n')
            .enumerate()
            .map(|(index, text)| Line {
                number: index + 1,
                text,
            })
            .collect()
    }

    #[test]
    fn blocks_and_elements() {
        let source = lines("a:\t1\t2\n\t3\nb:\n\t§§\n\tc:\t4\n\t§");
        let blocks = member_blocks(&source).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "a");
        let texts: Vec<_> = blocks[0].lines.iter().map(|l| l.text).collect();
        assert_eq!(texts, ["1\t2", "3"]);

        let split = split_elements(&blocks[1].lines).unwrap();
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].len(), 2);
        assert_eq!(split[1][0].number, 6);

        let orphan = lines("\t1");
        assert!(matches!(
            member_blocks(&orphan),
            Err(DecodeError::Malformed { line: 1, kind: GrammarError::ExpectedMemberLine })
        ));
    }

    #[derive(Tabular, Default, Debug, PartialEq)]
    struct Leaf {
        id: u8,
        tags: Vec<String>,
    }

    #[derive(Tabular, Default, Debug, PartialEq)]
    struct Tree {
        name: String,
        leaves: Vec<Leaf>,
        index: BTreeMap<u8, Leaf>,
        top: Option<Leaf>,
    }

    #[test]
    fn element_starting_with_collection() {
        let text = "name\n\"t\"\n§Leaf\tid\ntop:\t§\nleaves:\t1\n\ttags:\t\"x\"\n\t2";
        let tree: Tree = Decoder::new().decode(text).unwrap();
        assert_eq!(tree.top, None);
        assert_eq!(
            tree.leaves,
            [
                Leaf { id: 1, tags: vec!["x".into()] },
                Leaf { id: 2, tags: vec![] },
            ]
        );
    }

    #[test]
    fn duplicate_key_is_fatal() {
        let text = "name\n\"\"\n§KeyValue<u8, Leaf>\tKey\nindex:\t1\n\t§Leaf\tid\n\tValue:\t5\n\t1\n\t§Leaf\tid\n\tValue:\t6";
        let err = Decoder::new().decode::<Tree>(text).unwrap_err();
        assert!(matches!(err, DecodeError::DuplicateKey { line: 7, member: "index", .. }));
    }

    #[test]
    fn warnings_once_per_document() {
        let text = "name\tsize\n\"a\"\t3\ncolors:\t1\n§Leaf\tid\tsize\nleaves:\t1\t9\n\t2\t9\nroot:\t1";
        let mut decoder = Decoder::new();
        let tree: Tree = decoder.decode(text).unwrap();
        assert_eq!(tree.name, "a");
        assert_eq!(tree.leaves.len(), 2);

        let warnings = decoder.take_warnings();
        assert_eq!(warnings.len(), 4);
        assert!(matches!(
            &warnings[1],
            DecodeWarning::UnknownCollection { name, .. } if name == "colors"
        ));
        assert!(matches!(
            &warnings[2],
            DecodeWarning::UnknownColumn { column, .. } if column == "size"
        ));
        assert!(decoder.warnings().is_empty());
    }

    #[test]
    fn malformed_documents() {
        let mut decoder = Decoder::new();
        assert_eq!(
            decoder.decode::<Tree>("\n\n").unwrap_err(),
            DecodeError::Malformed { line: 1, kind: GrammarError::EmptyDocument }
        );
        assert_eq!(
            decoder.decode::<Tree>("name").unwrap_err(),
            DecodeError::Malformed { line: 1, kind: GrammarError::MissingScalarRow }
        );
        assert_eq!(
            decoder.decode::<Tree>("name\n\"a\"\t1").unwrap_err().line(),
            Some(2)
        );
        assert_eq!(decoder.decode::<Tree>("name\n§").unwrap_err(), DecodeError::AbsentRoot);
        assert!(matches!(
            decoder.decode::<Tree>("name\n\"a\"\n§Leaf\tid\nleaves:\tx:"),
            Err(DecodeError::Malformed { line: 4, kind: GrammarError::ExpectedElement })
        ));
        assert!(matches!(
            decoder.decode::<Tree>("name\nplain"),
            Err(DecodeError::Scalar { line: 2, member: "name", .. })
        ));
    }
}
