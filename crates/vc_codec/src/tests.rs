//! End-to-end encode and decode of derived types.

use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use std::collections::HashMap;

use crate::derive::Tabular;
use crate::ops::ScalarError;
use crate::schema::SchemaError;
use crate::{DecodeError, DecodeWarning, Decoder, EncodeError, Encoder, EncoderConfig};

// -----------------------------------------------------------------------------
// Types

#[derive(Tabular, Default, Debug, Clone, Copy, PartialEq, Eq)]
enum Rarity {
    #[default]
    Common,
    Rare = 4,
    Cursed = -1,
}

#[derive(Tabular, Default, Debug, Clone, PartialEq)]
struct Stat {
    kind: u8,
    value: f32,
}

#[derive(Tabular, Default, Debug, Clone, PartialEq)]
struct Marker;

#[derive(Tabular, Default, Debug, Clone, PartialEq)]
struct Pair<T> {
    left: T,
    right: T,
}

#[derive(Tabular, Default, Debug, Clone, PartialEq)]
#[tabular(name = "Gem")]
struct Gemstone {
    #[tabular(rename = "Carat")]
    carat: f64,
}

#[derive(Tabular, Default, Debug, PartialEq)]
struct Item {
    id: i64,
    name: String,
    rarity: Rarity,
    price: f64,
    tradable: bool,
    tags: Vec<String>,
    weights: [u16; 3],
    history: VecDeque<i8>,
    stat: Stat,
    bonus: Option<Stat>,
    stats: Vec<Stat>,
    slots: Vec<Option<Stat>>,
    marker: Option<Marker>,
    pair: Pair<u8>,
    gems: Box<[Gemstone]>,
    prices: BTreeMap<String, u32>,
    by_kind: HashMap<u8, Stat>,
    #[tabular(skip)]
    cache: u32,
}

fn sample() -> Item {
    Item {
        id: -42,
        name: "Sword of \"Dawn\"".into(),
        rarity: Rarity::Rare,
        price: 0.1 + 0.2,
        tradable: true,
        tags: vec!["blade".into(), String::new()],
        weights: [3, 1, 4],
        history: VecDeque::from([1, -2, 3]),
        stat: Stat { kind: 1, value: 2.5 },
        bonus: None,
        stats: vec![Stat { kind: 2, value: -1.0 }, Stat { kind: 3, value: 0.25 }],
        slots: vec![Some(Stat { kind: 4, value: 8.0 }), None, Some(Stat::default())],
        marker: Some(Marker),
        pair: Pair { left: 7, right: 9 },
        gems: vec![Gemstone { carat: 1.5 }].into_boxed_slice(),
        prices: BTreeMap::from([("buy".into(), 100), ("sell".into(), 25)]),
        by_kind: HashMap::from([(1, Stat { kind: 1, value: 1.0 }), (2, Stat::default())]),
        cache: 0,
    }
}

// -----------------------------------------------------------------------------
// Round trip

#[test]
fn round_trip() {
    let item = sample();
    let text = crate::try_encode(&item).unwrap();
    let decoded: Item = crate::try_decode(&text).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn skipped_fields_are_untouched() {
    let item = Item { cache: 77, ..sample() };
    let text = crate::try_encode(&item).unwrap();
    assert!(!text.contains("cache"));

    let mut target = Item { cache: 5, ..Item::default() };
    Decoder::new().decode_into(&text, &mut target).unwrap();
    assert_eq!(target.cache, 5);
    assert_eq!(target.name, item.name);
}

#[test]
fn attributes_and_generics() {
    let text = crate::try_encode(&sample()).unwrap();
    assert!(text.contains("\n§Gem\tCarat\ngems:\t1.5\n"));
    assert!(text.contains("\n§Pair<u8>\tleft\tright\npair:\t7\t9\n"));
    assert!(text.contains("\n§KeyValue<String, u32>\tKey\tValue\nprices:\t\"buy\"\t100\n\t\"sell\"\t25\n"));
}

#[derive(Tabular, Default, Debug, PartialEq)]
struct Loadout {
    name: String,
    slots: Vec<u8>,
    main: Stat,
    spare: Option<Stat>,
    extras: Vec<Stat>,
    mark: Marker,
}

#[test]
fn document_layout() {
    let loadout = Loadout {
        name: "kit".into(),
        slots: vec![1, 2],
        main: Stat { kind: 1, value: 1.5 },
        spare: None,
        extras: vec![Stat { kind: 2, value: 0.25 }, Stat { kind: 3, value: -1.0 }],
        mark: Marker,
    };

    let text = crate::try_encode(&loadout).unwrap();
    assert_eq!(
        text,
        "name\n\"kit\"\nslots:\t1\t2\n§Stat\tkind\tvalue\nmain:\t1\t1.5\nextras:\t2\t0.25\n\t3\t-1\n§Marker\t§§\nmark:\t§§"
    );
    assert_eq!(crate::try_decode::<Loadout>(&text).unwrap(), loadout);
}

// -----------------------------------------------------------------------------
// Absent and empty

#[test]
fn absent_and_empty_objects() {
    let mut item = sample();
    item.bonus = None;
    item.marker = Some(Marker);
    item.slots = vec![None];

    let text = crate::try_encode(&item).unwrap();
    assert!(!text.contains("bonus:"));
    assert!(text.contains("\nmarker:\t§§"));
    assert!(text.contains("\nslots:\t§"));

    let decoded: Item = crate::try_decode(&text).unwrap();
    assert_eq!(decoded.bonus, None);
    assert_eq!(decoded.marker, Some(Marker));
    assert_eq!(decoded.slots, [None]);

    // An explicit `§` clears a slot the target already filled.
    let mut target = Item { bonus: Some(Stat::default()), ..Item::default() };
    Decoder::new()
        .decode_into("id\n1\n§Stat\tkind\tvalue\nbonus:\t§", &mut target)
        .unwrap();
    assert_eq!(target.bonus, None);
}

#[test]
fn absent_required_object() {
    let err = crate::try_decode::<Loadout>("name\n\"a\"\n§Stat\tkind\tvalue\nmain:\t§").unwrap_err();
    assert!(matches!(err, DecodeError::AbsentValue { line: 4, .. }));
}

#[test]
fn optional_root() {
    let none: Option<Loadout> = crate::try_decode("name\n§").unwrap();
    assert_eq!(none, None);

    let some: Option<Loadout> = crate::try_decode("name\n\"x\"").unwrap();
    assert_eq!(some.map(|l| l.name), Some(String::from("x")));

    assert_eq!(
        crate::try_encode(&None::<Loadout>).unwrap_err(),
        EncodeError::AbsentRoot
    );
    assert_eq!(
        crate::try_encode(&Some(Stat { kind: 1, value: 2.0 })).unwrap(),
        "kind\tvalue\n1\t2"
    );
}

// -----------------------------------------------------------------------------
// Scalars

#[derive(Tabular, Default, Debug, PartialEq)]
struct Note {
    text: String,
    on: bool,
    off: bool,
    rarity: Rarity,
    lines: Vec<String>,
}

#[test]
fn scalar_fidelity() {
    let note = Note {
        text: "a\tb\nc\\d".into(),
        on: true,
        off: false,
        rarity: Rarity::Cursed,
        lines: vec![String::new(), "\r".into(), "§".into()],
    };

    let text = crate::try_encode(&note).unwrap();
    assert_eq!(
        text,
        "text\ton\toff\trarity\n\"a\\tb\\nc\\\\d\"\t1\t0\t-1\nlines:\t\"\"\t\"\\r\"\t\"§\""
    );
    assert_eq!(crate::try_decode::<Note>(&text).unwrap(), note);
}

#[test]
fn invalid_scalars() {
    let mut decoder = Decoder::new();

    let err = decoder.decode::<Note>("on\n2").unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Scalar { line: 2, member: "on", source: ScalarError::Invalid { .. }, .. }
    ));

    let err = decoder.decode::<Note>("rarity\n3").unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Scalar { member: "rarity", source: ScalarError::UnknownVariant { .. }, .. }
    ));

    let err = decoder.decode::<Note>("text\nplain").unwrap_err();
    assert!(matches!(err, DecodeError::Scalar { source: ScalarError::Unquoted { .. }, .. }));
}

// -----------------------------------------------------------------------------
// Collections

#[derive(Tabular, Default, Debug, PartialEq)]
struct Series {
    values: Vec<u32>,
}

#[test]
fn chunked_collection_reassembles() {
    let series = Series { values: (1..=12).collect() };

    let text = crate::try_encode(&series).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        ["§§", "§§", "values:\t1\t2\t3\t4\t5", "\t6\t7\t8\t9\t10", "\t11\t12"]
    );
    assert_eq!(crate::try_decode::<Series>(&text).unwrap(), series);

    for width in [1, 3, 12, 50] {
        let encoder = Encoder::new(EncoderConfig::new().with_items_per_line(width));
        let text = encoder.encode(&series).unwrap();
        assert_eq!(crate::try_decode::<Series>(&text).unwrap(), series);
    }
}

#[test]
fn empty_collections() {
    let series = Series { values: Vec::new() };
    let text = crate::try_encode(&series).unwrap();
    assert_eq!(text, "§§\n§§\nvalues:");
    assert_eq!(crate::try_decode::<Series>(&text).unwrap(), series);
}

#[derive(Tabular, Default, Debug, PartialEq)]
struct Triple {
    v: [u8; 3],
}

#[test]
fn fixed_length_mismatch() {
    let triple: Triple = crate::try_decode("§§\n§§\nv:\t1\t2\t3").unwrap();
    assert_eq!(triple.v, [1, 2, 3]);

    let err = crate::try_decode::<Triple>("§§\n§§\nv:\t1\t2").unwrap_err();
    assert!(matches!(err, DecodeError::LengthMismatch { line: 3, member: "v", .. }));
}

#[derive(Tabular, Default, Debug, PartialEq)]
struct Inventory {
    owner: String,
    counts: BTreeMap<u8, String>,
    stats: HashMap<String, Stat>,
}

#[test]
fn maps() {
    let inventory = Inventory {
        owner: "me".into(),
        counts: BTreeMap::from([(1, "one".into()), (2, "two".into())]),
        stats: HashMap::from([("hp".into(), Stat { kind: 1, value: 10.0 })]),
    };

    let text = crate::try_encode(&inventory).unwrap();
    assert!(text.contains("\n§KeyValue<u8, String>\tKey\tValue\ncounts:\t1\t\"one\"\n\t2\t\"two\""));
    assert!(text.contains("\nstats:\t\"hp\"\n\t§Stat\tkind\tvalue\n\tValue:\t1\t10"));
    assert_eq!(crate::try_decode::<Inventory>(&text).unwrap(), inventory);
}

#[test]
fn map_duplicate_key() {
    let text = "owner\n\"me\"\n§KeyValue<u8, String>\tKey\tValue\ncounts:\t1\t\"a\"\n\t1\t\"b\"";
    let err = crate::try_decode::<Inventory>(text).unwrap_err();
    assert_eq!(
        err,
        DecodeError::DuplicateKey {
            line: 5,
            owner: <Inventory as crate::info::TypePath>::type_path(),
            member: "counts",
        }
    );
    assert_eq!(crate::decode::<Inventory>(text), None);
}

// -----------------------------------------------------------------------------
// Rejections

#[derive(Tabular, Default)]
struct Counter {
    size: usize,
}

#[derive(Tabular, Default)]
struct Grid {
    cells: Vec<Vec<u8>>,
}

#[test]
fn unsupported_types() {
    assert!(matches!(
        crate::try_encode(&Counter::default()),
        Err(EncodeError::Schema(SchemaError::Unsupported { member: "size", .. }))
    ));
    assert!(matches!(
        crate::try_decode::<Grid>("§§\n§§"),
        Err(DecodeError::Schema(SchemaError::Unsupported { member: "cells", .. }))
    ));

    assert_eq!(crate::encode(&Grid::default()), None);
    assert!(crate::decode::<Counter>("size\n1").is_none());
    assert!(crate::encode(&3_u8).is_none());
    assert!(crate::try_decode::<Vec<Stat>>("kind\tvalue").is_err());
}

// -----------------------------------------------------------------------------
// Warnings

#[test]
fn unknown_columns_warn_once() {
    let text = "name\tlevel\n\"kit\"\t3\n§Stat\tkind\tweight\tvalue\nmain:\t1\t0\t2\nextras:\t2\t0\t3\n\t4\t0\t5\n§Marker\t§§\nmark:\t§§";

    let mut decoder = Decoder::new();
    let loadout: Loadout = decoder.decode(text).unwrap();
    assert_eq!(loadout.main, Stat { kind: 1, value: 2.0 });
    assert_eq!(loadout.extras.len(), 2);
    assert_eq!(loadout.extras[1], Stat { kind: 4, value: 5.0 });

    assert_eq!(
        decoder.warnings(),
        [
            DecodeWarning::UnknownColumn {
                owner: <Loadout as crate::info::TypePath>::type_path(),
                column: "level".into(),
            },
            DecodeWarning::UnknownColumn {
                owner: <Stat as crate::info::TypePath>::type_path(),
                column: "weight".into(),
            },
        ]
    );

    // Warnings belong to the last document.
    decoder.decode::<Loadout>("name\n\"a\"").unwrap();
    assert!(decoder.warnings().is_empty());
}

// -----------------------------------------------------------------------------
// Template mode

#[derive(Tabular, Default)]
struct Blueprint {
    id: u8,
    sizes: Option<Vec<u8>>,
    corners: Option<[i32; 2]>,
    stat: Option<Stat>,
    stats: Option<Vec<Stat>>,
}

#[test]
fn template_shows_full_shape() {
    let encoder = Encoder::new(EncoderConfig::new().with_template(true).with_placeholder_len(3));
    let text = encoder.encode(&Blueprint::default()).unwrap();
    assert_eq!(
        text,
        "id\n0\nsizes:\t0\t0\t0\ncorners:\t0\t0\n§Stat\tkind\tvalue\nstat:\t0\t0\nstats:"
    );

    let plain = crate::try_encode(&Blueprint::default()).unwrap();
    assert_eq!(plain, "id\n0");
}

// -----------------------------------------------------------------------------
// Descriptors

#[cfg(feature = "auto_register")]
mod submitted {
    use crate::derive::Tabular;

    #[derive(Tabular, Default, Debug, PartialEq)]
    struct Vec4 {
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    }

    #[derive(Tabular, Default, Debug, PartialEq)]
    struct Transform {
        position: Vec4,
    }

    crate::submit_descriptor!(Vec4 => ["z", "y", "x"]);

    #[test]
    fn descriptor_reorders_members() {
        let transform = Transform {
            position: Vec4 { x: 1.0, y: 2.0, z: 3.0, w: 0.0 },
        };

        let text = crate::try_encode(&transform).unwrap();
        assert_eq!(text, "§§\n§§\n§Vec4\tz\ty\tx\nposition:\t3\t2\t1");
        assert_eq!(crate::try_decode::<Transform>(&text).unwrap(), transform);
    }
}

#[derive(Tabular, Default)]
struct Odd {
    a: u8,
}

#[test]
fn descriptor_naming_missing_member() {
    use crate::schema::{TypeDescriptor, register_descriptor};

    register_descriptor(TypeDescriptor::of::<Odd>(&["a", "b"])).unwrap();
    assert!(matches!(
        crate::try_encode(&Odd::default()),
        Err(EncodeError::Schema(SchemaError::MissingDescriptorMember { member: "b", .. }))
    ));
}
