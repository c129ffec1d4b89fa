//! Process-wide schema cache.
//!
//! Schemas are leaked on insertion and never removed. Two threads deriving
//! the same schema concurrently both succeed, and the first insert wins.
//!
//! A derivation that overlaps a descriptor registration is discarded at
//! insertion and started again, so a registration that succeeds is always
//! seen by every schema cached after it.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use crate::hash::{TypeIdMap, new_type_id_map};
use crate::info::{StructInfo, Type};
use crate::schema::descriptor::generation;
use crate::schema::{Schema, SchemaError};

static SCHEMAS: RwLock<TypeIdMap<&'static Schema>> = RwLock::new(new_type_id_map());

#[inline]
fn get(type_id: TypeId) -> Option<&'static Schema> {
    SCHEMAS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .copied()
}

// Returns `None` if a descriptor was registered since `since` was read.
fn insert(type_id: TypeId, schema: Schema, since: usize) -> Option<&'static Schema> {
    let mut schemas = SCHEMAS.write().unwrap_or_else(PoisonError::into_inner);
    if generation() != since {
        return None;
    }
    Some(
        *schemas
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(schema))),
    )
}

/// Returns the first cached type matching `predicate`, or runs `on_miss`
/// while no schema can be inserted.
pub(super) fn find_type_or(
    mut predicate: impl FnMut(&Type) -> bool,
    on_miss: impl FnOnce(),
) -> Option<Type> {
    let schemas = SCHEMAS.read().unwrap_or_else(PoisonError::into_inner);
    let found = schemas
        .values()
        .map(|schema| *schema.info().ty())
        .find(|ty| predicate(ty));
    if found.is_none() {
        on_miss();
    }
    found
}

pub(super) fn get_or_derive(info: &'static StructInfo) -> Result<&'static Schema, SchemaError> {
    loop {
        if let Some(schema) = get(info.ty().id()) {
            return Ok(schema);
        }
        let since = generation();
        if let Some(schema) = derive_graph(info, since, &mut Vec::new())? {
            return Ok(schema);
        }
        #[cfg(all(debug_assertions, feature = "debug"))]
        log::trace!(
            "descriptor registered while deriving `{}`, deriving again",
            info.ty().path(),
        );
    }
}

// Derives `info` and everything it reaches before caching anything for it,
// so a cached schema never leads to a failing one. Yields `None` when a
// descriptor registration made the derivation stale.
fn derive_graph(
    info: &'static StructInfo,
    since: usize,
    in_progress: &mut Vec<TypeId>,
) -> Result<Option<&'static Schema>, SchemaError> {
    let type_id = info.ty().id();
    if let Some(schema) = get(type_id) {
        return Ok(Some(schema));
    }

    in_progress.push(type_id);
    let schema = Schema::derive(info)?;

    for group in schema.nested_groups() {
        let nested = group.info();
        if in_progress.contains(&nested.ty().id()) {
            let member = group.singles().iter().chain(group.many()).next();
            return Err(SchemaError::Recursive {
                owner: info.ty().path(),
                member: member.map(|m| m.name()).unwrap_or_default(),
            });
        }
        if derive_graph(nested, since, in_progress)?.is_none() {
            return Ok(None);
        }
    }
    in_progress.pop();

    #[cfg(all(debug_assertions, feature = "debug"))]
    log::debug!(
        "derived schema for `{}`: {} scalar(s), {} scalar collection(s), {} nested group(s)",
        info.ty().path(),
        schema.scalars().len(),
        schema.scalar_collections().len(),
        schema.nested_groups().len(),
    );

    Ok(insert(type_id, schema, since))
}

#[cfg(test)]
mod tests {
    use crate::derive::Tabular;
    use crate::info::Typed;
    use crate::schema::descriptor::generation;
    use crate::schema::{Schema, TypeDescriptor, register_descriptor};

    #[derive(Tabular, Default)]
    struct Point {
        x: i32,
    }

    #[derive(Tabular, Default)]
    struct Late {
        a: u8,
        b: u8,
    }

    #[test]
    fn cached_once() {
        let info = Point::type_info().as_struct().unwrap();
        let first = Schema::of(info).unwrap();
        let second = Schema::of(info).unwrap();
        assert!(core::ptr::eq(first, second));
        assert!(super::find_type_or(|ty| ty.is::<Point>(), || unreachable!()).is_some());
    }

    #[test]
    fn stale_schema_is_discarded() {
        let info = Late::type_info().as_struct().unwrap();
        let since = generation();
        let stale = Schema::derive(info).unwrap();
        assert_eq!(stale.header(), "a\tb");

        register_descriptor(TypeDescriptor::of::<Late>(&["b"])).unwrap();
        assert!(super::insert(info.ty().id(), stale, since).is_none());

        let schema = Schema::of(info).unwrap();
        assert_eq!(schema.header(), "b");
    }
}
