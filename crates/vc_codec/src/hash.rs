//! Fixed-seed hashing for the internal type-keyed tables.

use core::any::TypeId;
use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5EC7_10A1_B0DE_C0DE);

/// Hash state with a fixed seed, so results depend only on the input.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

pub(crate) type HashSet<T> = hashbrown::HashSet<T, FixedHashState>;

/// A map keyed by [`TypeId`], usable in a `static`.
pub(crate) type TypeIdMap<V> = HashMap<TypeId, V>;

#[inline]
pub(crate) const fn new_type_id_map<V>() -> TypeIdMap<V> {
    hashbrown::HashMap::with_hasher(FixedHashState)
}
