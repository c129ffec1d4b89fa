//! Built-in implementations and the static cells they are built on.
//!
//! - scalars: `i8`..`i64`, `u8`..`u64`, `f32`, `f64`, `bool`, `String`
//! - lists: `Vec<T>`, `VecDeque<T>`, `Box<[T]>`, `[T; N]`
//! - maps: `HashMap<K, V, S>`, `BTreeMap<K, V>`, `hashbrown::HashMap<K, V, S>`
//! - nullable: `Option<T>`
//! - opaque: `char`, `()`, `usize`, `isize`, `i128`, `u128`

mod cell;
mod list;
mod map;
mod opaque;
mod option;
mod scalar;

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

use alloc::string::String;

/// Concatenate string slices into a new `String`.
///
/// Used to build generic type paths.
///
/// # Examples
///
/// ```
/// assert_eq!(vc_codec::impls::concat(&["Vec<", "u8", ">"]), "Vec<u8>");
/// ```
pub fn concat(parts: &[&str]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|s| s.len()).sum());
    parts.iter().for_each(|s| out.push_str(s));
    out
}
