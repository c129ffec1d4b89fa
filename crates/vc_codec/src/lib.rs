#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro resolves `vc_codec` through `Cargo.toml`, which cannot
// refer to `crate`, so the crate must be reachable by its own name.
extern crate self as vc_codec;

// -----------------------------------------------------------------------------
// Allocation

// Paths go through `core` and `alloc` where possible; `std` is only needed
// for the process-wide locks.
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod hash;
mod reflection;

pub mod access;
pub mod de;
pub mod grammar;
pub mod impls;
pub mod info;
pub mod ops;
pub mod schema;
pub mod ser;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use de::{DecodeError, DecodeWarning, Decoder};
pub use reflection::Reflect;
pub use ser::{EncodeError, Encoder, EncoderConfig};
pub use vc_codec_derive as derive;

use alloc::string::String;

use info::Typed;

// -----------------------------------------------------------------------------
// Entry points

/// Encode `value` into a document, returning the first fatal error.
///
/// The root must be an object, an optional object or a collection of objects.
///
/// # Examples
///
/// ```
/// use vc_codec::derive::Tabular;
///
/// #[derive(Tabular, Default)]
/// struct Item {
///     id: i32,
///     name: String,
/// }
///
/// let text = vc_codec::try_encode(&Item { id: 7, name: "axe".into() }).unwrap();
/// assert_eq!(text, "id\tname\n7\t\"axe\"");
/// ```
pub fn try_encode<T: Reflect>(value: &T) -> Result<String, EncodeError> {
    Encoder::default().encode(value)
}

/// Decode a document into a new `T`, returning the first fatal error.
///
/// Recoverable mismatches are logged and skipped, see [`Decoder::warnings`].
///
/// # Examples
///
/// ```
/// use vc_codec::derive::Tabular;
///
/// #[derive(Tabular, Default, Debug, PartialEq)]
/// struct Item {
///     id: i32,
///     tags: Vec<String>,
/// }
///
/// let item: Item = vc_codec::try_decode("id\n7\ntags:\t\"a\"\t\"b\"").unwrap();
/// assert_eq!(item, Item { id: 7, tags: vec!["a".into(), "b".into()] });
/// ```
pub fn try_decode<T: Typed + Reflect + Default>(text: &str) -> Result<T, DecodeError> {
    Decoder::new().decode(text)
}

/// Encode `value`, logging any fatal error and returning `None` instead.
pub fn encode<T: Reflect>(value: &T) -> Option<String> {
    try_encode(value)
        .inspect_err(|err| log::error!("value was not encoded: {err}"))
        .ok()
}

/// Decode a document into a new `T`, logging any fatal error and returning `None` instead.
pub fn decode<T: Typed + Reflect + Default>(text: &str) -> Option<T> {
    try_decode(text)
        .inspect_err(|err| log::error!("document was not decoded into `{}`: {err}", T::type_path()))
        .ok()
}
