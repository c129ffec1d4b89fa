//! Derive macro for `vc_codec`, see [`Tabular`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static TABULAR_ATTRIBUTE_NAME: &str = "tabular";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod string_expr;

// -----------------------------------------------------------------------------
// Macros

/// # Tabular Derivation
///
/// `#[derive(Tabular)]` implements `TypePath`, `Typed` and `Reflect`, plus:
///
/// - `Struct` for structs with named fields (`struct T { ... }`) and unit
///   structs (`struct T;`, an object without members),
/// - `Scalar` for field-less enums, written as their discriminant.
///
/// Tuple structs, enums with fields, generic enums and unions are rejected.
///
/// ## Fields
///
/// Every field must implement `Typed + Reflect`; its type decides where the
/// member is written (scalar row, scalar collection or nested group).
///
/// ```rust, ignore
/// #[derive(Tabular, Default)]
/// struct Item {
///     // Written as the column `ID`.
///     #[tabular(rename = "ID")]
///     id: i32,
///     // Neither encoded nor decoded, keeps its value when decoding.
///     #[tabular(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Type Attributes
///
/// The name written in type headers is the type name, `Item` above. It can be
/// overridden:
///
/// ```rust, ignore
/// #[derive(Tabular, Default)]
/// #[tabular(name = "Entry")]
/// struct Item { /* ... */ }
/// ```
///
/// The type path defaults to `module_path!()` and the ident. It can be
/// overridden with a path without generics, which are appended:
///
/// ```rust, ignore
/// #[derive(Tabular, Default)]
/// #[tabular(type_path = "game::data::Item")]
/// struct Item<T> { /* ... */ }
/// ```
///
/// ## Generics
///
/// Type parameters must implement `TypePath`; field types mentioning them
/// must implement `Typed + Reflect`. Type information is then stored once per
/// instantiation.
#[proc_macro_derive(Tabular, attributes(tabular))]
pub fn derive_tabular(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impls::match_tabular_impls(&ast)
}
