//! Paths into `vc_codec` used by the generated code.
//!
//! Kept in one place so a change to the `vc_codec` layout only touches
//! this module.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) use vc_macro_utils::full_path as fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Returns the path of `vc_codec` as seen from the deriving crate.
///
/// - crates depending on `vc_codec` get `::vc_codec`,
/// - crates depending on the façade `vc_tabular` get `::vc_tabular::codec`.
///
/// Resolving reads the caller's `Cargo.toml`, so it runs once per derive and
/// the result is passed down.
pub(crate) fn vc_codec() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_codec"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! codec_paths {
    ($($name:ident => $($segment:ident)::+;)*) => {$(
        #[inline(always)]
        pub(crate) fn $name(vc_codec_path: &syn::Path) -> TokenStream {
            quote! { #vc_codec_path $(:: $segment)+ }
        }
    )*};
}

codec_paths! {
    macro_exports_ => __macro_exports;
    reflect_ => Reflect;

    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    type_kind_ => info::TypeKind;
    struct_info_ => info::StructInfo;
    member_info_ => info::MemberInfo;
    scalar_info_ => info::ScalarInfo;
    scalar_kind_ => info::ScalarKind;

    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    struct_ => ops::Struct;
    scalar_ => ops::Scalar;
    scalar_error_ => ops::ScalarError;

    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
    generic_type_path_cell_ => impls::GenericTypePathCell;
}
