use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::derive_data::TabularMeta;

/// Generate the `Reflect` impl, viewing `self` as the kind `kind`
/// (`Struct` or `Scalar`).
pub(crate) fn impl_trait_reflect(meta: &TabularMeta, kind: &Ident) -> TokenStream {
    let vc_codec_path = meta.vc_codec_path();
    let reflect_ = crate::path::reflect_(vc_codec_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_codec_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_codec_path);
    let type_kind_ = crate::path::type_kind_(vc_codec_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#kind(self)
            }

            #[inline]
            fn reflect_kind(&self) -> #type_kind_ {
                #type_kind_::#kind
            }
        }
    }
}
