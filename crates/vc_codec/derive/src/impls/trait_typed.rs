use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::TabularMeta;

/// Generate the `Typed` impl around the `TypeInfo` expression `type_info_tokens`.
pub(crate) fn impl_trait_typed(meta: &TabularMeta, type_info_tokens: TokenStream) -> TokenStream {
    let vc_codec_path = meta.vc_codec_path();
    let typed_ = crate::path::typed_(vc_codec_path);
    let type_info_ = crate::path::type_info_(vc_codec_path);

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(vc_codec_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(vc_codec_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #typed_ for #real_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
