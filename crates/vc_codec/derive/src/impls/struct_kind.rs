use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::Ident;

use crate::derive_data::TabularStruct;
use crate::path::fp::OptionFP;

/// Implement `TypePath`, `Typed`, `Reflect` and `Struct` for a struct.
pub(crate) fn impl_struct(info: &TabularStruct) -> TokenStream {
    let meta = info.meta();
    let vc_codec_path = meta.vc_codec_path();
    let reflect_ = crate::path::reflect_(vc_codec_path);
    let struct_ = crate::path::struct_(vc_codec_path);
    let type_info_ = crate::path::type_info_(vc_codec_path);
    let struct_info_ = crate::path::struct_info_(vc_codec_path);
    let member_info_ = crate::path::member_info_(vc_codec_path);
    let option_ = OptionFP.to_token_stream();

    let names: Vec<_> = info.active_fields().map(|field| field.member_name()).collect();
    let idents: Vec<_> = info.active_fields().map(|field| field.ident()).collect();
    let types = info.active_fields().map(|field| &field.data.ty);

    let header_name = meta
        .attrs()
        .header_name
        .as_ref()
        .map(|name| quote! { .with_header_name(#name) });

    let type_info_tokens = quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[
                #( #member_info_::new::<#types>(#names), )*
            ])
            #header_name
        )
    };

    let type_path_impl = crate::impls::impl_trait_type_path(meta);
    let typed_impl = crate::impls::impl_trait_typed(meta, type_info_tokens);
    let reflect_impl = crate::impls::impl_trait_reflect(meta, &Ident::new("Struct", Span::call_site()));

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        #type_path_impl

        #typed_impl

        #reflect_impl

        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                #[allow(unreachable_patterns)]
                match name {
                    #( #names => #option_::Some(&self.#idents as &dyn #reflect_), )*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                #[allow(unreachable_patterns)]
                match name {
                    #( #names => #option_::Some(&mut self.#idents as &mut dyn #reflect_), )*
                    _ => #option_::None,
                }
            }
        }
    }
}
