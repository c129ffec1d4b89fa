use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::derive_data::TabularEnum;
use crate::path::fp::ResultFP;

/// Implement `TypePath`, `Typed`, `Reflect` and `Scalar` for a field-less enum.
///
/// The value is written as its discriminant; decoding an integer that names
/// no variant is an error.
pub(crate) fn impl_enum(info: &TabularEnum) -> TokenStream {
    let meta = info.meta();
    let vc_codec_path = meta.vc_codec_path();
    let scalar_ = crate::path::scalar_(vc_codec_path);
    let scalar_error_ = crate::path::scalar_error_(vc_codec_path);
    let scalar_info_ = crate::path::scalar_info_(vc_codec_path);
    let scalar_kind_ = crate::path::scalar_kind_(vc_codec_path);
    let type_info_ = crate::path::type_info_(vc_codec_path);
    let type_path_ = crate::path::type_path_(vc_codec_path);
    let macro_exports_ = crate::path::macro_exports_(vc_codec_path);

    let variants = info.variants();

    let type_info_tokens = quote! {
        #type_info_::Scalar(#scalar_info_::new::<Self>(#scalar_kind_::Enum))
    };

    let type_path_impl = crate::impls::impl_trait_type_path(meta);
    let typed_impl = crate::impls::impl_trait_typed(meta, type_info_tokens);
    let reflect_impl = crate::impls::impl_trait_reflect(meta, &Ident::new("Scalar", Span::call_site()));

    let real_ident = meta.real_ident();

    quote! {
        #type_path_impl

        #typed_impl

        #reflect_impl

        impl #scalar_ for #real_ident {
            fn encode_text(&self, out: &mut #macro_exports_::String) {
                let discriminant: i64 = match *self {
                    #( Self::#variants => Self::#variants as i64, )*
                };
                out.push_str(&#macro_exports_::ToString::to_string(&discriminant));
            }

            fn decode_text(&mut self, text: &str) -> #ResultFP<(), #scalar_error_> {
                let discriminant: i64 = text
                    .parse()
                    .map_err(|_| #scalar_error_::invalid(text, "enum discriminant"))?;
                *self = match discriminant {
                    #( value if value == Self::#variants as i64 => Self::#variants, )*
                    _ => {
                        return #ResultFP::Err(#scalar_error_::UnknownVariant {
                            text: #macro_exports_::ToOwned::to_owned(text),
                            type_path: <Self as #type_path_>::type_path(),
                        });
                    }
                };
                #ResultFP::Ok(())
            }
        }
    }
}
