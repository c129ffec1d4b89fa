use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{GenericParam, Generics, Ident, LitStr, Path, TypeParam};

use crate::string_expr::StringExpr;

/// The names of the deriving type: ident, module path and generics.
///
/// The derive only sees local types, so the module path is
/// `module_path!()` unless `#[tabular(type_path = "...")]` overrides it.
pub(crate) struct TypeParser<'a> {
    ident: &'a Ident,
    custom_path: Option<Path>,
    generics: &'a Generics,
}

impl<'a> TypeParser<'a> {
    pub fn new(ident: &'a Ident, custom_path: Option<Path>, generics: &'a Generics) -> Self {
        Self {
            ident,
            custom_path,
            generics,
        }
    }

    pub fn generics(&self) -> &'a Generics {
        self.generics
    }

    /// Whether the type has type or const parameters, in which case every
    /// static must be keyed by the concrete instantiation.
    pub fn impl_with_generic(&self) -> bool {
        !self
            .generics
            .params
            .iter()
            .all(|param| matches!(param, GenericParam::Lifetime(_)))
    }

    /// The ident used in `impl ... for #real_ident`.
    pub fn real_ident(&self) -> proc_macro2::TokenStream {
        self.ident.to_token_stream()
    }

    fn custom_ident(&self) -> &Ident {
        self.custom_path
            .as_ref()
            .and_then(|path| path.segments.last())
            .map_or(self.ident, |segment| &segment.ident)
    }

    pub fn module_path(&self) -> StringExpr {
        let Some(path) = &self.custom_path else {
            return StringExpr::Const(quote! { ::core::module_path!() });
        };

        let module = path
            .segments
            .iter()
            .take(path.segments.len().saturating_sub(1))
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>()
            .join("::");
        StringExpr::from_lit(&LitStr::new(&module, path.span()))
    }

    pub fn has_module_path(&self) -> bool {
        self.custom_path
            .as_ref()
            .is_none_or(|path| path.segments.len() > 1)
    }

    pub fn type_ident(&self) -> StringExpr {
        StringExpr::from(self.custom_ident())
    }

    /// Joins the generic arguments with `, `, mapping each type parameter
    /// through `ty_generic_fn`.
    fn reduce_generics(
        &self,
        mut ty_generic_fn: impl FnMut(&TypeParam) -> StringExpr,
        vc_codec_path: &Path,
    ) -> StringExpr {
        let macro_exports_ = crate::path::macro_exports_(vc_codec_path);

        let mut params = self.generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(ty_generic_fn(type_param)),
            GenericParam::Const(const_param) => {
                let ident = &const_param.ident;
                let ty = &const_param.ty;
                Some(StringExpr::Owned(quote! {
                    <#ty as #macro_exports_::ToString>::to_string(&#ident)
                }))
            }
            GenericParam::Lifetime(_) => None,
        });

        let first = params.next().into_iter();
        StringExpr::from_iter(
            first.chain(params.flat_map(|param| [StringExpr::from_text(", "), param])),
            vc_codec_path,
        )
    }

    fn with_generics(
        &self,
        prefix: Vec<StringExpr>,
        method: proc_macro2::TokenStream,
        vc_codec_path: &Path,
    ) -> StringExpr {
        if !self.impl_with_generic() {
            return StringExpr::from_iter(prefix, vc_codec_path);
        }

        let type_path_ = crate::path::type_path_(vc_codec_path);
        let generics = self.reduce_generics(
            |TypeParam { ident, .. }| {
                StringExpr::Borrowed(quote! { <#ident as #type_path_>::#method() })
            },
            vc_codec_path,
        );

        let mut parts = prefix;
        parts.extend([StringExpr::from_text("<"), generics, StringExpr::from_text(">")]);
        StringExpr::from_iter(parts, vc_codec_path)
    }

    /// `Name<A, B>` for `my_crate::foo::Name<A, B>`.
    pub fn type_name(&self, vc_codec_path: &Path) -> StringExpr {
        self.with_generics(vec![self.type_ident()], quote!(type_name), vc_codec_path)
    }

    /// `my_crate::foo::Name<a::A, b::B>`.
    pub fn type_path(&self, vc_codec_path: &Path) -> StringExpr {
        let prefix = if self.has_module_path() {
            vec![self.module_path(), StringExpr::from_text("::"), self.type_ident()]
        } else {
            vec![self.type_ident()]
        };
        self.with_generics(prefix, quote!(type_path), vc_codec_path)
    }
}
