use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Type, TypeGenerics};

use super::{TypeAttributes, TypeParser};
use crate::string_expr::StringExpr;

/// Everything the generated impls need to know about the deriving type,
/// independent of its kind.
pub(crate) struct TabularMeta<'a> {
    vc_codec_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    // Field types mentioning a type parameter, in declaration order.
    active_types: Vec<Type>,
}

impl<'a> TabularMeta<'a> {
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            vc_codec_path: crate::path::vc_codec(),
            active_types: Vec::new(),
        }
    }

    /// Records the types of the reflected fields, so generic ones get bounds.
    pub(super) fn set_active_types<'t>(&mut self, types: impl Iterator<Item = &'t Type>) {
        let params: Vec<&syn::Ident> = self
            .generics()
            .type_params()
            .map(|param| &param.ident)
            .collect();
        if params.is_empty() {
            return;
        }

        for ty in types {
            if mentions_any(&params, ty.to_token_stream()) && !self.active_types.contains(ty) {
                self.active_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn vc_codec_path(&self) -> &Path {
        &self.vc_codec_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.type_parser.generics()
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<StringExpr> {
        self.type_parser
            .has_module_path()
            .then(|| self.type_parser.module_path())
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        self.type_parser.type_ident()
    }

    #[inline]
    pub fn type_name(&self) -> StringExpr {
        self.type_parser.type_name(&self.vc_codec_path)
    }

    #[inline]
    pub fn type_path(&self) -> StringExpr {
        self.type_parser.type_path(&self.vc_codec_path)
    }

    /// Returns `impl_generics`, `ty_generics` and the where clause.
    ///
    /// - with type parameters, `Self: Any`; with lifetimes only, `Self: 'static`.
    /// - every type parameter: `TypePath`.
    /// - with `add_field_bounds`, every field type mentioning a type
    ///   parameter: `Typed + Reflect`.
    ///
    /// Predicates of the declared where clause are kept.
    pub fn split_generics(
        &self,
        add_field_bounds: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::AnyFP;

        let generics = self.generics();
        let mut where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            where_clause.extend(quote! { Self: #AnyFP, });
        } else if generics.lifetimes().next().is_some() {
            where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, declared) = generics.split_for_impl();

        if let Some(declared) = declared {
            let predicates = declared.predicates.iter();
            where_clause.extend(quote! { #(#predicates,)* });
        }

        let type_path_ = crate::path::type_path_(&self.vc_codec_path);
        for param in generics.type_params() {
            let ident = &param.ident;
            where_clause.extend(quote! { #ident: #type_path_, });
        }

        if add_field_bounds {
            let reflect_ = crate::path::reflect_(&self.vc_codec_path);
            let typed_ = crate::path::typed_(&self.vc_codec_path);
            for ty in &self.active_types {
                where_clause.extend(quote! { #ty: #typed_ + #reflect_, });
            }
        }

        (impl_generics, ty_generics, where_clause)
    }
}

// Does any of `idents` appear in `tokens`?
fn mentions_any(idents: &[&syn::Ident], tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tree| match tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&&ident),
        proc_macro2::TokenTree::Group(group) => mentions_any(idents, group.stream()),
        _ => false,
    })
}
