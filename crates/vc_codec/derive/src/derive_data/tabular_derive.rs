use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr};

use super::{FieldAttributes, TabularMeta, TypeAttributes, TypeParser};

// -----------------------------------------------------------------------------
// TabularDerive

/// A parsed `#[derive(Tabular)]` input.
pub(crate) enum TabularDerive<'a> {
    /// A struct with named fields, or a unit struct with none.
    Struct(TabularStruct<'a>),
    /// A field-less enum, reflected as a scalar.
    Enum(TabularEnum<'a>),
}

impl<'a> TabularDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let parser = TypeParser::new(&input.ident, attrs.type_path.clone(), &input.generics);

        match &input.data {
            Data::Struct(data) => {
                let named = match &data.fields {
                    Fields::Named(named) => named.named.iter().collect(),
                    Fields::Unit => Vec::new(),
                    Fields::Unnamed(unnamed) => {
                        return Err(syn::Error::new(
                            unnamed.span(),
                            "`Tabular` needs named fields: members are written by name",
                        ));
                    }
                };

                let mut fields = Vec::with_capacity(named.len());
                for data in named {
                    fields.push(StructField {
                        attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                        data,
                    });
                }

                let mut meta = TabularMeta::new(attrs, parser);
                meta.set_active_types(fields.iter().filter(|f| !f.attrs.skip).map(|f| &f.data.ty));
                Ok(Self::Struct(TabularStruct { meta, fields }))
            }
            Data::Enum(data) => {
                if let Some(name) = &attrs.header_name {
                    return Err(syn::Error::new(
                        name.span(),
                        "`name` only applies to structs: an enum is a scalar",
                    ));
                }
                if !input.generics.params.is_empty() {
                    return Err(syn::Error::new(
                        input.generics.span(),
                        "`Tabular` enums cannot be generic",
                    ));
                }

                let mut variants = Vec::with_capacity(data.variants.len());
                for variant in &data.variants {
                    if !matches!(variant.fields, Fields::Unit) {
                        return Err(syn::Error::new(
                            variant.fields.span(),
                            "`Tabular` enums are written as their discriminant and cannot have fields",
                        ));
                    }
                    variants.push(&variant.ident);
                }

                Ok(Self::Enum(TabularEnum {
                    meta: TabularMeta::new(attrs, parser),
                    variants,
                }))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "`Tabular` cannot be derived for unions",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// Struct

pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The member name written in documents.
    pub fn member_name(&self) -> LitStr {
        match &self.attrs.rename {
            Some(rename) => rename.clone(),
            None => {
                let ident = self.ident();
                LitStr::new(&ident.to_string(), ident.span())
            }
        }
    }

    pub fn ident(&self) -> &Ident {
        // Only named fields are collected.
        match &self.data.ident {
            Some(ident) => ident,
            None => unreachable!("unnamed fields are rejected while parsing"),
        }
    }
}

pub(crate) struct TabularStruct<'a> {
    meta: TabularMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> TabularStruct<'a> {
    #[inline]
    pub fn meta(&self) -> &TabularMeta<'a> {
        &self.meta
    }

    /// Fields without `#[tabular(skip)]`, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.attrs.skip)
    }
}

// -----------------------------------------------------------------------------
// Enum

pub(crate) struct TabularEnum<'a> {
    meta: TabularMeta<'a>,
    variants: Vec<&'a Ident>,
}

impl<'a> TabularEnum<'a> {
    #[inline]
    pub fn meta(&self) -> &TabularMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn variants(&self) -> &[&'a Ident] {
        &self.variants
    }
}
