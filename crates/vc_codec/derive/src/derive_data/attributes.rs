//! Parsing of `#[tabular(...)]` attributes.

use syn::{Attribute, LitStr, Path};

use crate::TABULAR_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type Attributes

/// Attributes on the type itself.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[tabular(type_path = "my_crate::foo::Foo")]`, without generics.
    pub type_path: Option<Path>,
    /// `#[tabular(name = "Foo")]`, the name written in type headers.
    pub header_name: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(TABULAR_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    result.type_path = Some(lit.parse()?);
                    Ok(())
                } else if meta.path.is_ident("name") {
                    result.header_name = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `type_path` or `name`"))
                }
            })?;
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// Field Attributes

/// Attributes on a struct field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[tabular(skip)]`: the field is neither encoded nor decoded.
    pub skip: bool,
    /// `#[tabular(rename = "Name")]`: the member name used in documents.
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(TABULAR_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    result.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    result.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `rename`"))
                }
            })?;
        }

        Ok(result)
    }
}
