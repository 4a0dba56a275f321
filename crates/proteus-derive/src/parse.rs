//! Parsing utilities for the record derive.
//!
//! This module turns a `DeriveInput` and its `#[proteus(...)]`
//! attributes into a shape the code generator can walk.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, Meta, Token,
};

/// Parsed container-level attributes.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    /// The record rejects decoded request bodies.
    pub no_body: bool,
    /// Inherent method to delegate the post-parse hook to.
    pub after_parse: Option<Ident>,
}

impl Parse for ContainerAttrs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = Self::default();

        let meta_list: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;
        for meta in meta_list {
            match &meta {
                Meta::Path(path) if path.is_ident("no_body") => attrs.no_body = true,
                Meta::NameValue(nv) if nv.path.is_ident("after_parse") => {
                    let name = string_literal(&nv.value)?;
                    attrs.after_parse = Some(Ident::new(&name, nv.value.span()));
                }
                _ => {
                    return Err(syn::Error::new(
                        meta.span(),
                        "expected `no_body` or `after_parse = \"method\"`",
                    ))
                }
            }
        }

        Ok(attrs)
    }
}

/// A parsed record field.
#[derive(Debug)]
pub struct RecordField {
    /// The field identifier.
    pub ident: Ident,
    /// Tag pairs from the field's attribute, in written order.
    pub pairs: Vec<(String, String)>,
}

impl RecordField {
    /// Parses one named field, returning `None` for `#[proteus(skip)]`.
    fn parse(field: &syn::Field) -> syn::Result<Option<Self>> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;

        let mut pairs = Vec::new();
        for attr in proteus_attrs(&field.attrs) {
            let meta_list: Punctuated<Meta, Token![,]> =
                attr.parse_args_with(Punctuated::parse_terminated)?;
            for meta in meta_list {
                match &meta {
                    Meta::Path(path) if path.is_ident("skip") => return Ok(None),
                    Meta::NameValue(nv) => {
                        let keyword = nv
                            .path
                            .get_ident()
                            .ok_or_else(|| syn::Error::new(nv.path.span(), "expected identifier"))?
                            .to_string();
                        pairs.push((keyword, string_literal(&nv.value)?));
                    }
                    _ => {
                        return Err(syn::Error::new(
                            meta.span(),
                            "expected `skip` or `keyword = \"value\"`",
                        ))
                    }
                }
            }
        }

        Ok(Some(Self { ident, pairs }))
    }

    /// Whether the field carries any tag pairs.
    pub fn is_tagged(&self) -> bool {
        !self.pairs.is_empty()
    }
}

/// Parsed record information.
#[derive(Debug)]
pub struct RecordInput {
    /// The struct identifier.
    pub ident: Ident,
    /// Container-level attributes.
    pub attrs: ContainerAttrs,
    /// Non-skipped fields, in declaration order.
    pub fields: Vec<RecordField>,
}

impl RecordInput {
    /// Parses a `DeriveInput` into a `RecordInput`.
    pub fn parse(input: DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new(
                input.span(),
                "Record can only be derived for structs",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                input.span(),
                "Record requires named fields",
            ));
        };

        let mut attrs = ContainerAttrs::default();
        for attr in proteus_attrs(&input.attrs) {
            let parsed: ContainerAttrs = attr.parse_args()?;
            attrs.no_body |= parsed.no_body;
            if parsed.after_parse.is_some() {
                attrs.after_parse = parsed.after_parse;
            }
        }

        let fields = named
            .named
            .iter()
            .map(RecordField::parse)
            .filter_map(Result::transpose)
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: input.ident,
            attrs,
            fields,
        })
    }
}

fn proteus_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("proteus"))
}

fn string_literal(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        _ => Err(syn::Error::new(expr.span(), "expected string literal")),
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn test_parse_tagged_fields() {
        let input: DeriveInput = parse_quote! {
            struct SearchRequest {
                #[proteus(query = "q", string = "trim")]
                query: String,
                page: u32,
            }
        };
        let record = RecordInput::parse(input).unwrap();
        assert_eq!(record.fields.len(), 2);
        assert_eq!(
            record.fields[0].pairs,
            vec![
                ("query".to_string(), "q".to_string()),
                ("string".to_string(), "trim".to_string()),
            ]
        );
        assert!(record.fields[0].is_tagged());
        assert!(!record.fields[1].is_tagged());
    }

    #[test]
    fn test_skip_field_excluded() {
        let input: DeriveInput = parse_quote! {
            struct Req {
                #[proteus(skip)]
                internal: String,
                #[proteus(query = "q")]
                query: String,
            }
        };
        let record = RecordInput::parse(input).unwrap();
        assert_eq!(record.fields.len(), 1);
        assert_eq!(record.fields[0].ident.to_string(), "query");
    }

    #[test]
    fn test_container_attrs() {
        let input: DeriveInput = parse_quote! {
            #[proteus(no_body, after_parse = "finalize")]
            struct Req {
                #[proteus(query = "q")]
                query: String,
            }
        };
        let record = RecordInput::parse(input).unwrap();
        assert!(record.attrs.no_body);
        assert_eq!(record.attrs.after_parse.unwrap().to_string(), "finalize");
    }

    #[test]
    fn test_enum_rejected() {
        let input: DeriveInput = parse_quote! {
            enum NotARecord { A, B }
        };
        assert!(RecordInput::parse(input).is_err());
    }

    #[test]
    fn test_tuple_struct_rejected() {
        let input: DeriveInput = parse_quote! {
            struct NotARecord(String);
        };
        assert!(RecordInput::parse(input).is_err());
    }

    #[test]
    fn test_unknown_marker_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Req {
                #[proteus(mystery)]
                field: String,
            }
        };
        assert!(RecordInput::parse(input).is_err());
    }
}
