//! Record derive implementation.
//!
//! This module contains the code generation for `#[derive(Record)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parse::RecordInput;

/// Expands the `Record` derive.
///
/// 1. Parse the struct and its attributes
/// 2. Generate the descriptor table
/// 3. Generate the index-based field accessors
/// 4. Generate body application and the optional post-parse delegation
pub fn expand_record(item: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(item)?;
    let record = RecordInput::parse(input)?;
    Ok(generate_record_impl(&record))
}

fn generate_record_impl(record: &RecordInput) -> TokenStream {
    let ident = &record.ident;
    let type_name = ident.to_string();

    let descriptors = record.fields.iter().map(|field| {
        let name = field.ident.to_string();
        let pairs = field.pairs.iter().map(|(keyword, value)| {
            quote! { (#keyword, #value) }
        });
        quote! {
            ::proteus::FieldDescriptor::new(#name, ::proteus::Tag::from_static(&[#(#pairs),*]))
        }
    });

    // Index-based access is only generated for tagged fields; the walk
    // never touches untagged descriptors.
    let is_empty_arms = record.fields.iter().enumerate().filter_map(|(index, field)| {
        field.is_tagged().then(|| {
            let field_ident = &field.ident;
            quote! {
                #index => ::core::option::Option::Some(
                    ::proteus::FieldAccess::is_empty(&self.#field_ident),
                ),
            }
        })
    });

    let field_mut_arms = record.fields.iter().enumerate().filter_map(|(index, field)| {
        field.is_tagged().then(|| {
            let field_ident = &field.ident;
            quote! {
                #index => ::core::option::Option::Some(
                    ::proteus::FieldAccess::field_mut(&mut self.#field_ident),
                ),
            }
        })
    });

    let apply_body = if record.attrs.no_body {
        quote! {
            let _ = document;
            ::core::result::Result::Err(<::proteus::serde_json::Error as ::proteus::serde::de::Error>::custom(
                "record does not accept a request body",
            ))
        }
    } else {
        let merges = record.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let name = field.ident.to_string();
            quote! {
                if let ::core::option::Option::Some(value) = map.remove(#name) {
                    self.#field_ident = ::proteus::serde_json::from_value(value)?;
                }
            }
        });
        quote! {
            match document {
                ::proteus::serde_json::Value::Object(mut map) => {
                    #(#merges)*
                    ::core::result::Result::Ok(())
                }
                _ => ::core::result::Result::Err(<::proteus::serde_json::Error as ::proteus::serde::de::Error>::custom(
                    "expected a JSON object body",
                )),
            }
        }
    };

    let after_parse = record.attrs.after_parse.as_ref().map(|method| {
        quote! {
            fn after_parse(
                &mut self,
                request: &::proteus::Request,
            ) -> ::proteus::anyhow::Result<()> {
                self.#method(request)
            }
        }
    });

    quote! {
        #[automatically_derived]
        impl ::proteus::Record for #ident {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn descriptors(&self) -> &'static [::proteus::FieldDescriptor] {
                const DESCRIPTORS: &[::proteus::FieldDescriptor] = &[#(#descriptors),*];
                DESCRIPTORS
            }

            fn field_is_empty(&self, index: usize) -> ::core::option::Option<bool> {
                match index {
                    #(#is_empty_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<::proteus::FieldMut<'_>> {
                match index {
                    #(#field_mut_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn apply_body(
                &mut self,
                document: ::proteus::serde_json::Value,
            ) -> ::core::result::Result<(), ::proteus::serde_json::Error> {
                #apply_body
            }

            #after_parse
        }
    }
}
