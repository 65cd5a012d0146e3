// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `MetadataProvider` implementation generation.
//!
//! For `#[api(description = "Calculator")] impl Calc { ... }` generates:
//!
//! ```rust,ignore
//! impl ::specifier::MetadataProvider for Calc {
//!     fn type_metadata() -> &'static ::specifier::TypeMetadata {
//!         static METADATA: ::specifier::TypeMetadata = ::specifier::TypeMetadata {
//!             name: "Calc",
//!             annotations: ::specifier::AnnotationSet {
//!                 annotations: &[::specifier::Annotation::Description("Calculator")]
//!             },
//!             operations: &[ /* OperationMetadata { .. } per operation */ ]
//!         };
//!         &METADATA
//!     }
//! }
//! ```
//!
//! The table is built from braced struct literals only, so it is a valid
//! `static` initializer for generic impls too.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

use super::parse::{Annotations, ApiDef, OperationDef, ParameterDef};

/// Generate the provider impl for a parsed impl block.
pub fn generate(def: &ApiDef) -> TokenStream {
    let root = &def.crate_path;
    let (impl_generics, _, where_clause) = def.generics.split_for_impl();
    let self_ty = &def.self_ty;
    let name = &def.name;
    let annotations = annotation_set(root, &def.annotations);
    let operations = def.operations.iter().map(|op| operation(root, op));

    quote! {
        #[automatically_derived]
        impl #impl_generics #root::MetadataProvider for #self_ty #where_clause {
            fn type_metadata() -> &'static #root::TypeMetadata {
                static METADATA: #root::TypeMetadata = #root::TypeMetadata {
                    name: #name,
                    annotations: #annotations,
                    operations: &[#(#operations),*]
                };
                &METADATA
            }
        }
    }
}

fn operation(root: &Path, op: &OperationDef) -> TokenStream {
    let name = &op.name;
    let annotations = annotation_set(root, &op.annotations);
    let parameters = op.parameters.iter().map(|p| parameter(root, p));
    let returns = annotation_set(root, &op.returns);

    quote! {
        #root::OperationMetadata {
            name: #name,
            annotations: #annotations,
            parameters: &[#(#parameters),*],
            returns: #returns
        }
    }
}

fn parameter(root: &Path, param: &ParameterDef) -> TokenStream {
    let name = &param.name;
    let annotations = annotation_set(root, &param.annotations);

    quote! {
        #root::ParameterMetadata {
            name: #name,
            annotations: #annotations
        }
    }
}

fn annotation_set(root: &Path, annotations: &Annotations) -> TokenStream {
    let mut items = Vec::new();

    if let Some(text) = &annotations.description {
        items.push(quote! { #root::Annotation::Description(#text) });
    }
    if annotations.exposed {
        items.push(quote! { #root::Annotation::Exposed });
    }
    if let Some(required) = annotations.required {
        items.push(quote! { #root::Annotation::Required(#required) });
    }
    if let Some(range) = &annotations.range {
        let min = bound(range.min);
        let max = bound(range.max);
        items.push(quote! {
            #root::Annotation::Range(#root::NumericRange { min: #min, max: #max })
        });
    }

    if items.is_empty() {
        quote! { #root::AnnotationSet::EMPTY }
    } else {
        quote! { #root::AnnotationSet { annotations: &[#(#items),*] } }
    }
}

fn bound(value: Option<i64>) -> TokenStream {
    match value {
        Some(value) => quote! { ::core::option::Option::Some(#value) },
        None => quote! { ::core::option::Option::None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse::ApiArgs;

    fn def(args: TokenStream, item: syn::ItemImpl) -> ApiDef {
        let mut item = item;
        ApiDef::from_impl(ApiArgs::parse(args).unwrap(), &mut item).unwrap()
    }

    #[test]
    fn empty_annotation_set() {
        let root: Path = syn::parse_quote!(::specifier);
        let output = annotation_set(&root, &Annotations::default()).to_string();
        assert!(output.contains("AnnotationSet :: EMPTY"));
    }

    #[test]
    fn full_annotation_set() {
        let def = def(
            TokenStream::new(),
            syn::parse_quote! {
                impl Calc {
                    #[api_method]
                    pub fn add(
                        &self,
                        #[api_description("left operand")]
                        #[api_required(false)]
                        #[api_range(min = 0)]
                        a: i64
                    ) {}
                }
            }
        );
        let add = &def.operations[0];

        let output = annotation_set(&def.crate_path, &add.parameters[0].annotations).to_string();
        assert!(output.contains("Annotation :: Description (\"left operand\")"));
        assert!(output.contains("Annotation :: Required (false)"));
        assert!(output.contains("NumericRange { min : :: core :: option :: Option :: Some (0i64)"));
        assert!(output.contains("max : :: core :: option :: Option :: None"));
        assert!(!output.contains("Annotation :: Exposed"));

        let output = annotation_set(&def.crate_path, &add.annotations).to_string();
        assert!(output.contains("Annotation :: Exposed"));
    }

    #[test]
    fn generate_provider_impl() {
        let def = def(
            quote!(description = "Calculator"),
            syn::parse_quote! {
                impl Calc {
                    #[api_method]
                    pub fn add(&self, a: i64, b: i64) -> i64 { a + b }
                }
            }
        );
        let output = generate(&def).to_string();
        assert!(output.contains("impl :: specifier :: MetadataProvider for Calc"));
        assert!(output.contains("static METADATA : :: specifier :: TypeMetadata"));
        assert!(output.contains("name : \"Calc\""));
        assert!(output.contains("Description (\"Calculator\")"));
        assert!(output.contains("name : \"add\""));
        assert!(output.contains("name : \"a\""));
        assert!(output.contains("name : \"b\""));
    }

    #[test]
    fn generate_keeps_generics() {
        let def = def(
            TokenStream::new(),
            syn::parse_quote! {
                impl<T> Store<T> where T: Clone {
                    pub fn get(&self) -> Option<T> { None }
                }
            }
        );
        let output = generate(&def).to_string();
        assert!(output.contains("impl < T > :: specifier :: MetadataProvider for Store < T > where T : Clone"));
    }

    #[test]
    fn generate_custom_crate_path() {
        let def = def(
            quote!(crate = "specifier_core"),
            syn::parse_quote! {
                impl Calc {}
            }
        );
        let output = generate(&def).to_string();
        assert!(output.contains("impl specifier_core :: MetadataProvider for Calc"));
        assert!(output.contains("operations : & []"));
    }

    #[test]
    fn generate_return_annotations() {
        let def = def(
            TokenStream::new(),
            syn::parse_quote! {
                impl Calc {
                    #[api_return(description = "sum", required)]
                    pub fn add(&self) -> i64 { 0 }
                }
            }
        );
        let output = generate(&def).to_string();
        assert!(output.contains(
            "returns : :: specifier :: AnnotationSet { annotations : & [:: specifier :: Annotation :: Description (\"sum\") , :: specifier :: Annotation :: Required (true)] }"
        ));
    }
}
