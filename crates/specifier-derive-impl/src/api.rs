// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[api]` attribute macro implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      #[api] expansion                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  attribute args ──► ApiArgs (darling)                        │
//! │                          │                                   │
//! │  impl block ───────► ApiDef::from_impl ──► stripped impl     │
//! │                          │                                   │
//! │                          ▼                                   │
//! │                    generate::generate                        │
//! │                          │                                   │
//! │                          ▼                                   │
//! │             impl MetadataProvider for Self                   │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`parse`] — Arguments, helper attributes, and the `ApiDef` model
//! - `generate` — Static metadata table generation

mod generate;
pub mod parse;

use proc_macro2::TokenStream;
use quote::quote;
use syn::Item;

use self::parse::{ApiArgs, ApiDef, strip_helpers};

/// Main entry point for the `#[api]` attribute.
///
/// Emits the impl block with helper attributes removed, followed by the
/// generated `MetadataProvider` impl. On error the generated impl is replaced
/// by the diagnostics; the impl block itself is always kept so its methods
/// stay callable.
pub fn expand(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut item = match syn::parse2::<Item>(item) {
        Ok(Item::Impl(item)) => item,
        Ok(other) => {
            let error = syn::Error::new_spanned(&other, "#[api] can only be applied to impl blocks")
                .to_compile_error();
            return quote! {
                #other
                #error
            };
        }
        Err(err) => return err.to_compile_error()
    };

    let args = match ApiArgs::parse(args) {
        Ok(args) => args,
        Err(err) => return with_error(item, err.write_errors())
    };

    match ApiDef::from_impl(args, &mut item) {
        Ok(def) => {
            let provider = generate::generate(&def);
            quote! {
                #item
                #provider
            }
        }
        Err(err) => with_error(item, err.to_compile_error())
    }
}

fn with_error(mut item: syn::ItemImpl, error: TokenStream) -> TokenStream {
    strip_helpers(&mut item);
    quote! {
        #item
        #error
    }
}
