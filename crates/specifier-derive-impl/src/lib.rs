// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Impl-Level `#[api(...)]`
//!
//! ```rust,ignore
//! #[api(
//!     description = "Calculator", // Optional: type description
//!     name = "Calculator",        // Optional: reported type name (default: self type)
//!     rename_all = "camelCase",   // Optional: "camelCase" | "PascalCase" | "snake_case" | "kebab-case"
//!     crate = "specifier"         // Optional: runtime crate path (default: ::specifier)
//! )]
//! impl Calc { /* ... */ }
//! ```
//!
//! ## Method and Parameter Attributes
//!
//! ```rust,ignore
//! #[api]
//! impl Calc {
//!     #[api_method]                            // Exposed operation
//!     #[api_description("Adds two numbers")]   // Operation description
//!     #[api_return(description = "sum", required, min = 0)]
//!     pub fn add(
//!         &self,
//!         #[api_description("left operand")]
//!         #[api_range(min = 0, max = 100)]     // Numeric bounds
//!         #[api_required]                      // Or #[api_required(false)]
//!         a: i64,
//!         b: i64
//!     ) -> i64 {
//!         a + b
//!     }
//!
//!     pub fn reset(&mut self) {}               // Declared, not exposed
//!
//!     fn helper(&self) {}                      // Not an operation
//! }
//! ```
//!
//! # Generated Code
//!
//! The impl block is emitted unchanged except for the removed helper
//! attributes, followed by `impl MetadataProvider for Calc` with a `static`
//! metadata table. Nothing is evaluated at runtime beyond reading that table.
//!
//! # Compile-Time Checks
//!
//! - Each annotation kind at most once per site
//! - `api_range` needs a bound and `min <= max`
//! - Annotations on non-public inherent methods and on receivers are rejected
//! - Names must stay unique after `rename_all`
//!
//! A failing check keeps the impl block in the output, helpers stripped, so
//! only the diagnostic itself is reported.

mod api;

use proc_macro::TokenStream;

/// Attribute macro generating a `MetadataProvider` from an impl block.
///
/// # Overview
///
/// Place `#[api]` on an inherent or trait impl block. Public functions of an
/// inherent impl (every function of a trait impl) become declared operations;
/// those marked `#[api_method]` are exposed and documented.
///
/// # Example
///
/// ```rust,ignore
/// use specifier::{ApiSpecifier, Specifier, api};
///
/// pub struct Calc;
///
/// #[api(description = "Calculator")]
/// impl Calc {
///     #[api_method]
///     #[api_description("Adds two numbers")]
///     pub fn add(
///         &self,
///         #[api_description("left operand, non-negative")]
///         #[api_range(min = 0)]
///         #[api_required]
///         a: i64,
///         b: i64
///     ) -> i64 {
///         a + b
///     }
/// }
///
/// let spec = Specifier::<Calc>::new();
/// assert_eq!(spec.api_method_names(), vec!["add"]);
/// ```
///
/// # Attributes
///
/// | Attribute | Site | Annotation |
/// |-----------|------|------------|
/// | `#[api_method]` | method | *Exposed* |
/// | `#[api_description("...")]` | method, parameter | *Description* |
/// | `#[api_required]` | method, parameter | *Required* |
/// | `#[api_range(min = N, max = M)]` | method, parameter | *Numeric Range* |
/// | `#[api_return(...)]` | method | return value annotations |
#[proc_macro_attribute]
pub fn api(args: TokenStream, item: TokenStream) -> TokenStream {
    api::expand(args.into(), item.into()).into()
}
