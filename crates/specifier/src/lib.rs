// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # specifier
//!
//! One crate, all features. Re-exports:
//! - [`api`] attribute macro from `specifier-derive-impl`
//! - All types from `specifier-core` ([`Specifier`], [`ApiSpecifier`],
//!   [`MethodDescription`], [`ParamDescription`], ...)
//!
//! # Quick Start
//!
//! ```rust
//! use specifier::{ApiSpecifier, Specifier, api};
//!
//! pub struct Calc;
//!
//! #[api(description = "Calculator")]
//! impl Calc {
//!     #[api_method]
//!     #[api_description("Adds two numbers")]
//!     pub fn add(
//!         &self,
//!         #[api_description("left operand, non-negative")]
//!         #[api_range(min = 0)]
//!         #[api_required]
//!         a: i64,
//!         b: i64
//!     ) -> i64 {
//!         a + b
//!     }
//! }
//!
//! let spec = Specifier::<Calc>::new();
//! assert_eq!(spec.api_description().as_deref(), Some("Calculator"));
//! assert_eq!(spec.api_method_names(), vec!["add"]);
//!
//! let a = spec.api_method_param_full_description("add", "a");
//! assert_eq!(a.min_value, Some(0));
//! assert!(a.required);
//! ```

pub use specifier_core::*;
pub use specifier_derive_impl::api;
