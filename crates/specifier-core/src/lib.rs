// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types and the introspection engine for specifier.
//!
//! This crate holds everything the `#[api]` attribute macro generates code
//! against. It can also be used standalone with hand-written metadata tables.
//!
//! # Overview
//!
//! - [`MetadataProvider`] — Static annotation table of a documented type
//! - [`Specifier`] — Answers queries about a type's exposed operations
//! - [`ApiSpecifier`] — Object-safe query interface implemented by
//!   [`Specifier`]
//! - [`ParamDescription`], [`MethodDescription`], [`ApiDescription`] —
//!   Description model
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `specifier` directly, which re-exports this crate
//! together with the `#[api]` macro:
//!
//! ```rust,ignore
//! use specifier::prelude::*;
//!
//! let spec = Specifier::<Calc>::new();
//! let add = spec.api_method_full_description("add");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod annotation;
pub mod description;
pub mod metadata;
pub mod prelude;
pub mod specifier;

pub use crate::{
    annotation::{Annotation, AnnotationKind, AnnotationSet, NumericRange},
    description::{ApiDescription, CommonDescription, MethodDescription, ParamDescription},
    metadata::{MetadataProvider, OperationMetadata, ParameterMetadata, TypeMetadata},
    specifier::{ApiSpecifier, Specifier}
};
