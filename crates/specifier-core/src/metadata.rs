// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static metadata tables and the [`MetadataProvider`] trait.
//!
//! Every documented type owns one `static` [`TypeMetadata`] table. The
//! `#[api]` attribute macro generates it from an `impl` block; it can also be
//! written by hand:
//!
//! ```rust
//! use specifier_core::{
//!     Annotation, AnnotationSet, MetadataProvider, OperationMetadata, ParameterMetadata,
//!     TypeMetadata
//! };
//!
//! struct Echo;
//!
//! impl MetadataProvider for Echo {
//!     fn type_metadata() -> &'static TypeMetadata {
//!         static METADATA: TypeMetadata = TypeMetadata {
//!             name:        "Echo",
//!             annotations: AnnotationSet::EMPTY,
//!             operations:  &[OperationMetadata {
//!                 name:        "echo",
//!                 annotations: AnnotationSet {
//!                     annotations: &[Annotation::Exposed]
//!                 },
//!                 parameters:  &[ParameterMetadata {
//!                     name:        "text",
//!                     annotations: AnnotationSet::EMPTY
//!                 }],
//!                 returns:     AnnotationSet::EMPTY
//!             }]
//!         };
//!         &METADATA
//!     }
//! }
//!
//! assert!(Echo::operation_annotations("echo").is_some_and(|a| a.is_exposed()));
//! assert!(Echo::parameter_annotations("echo", "missing").is_none());
//! ```

use crate::annotation::AnnotationSet;

/// Declared parameter of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterMetadata {
    /// Parameter name as reported in descriptions.
    pub name: &'static str,

    /// Annotations on the parameter.
    pub annotations: AnnotationSet
}

/// Declared operation (method) of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationMetadata {
    /// Operation name as reported in descriptions.
    pub name: &'static str,

    /// Annotations on the operation itself.
    pub annotations: AnnotationSet,

    /// Parameters in signature order, receiver excluded.
    pub parameters: &'static [ParameterMetadata],

    /// Annotations on the return value.
    pub returns: AnnotationSet
}

impl OperationMetadata {
    /// Check whether the operation carries the *Exposed* annotation.
    pub fn is_exposed(&self) -> bool {
        self.annotations.is_exposed()
    }

    /// Find a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterMetadata> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Parameter names in signature order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &'static str> {
        self.parameters.iter().map(|p| p.name)
    }
}

/// Metadata table of a documented type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMetadata {
    /// Type name as reported in descriptions.
    pub name: &'static str,

    /// Annotations on the type itself.
    pub annotations: AnnotationSet,

    /// Declared operations in declaration order.
    pub operations: &'static [OperationMetadata]
}

impl TypeMetadata {
    /// Find an operation by name.
    pub fn operation(&self, name: &str) -> Option<&'static OperationMetadata> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Operations carrying the *Exposed* annotation, in declaration order.
    pub fn exposed_operations(&self) -> impl Iterator<Item = &'static OperationMetadata> {
        self.operations.iter().filter(|op| op.is_exposed())
    }
}

/// Source of annotation metadata for a type.
///
/// Implementors provide the static table; the remaining methods are the four
/// lookups the [`Specifier`](crate::Specifier) is built on. Lookups return
/// `None` when the named operation or parameter is not declared.
pub trait MetadataProvider {
    /// Static metadata table of the type.
    fn type_metadata() -> &'static TypeMetadata;

    /// Annotations on the type itself.
    fn type_annotations() -> AnnotationSet {
        Self::type_metadata().annotations
    }

    /// Annotations on the named operation.
    fn operation_annotations(operation: &str) -> Option<AnnotationSet> {
        Self::type_metadata()
            .operation(operation)
            .map(|op| op.annotations)
    }

    /// Annotations on a parameter of the named operation.
    fn parameter_annotations(operation: &str, parameter: &str) -> Option<AnnotationSet> {
        Self::type_metadata()
            .operation(operation)?
            .parameter(parameter)
            .map(|p| p.annotations)
    }

    /// Annotations on the return value of the named operation.
    fn return_annotations(operation: &str) -> Option<AnnotationSet> {
        Self::type_metadata()
            .operation(operation)
            .map(|op| op.returns)
    }
}
