// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The [`Specifier`] introspection engine.
//!
//! A [`Specifier<T>`] answers questions about the exposed API surface of `T`
//! by reading the static table of its [`MetadataProvider`] implementation and
//! assembling [description values](crate::description).
//!
//! # Lookup Misses
//!
//! A name that does not resolve is never an error:
//!
//! | Query | Missing operation | Missing parameter |
//! |-------|-------------------|-------------------|
//! | `api_method_description` | `None` | — |
//! | `api_method_param_names` | `None` | — |
//! | `api_method_param_description` | `None` | `None` |
//! | `api_method_param_full_description` | empty `ParamDescription` | empty `ParamDescription` |
//! | `api_method_full_description` | `None` | — |
//!
//! `api_method_full_description` also returns `None` for operations that are
//! declared but not exposed.

use std::{fmt, marker::PhantomData};

use tracing::{debug, trace};

use crate::{
    annotation::AnnotationSet,
    description::{ApiDescription, CommonDescription, MethodDescription, ParamDescription},
    metadata::{MetadataProvider, OperationMetadata, ParameterMetadata, TypeMetadata}
};

/// Introspection queries over a type's exposed API.
///
/// Object safe, so specifiers for different types can be collected:
///
/// ```rust,ignore
/// let specs: Vec<Box<dyn ApiSpecifier>> =
///     vec![Box::new(Specifier::<Calc>::new()), Box::new(Specifier::<Store>::new())];
/// for spec in &specs {
///     println!("{}: {:?}", spec.type_name(), spec.api_method_names());
/// }
/// ```
pub trait ApiSpecifier {
    /// Name of the described type.
    fn type_name(&self) -> &'static str;

    /// Text of the *Description* annotation on the type itself.
    fn api_description(&self) -> Option<String>;

    /// Names of all operations carrying the *Exposed* annotation.
    fn api_method_names(&self) -> Vec<String>;

    /// Text of the *Description* annotation on an operation.
    ///
    /// Works for operations that are not exposed.
    fn api_method_description(&self, name: &str) -> Option<String>;

    /// Parameter names of an operation in signature order.
    fn api_method_param_names(&self, name: &str) -> Option<Vec<String>>;

    /// Text of the *Description* annotation on a parameter.
    fn api_method_param_description(&self, name: &str, param: &str) -> Option<String>;

    /// Full description of a parameter.
    ///
    /// Never fails: a missing operation or parameter yields
    /// [`ParamDescription::named`].
    fn api_method_param_full_description(&self, name: &str, param: &str) -> ParamDescription;

    /// Full description of an exposed operation.
    fn api_method_full_description(&self, name: &str) -> Option<MethodDescription>;

    /// Description of the type and all of its exposed operations.
    fn full_description(&self) -> ApiDescription {
        ApiDescription {
            name:        self.type_name().to_string(),
            description: self.api_description(),
            methods:     self
                .api_method_names()
                .iter()
                .filter_map(|name| self.api_method_full_description(name))
                .collect()
        }
    }
}

/// Specifier for the type `T`.
///
/// Zero-sized; all state lives in `T`'s static metadata table.
///
/// # Example
///
/// ```rust
/// use specifier_core::{
///     Annotation, AnnotationSet, ApiSpecifier, MetadataProvider, OperationMetadata, Specifier,
///     TypeMetadata
/// };
///
/// struct Health;
///
/// impl MetadataProvider for Health {
///     fn type_metadata() -> &'static TypeMetadata {
///         static METADATA: TypeMetadata = TypeMetadata {
///             name:        "Health",
///             annotations: AnnotationSet {
///                 annotations: &[Annotation::Description("Liveness checks")]
///             },
///             operations:  &[OperationMetadata {
///                 name:        "ping",
///                 annotations: AnnotationSet {
///                     annotations: &[Annotation::Exposed]
///                 },
///                 parameters:  &[],
///                 returns:     AnnotationSet::EMPTY
///             }]
///         };
///         &METADATA
///     }
/// }
///
/// let spec = Specifier::<Health>::new();
/// assert_eq!(spec.api_description().as_deref(), Some("Liveness checks"));
/// assert_eq!(spec.api_method_names(), vec!["ping".to_string()]);
/// assert_eq!(spec.api_method_param_names("ping"), Some(vec![]));
/// ```
pub struct Specifier<T: ?Sized> {
    marker: PhantomData<fn() -> T>
}

impl<T: ?Sized> Specifier<T> {
    /// Create a specifier.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData
        }
    }
}

impl<T: ?Sized> Default for Specifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Specifier<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Specifier<T> {}

impl<T: ?Sized> fmt::Debug for Specifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specifier")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: MetadataProvider + ?Sized> Specifier<T> {
    fn metadata() -> &'static TypeMetadata {
        T::type_metadata()
    }

    fn operation(name: &str) -> Option<&'static OperationMetadata> {
        let metadata = Self::metadata();
        let operation = metadata.operation(name);
        if operation.is_none() {
            trace!(type_name = metadata.name, operation = name, "operation not found");
        }
        operation
    }

    fn parameter(name: &str, param: &str) -> Option<&'static ParameterMetadata> {
        let parameter = Self::operation(name)?.parameter(param);
        if parameter.is_none() {
            trace!(
                type_name = Self::metadata().name,
                operation = name,
                parameter = param,
                "parameter not found"
            );
        }
        parameter
    }
}

impl<T: MetadataProvider + ?Sized> ApiSpecifier for Specifier<T> {
    fn type_name(&self) -> &'static str {
        Self::metadata().name
    }

    fn api_description(&self) -> Option<String> {
        T::type_annotations().description().map(str::to_owned)
    }

    fn api_method_names(&self) -> Vec<String> {
        Self::metadata()
            .exposed_operations()
            .map(|op| op.name.to_owned())
            .collect()
    }

    fn api_method_description(&self, name: &str) -> Option<String> {
        Self::operation(name)?
            .annotations
            .description()
            .map(str::to_owned)
    }

    fn api_method_param_names(&self, name: &str) -> Option<Vec<String>> {
        let operation = Self::operation(name)?;
        Some(operation.parameter_names().map(str::to_owned).collect())
    }

    fn api_method_param_description(&self, name: &str, param: &str) -> Option<String> {
        Self::parameter(name, param)?
            .annotations
            .description()
            .map(str::to_owned)
    }

    fn api_method_param_full_description(&self, name: &str, param: &str) -> ParamDescription {
        match Self::parameter(name, param) {
            Some(parameter) => describe_parameter(parameter),
            None => ParamDescription::named(param)
        }
    }

    fn api_method_full_description(&self, name: &str) -> Option<MethodDescription> {
        let operation = Self::operation(name)?;
        if !operation.is_exposed() {
            debug!(
                type_name = Self::metadata().name,
                operation = name,
                "operation is not exposed"
            );
            return None;
        }

        let method = MethodDescription {
            common:     CommonDescription::new(
                operation.name,
                operation.annotations.description().map(str::to_owned)
            ),
            parameters: operation
                .parameter_names()
                .map(|param| self.api_method_param_full_description(name, param))
                .collect(),
            returns:    describe_return(operation.returns)
        };

        debug!(
            type_name = Self::metadata().name,
            operation = name,
            parameters = method.parameters.len(),
            returns = method.returns.is_some(),
            "assembled method description"
        );
        Some(method)
    }
}

/// Build the description of a declared parameter.
fn describe_parameter(parameter: &ParameterMetadata) -> ParamDescription {
    let annotations = parameter.annotations;
    let range = annotations.range().unwrap_or_default();
    let mut result = ParamDescription {
        common: CommonDescription::new(
            parameter.name,
            annotations.description().map(str::to_owned)
        ),
        min_value: range.min,
        max_value: range.max,
        ..ParamDescription::default()
    };
    if let Some(required) = annotations.required() {
        result.required = required;
    }
    result
}

/// Build the description of a return value.
///
/// Only return sites with an explicit *Required* annotation are described;
/// description text and bounds alone do not make one appear.
fn describe_return(annotations: AnnotationSet) -> Option<ParamDescription> {
    let required = annotations.required()?;
    let range = annotations.range().unwrap_or_default();
    Some(ParamDescription {
        common: CommonDescription {
            name:        None,
            description: annotations.description().map(str::to_owned)
        },
        min_value: range.min,
        max_value: range.max,
        required
    })
}
