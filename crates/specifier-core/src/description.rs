// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Description model produced by the [`Specifier`](crate::Specifier).
//!
//! Plain owned values, built fresh on every query and compared structurally.
//! With the `serde` feature they serialize with camelCase keys and omit absent
//! fields:
//!
//! ```json
//! { "name": "a", "description": "left operand", "minValue": 0, "required": true }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name and free-text description of a declaration site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct CommonDescription {
    /// Site name. Absent for return values.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,

    /// Text of the *Description* annotation.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>
}

impl CommonDescription {
    /// Create a description for a named site.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            description
        }
    }

    /// Create a description with a name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

/// Description of a parameter or return value.
///
/// `required` defaults to `false`; it only changes when the site carries an
/// explicit *Required* annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ParamDescription {
    /// Name and description text.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub common: CommonDescription,

    /// Lower bound from the *Numeric Range* annotation.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub min_value: Option<i64>,

    /// Upper bound from the *Numeric Range* annotation.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub max_value: Option<i64>,

    /// Value of the *Required* annotation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool
}

impl ParamDescription {
    /// Empty description of a named parameter.
    ///
    /// This is also the value returned for parameters that do not exist.
    ///
    /// ```rust
    /// use specifier_core::ParamDescription;
    ///
    /// let param = ParamDescription::named("z");
    /// assert_eq!(param.common.name.as_deref(), Some("z"));
    /// assert!(!param.required);
    /// assert_eq!(param.min_value, None);
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            common: CommonDescription::named(name),
            ..Self::default()
        }
    }

    /// Parameter name, absent for return values.
    pub fn name(&self) -> Option<&str> {
        self.common.name.as_deref()
    }

    /// Description text.
    pub fn description(&self) -> Option<&str> {
        self.common.description.as_deref()
    }
}

/// Description of an exposed operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct MethodDescription {
    /// Operation name and description text.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub common: CommonDescription,

    /// One entry per declared parameter, in signature order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Vec<ParamDescription>,

    /// Return value, present only when it carries a *Required* annotation.
    ///
    /// Serialized as `returnDescription`.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "returnDescription",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub returns: Option<ParamDescription>
}

impl MethodDescription {
    /// Operation name.
    pub fn name(&self) -> Option<&str> {
        self.common.name.as_deref()
    }

    /// Find a parameter description by name.
    pub fn parameter(&self, name: &str) -> Option<&ParamDescription> {
        self.parameters.iter().find(|p| p.name() == Some(name))
    }
}

/// Description of a whole type: its own text plus every exposed operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ApiDescription {
    /// Type name.
    pub name: String,

    /// Text of the type's *Description* annotation.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,

    /// Exposed operations in enumeration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub methods: Vec<MethodDescription>
}

impl ApiDescription {
    /// Find a method description by operation name.
    pub fn method(&self, name: &str) -> Option<&MethodDescription> {
        self.methods.iter().find(|m| m.name() == Some(name))
    }
}
