// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotations attached to declaration sites.
//!
//! A declaration site (type, operation, parameter or return value) carries an
//! [`AnnotationSet`]: a static slice holding at most one annotation of each
//! [`AnnotationKind`].
//!
//! | Kind | Payload | Attribute |
//! |------|---------|-----------|
//! | [`Description`](AnnotationKind::Description) | free text | `#[api_description("...")]` |
//! | [`Exposed`](AnnotationKind::Exposed) | — | `#[api_method]` |
//! | [`Required`](AnnotationKind::Required) | `bool` | `#[api_required]` |
//! | [`Range`](AnnotationKind::Range) | [`NumericRange`] | `#[api_range(min = 0)]` |

use std::fmt;

/// Kind of an annotation, used to query an [`AnnotationSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// Free-text description.
    Description,

    /// Marks an operation as part of the documented API.
    Exposed,

    /// Required flag, explicitly `true` or `false`.
    Required,

    /// Numeric bounds.
    Range
}

impl AnnotationKind {
    /// Name of the attribute that declares this kind.
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::Description => "api_description",
            Self::Exposed => "api_method",
            Self::Required => "api_required",
            Self::Range => "api_range"
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

/// Optional inclusive bounds of a numeric value.
///
/// # Example
///
/// ```rust
/// use specifier_core::NumericRange;
///
/// let range = NumericRange::at_least(0);
/// assert_eq!(range.min, Some(0));
/// assert_eq!(range.max, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumericRange {
    /// Lower bound.
    pub min: Option<i64>,

    /// Upper bound.
    pub max: Option<i64>
}

impl NumericRange {
    /// Create a range from optional bounds.
    pub const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min,
            max
        }
    }

    /// Range with only a lower bound.
    pub const fn at_least(min: i64) -> Self {
        Self::new(Some(min), None)
    }

    /// Range with only an upper bound.
    pub const fn at_most(max: i64) -> Self {
        Self::new(None, Some(max))
    }

    /// Range with both bounds.
    pub const fn between(min: i64, max: i64) -> Self {
        Self::new(Some(min), Some(max))
    }
}

/// A single annotation with its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// Free-text description.
    Description(&'static str),

    /// Operation is part of the documented API.
    Exposed,

    /// Required flag.
    Required(bool),

    /// Numeric bounds.
    Range(NumericRange)
}

impl Annotation {
    /// Kind of this annotation.
    pub const fn kind(&self) -> AnnotationKind {
        match self {
            Self::Description(_) => AnnotationKind::Description,
            Self::Exposed => AnnotationKind::Exposed,
            Self::Required(_) => AnnotationKind::Required,
            Self::Range(_) => AnnotationKind::Range
        }
    }
}

/// Annotations of one declaration site.
///
/// Backed by a static slice so sets can live in `static` metadata tables.
/// When a hand-written table lists a kind twice, lookups see the first entry.
///
/// # Example
///
/// ```rust
/// use specifier_core::{Annotation, AnnotationKind, AnnotationSet, NumericRange};
///
/// static SET: AnnotationSet = AnnotationSet {
///     annotations: &[
///         Annotation::Description("left operand"),
///         Annotation::Range(NumericRange { min: Some(0), max: None })
///     ]
/// };
///
/// assert_eq!(SET.description(), Some("left operand"));
/// assert_eq!(SET.required(), None);
/// assert!(SET.get(AnnotationKind::Range).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnnotationSet {
    /// Annotations in declaration order.
    pub annotations: &'static [Annotation]
}

impl AnnotationSet {
    /// Set without annotations.
    pub const EMPTY: Self = Self {
        annotations: &[]
    };

    /// Wrap a static slice of annotations.
    pub const fn new(annotations: &'static [Annotation]) -> Self {
        Self {
            annotations
        }
    }

    /// First annotation of the given kind.
    pub fn get(&self, kind: AnnotationKind) -> Option<&'static Annotation> {
        self.annotations.iter().find(|a| a.kind() == kind)
    }

    /// Check whether an annotation of the given kind is present.
    pub fn contains(&self, kind: AnnotationKind) -> bool {
        self.get(kind).is_some()
    }

    /// Text of the *Description* annotation.
    pub fn description(&self) -> Option<&'static str> {
        match self.get(AnnotationKind::Description)? {
            Annotation::Description(text) => Some(*text),
            _ => None
        }
    }

    /// Whether the *Exposed* annotation is present.
    pub fn is_exposed(&self) -> bool {
        self.contains(AnnotationKind::Exposed)
    }

    /// Value of the *Required* annotation, if present.
    pub fn required(&self) -> Option<bool> {
        match self.get(AnnotationKind::Required)? {
            Annotation::Required(required) => Some(*required),
            _ => None
        }
    }

    /// Bounds of the *Numeric Range* annotation, if present.
    pub fn range(&self) -> Option<NumericRange> {
        match self.get(AnnotationKind::Range)? {
            Annotation::Range(range) => Some(*range),
            _ => None
        }
    }

    /// Iterate over all annotations.
    pub fn iter(&self) -> impl Iterator<Item = &'static Annotation> {
        self.annotations.iter()
    }

    /// Number of annotations.
    pub const fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Check whether the set has no annotations.
    pub const fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
