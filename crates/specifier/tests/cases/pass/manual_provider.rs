// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::{
    Annotation, AnnotationSet, ApiSpecifier, MetadataProvider, NumericRange, OperationMetadata,
    ParameterMetadata, Specifier, TypeMetadata,
};

pub struct Health;

static HEALTH: TypeMetadata = TypeMetadata {
    name: "Health",
    annotations: AnnotationSet::new(&[Annotation::Description("Health checks")]),
    operations: &[OperationMetadata {
        name: "ping",
        annotations: AnnotationSet::new(&[Annotation::Exposed]),
        parameters: &[ParameterMetadata {
            name: "timeout",
            annotations: AnnotationSet::new(&[Annotation::Range(NumericRange {
                min: Some(1),
                max: Some(30),
            })]),
        }],
        returns: AnnotationSet::EMPTY,
    }],
};

impl MetadataProvider for Health {
    fn type_metadata() -> &'static TypeMetadata {
        &HEALTH
    }
}

fn main() {
    let spec = Specifier::<Health>::new();
    assert_eq!(spec.api_description().as_deref(), Some("Health checks"));

    let timeout = spec.api_method_param_full_description("ping", "timeout");
    assert_eq!(timeout.min_value, Some(1));
    assert_eq!(timeout.max_value, Some(30));
}
