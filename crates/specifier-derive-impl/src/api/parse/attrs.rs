// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Helper attribute parsing.
//!
//! Extracts annotations from the inert helper attributes inside an
//! `#[api]` impl block. The helpers are stripped from the emitted code.
//!
//! # Supported Helpers
//!
//! | Attribute | Sites | Annotation |
//! |-----------|-------|------------|
//! | `#[api_method]` | method | *Exposed* |
//! | `#[api_description("...")]` | method, parameter | *Description* |
//! | `#[api_required]` / `#[api_required(false)]` | method, parameter | *Required* |
//! | `#[api_range(min = N, max = M)]` | method, parameter | *Numeric Range* |
//! | `#[api_return(description = "...", required, min = N, max = M)]` | method | return value |
//!
//! Each kind may appear at most once per site.

use syn::{
    Attribute, Expr, ExprLit, Lit, LitBool, LitInt, LitStr, Meta, Token, meta::ParseNestedMeta,
    parse::ParseStream
};

/// Names of all helper attributes understood by `#[api]`.
pub const HELPER_ATTRIBUTES: [&str; 5] = [
    "api_method",
    "api_description",
    "api_required",
    "api_range",
    "api_return"
];

/// Parsed numeric bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeDef {
    /// Lower bound.
    pub min: Option<i64>,

    /// Upper bound.
    pub max: Option<i64>
}

impl RangeDef {
    fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Annotations collected for one declaration site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// Text from `api_description`.
    pub description: Option<String>,

    /// Set by `api_method`.
    pub exposed: bool,

    /// Value from `api_required`.
    pub required: Option<bool>,

    /// Bounds from `api_range`.
    pub range: Option<RangeDef>
}

/// Check whether an attribute is one of the helpers.
pub fn is_helper(attr: &Attribute) -> bool {
    HELPER_ATTRIBUTES.iter().any(|name| attr.path().is_ident(name))
}

/// Remove helper attributes from `attrs` and return them.
pub fn take_helpers(attrs: &mut Vec<Attribute>) -> Vec<Attribute> {
    let (helpers, rest): (Vec<_>, Vec<_>) = std::mem::take(attrs).into_iter().partition(is_helper);
    *attrs = rest;
    helpers
}

/// Parse the helpers of a method into its own and its return annotations.
pub fn parse_operation_attrs(attrs: &[Attribute]) -> syn::Result<(Annotations, Annotations)> {
    let mut own = Annotations::default();
    let mut returns = None;

    for attr in attrs {
        if attr.path().is_ident("api_method") {
            if !matches!(attr.meta, Meta::Path(_)) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "api_method takes no arguments: #[api_method]"
                ));
            }
            if own.exposed {
                return Err(duplicate(attr));
            }
            own.exposed = true;
        } else if attr.path().is_ident("api_return") {
            set_once(&mut returns, parse_return(attr)?, attr)?;
        } else {
            apply_common(attr, &mut own)?;
        }
    }

    Ok((own, returns.unwrap_or_default()))
}

/// Parse the helpers of a parameter.
pub fn parse_parameter_attrs(attrs: &[Attribute]) -> syn::Result<Annotations> {
    let mut annotations = Annotations::default();

    for attr in attrs {
        if attr.path().is_ident("api_method") || attr.path().is_ident("api_return") {
            return Err(syn::Error::new_spanned(
                attr,
                "this annotation belongs on the method, not on a parameter"
            ));
        }
        apply_common(attr, &mut annotations)?;
    }

    Ok(annotations)
}

/// Apply `api_description`, `api_required` or `api_range`.
fn apply_common(attr: &Attribute, target: &mut Annotations) -> syn::Result<()> {
    let path = attr.path();
    if path.is_ident("api_description") {
        set_once(&mut target.description, parse_description(attr)?, attr)
    } else if path.is_ident("api_required") {
        set_once(&mut target.required, parse_required(attr)?, attr)
    } else if path.is_ident("api_range") {
        set_once(&mut target.range, parse_range(attr)?, attr)
    } else {
        Ok(())
    }
}

/// Parse `#[api_description("...")]` or `#[api_description = "..."]`.
fn parse_description(attr: &Attribute) -> syn::Result<String> {
    match &attr.meta {
        Meta::List(_) => Ok(attr.parse_args::<LitStr>()?.value()),
        Meta::NameValue(meta) => match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(text),
                ..
            }) => Ok(text.value()),
            other => Err(syn::Error::new_spanned(other, "expected a string literal"))
        },
        Meta::Path(_) => Err(syn::Error::new_spanned(
            attr,
            "api_description requires text: #[api_description(\"...\")]"
        ))
    }
}

/// Parse `#[api_required]` or `#[api_required(bool)]`.
fn parse_required(attr: &Attribute) -> syn::Result<bool> {
    match &attr.meta {
        Meta::Path(_) => Ok(true),
        Meta::List(_) => Ok(attr.parse_args::<LitBool>()?.value),
        Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected #[api_required] or #[api_required(false)]"
        ))
    }
}

/// Parse `#[api_range(min = N, max = M)]`.
fn parse_range(attr: &Attribute) -> syn::Result<RangeDef> {
    let mut range = RangeDef::default();

    attr.parse_nested_meta(|meta| {
        if !parse_bound_option(&meta, &mut range)? {
            return Err(meta.error("unknown api_range option, expected `min` or `max`"));
        }
        Ok(())
    })?;

    if range.is_empty() {
        return Err(syn::Error::new_spanned(
            attr,
            "api_range requires at least one of `min` or `max`"
        ));
    }
    check_order(attr, range)?;
    Ok(range)
}

/// Parse `#[api_return(...)]` into return-site annotations.
fn parse_return(attr: &Attribute) -> syn::Result<Annotations> {
    let mut returns = Annotations::default();
    let mut range = RangeDef::default();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("description") {
            if returns.description.is_some() {
                return Err(meta.error("duplicate `description`"));
            }
            let text: LitStr = meta.value()?.parse()?;
            returns.description = Some(text.value());
        } else if meta.path.is_ident("required") {
            if returns.required.is_some() {
                return Err(meta.error("duplicate `required`"));
            }
            let required = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<LitBool>()?.value
            } else {
                true
            };
            returns.required = Some(required);
        } else if !parse_bound_option(&meta, &mut range)? {
            return Err(meta.error(
                "unknown api_return option, expected one of: description, required, min, max"
            ));
        }
        Ok(())
    })?;

    if !range.is_empty() {
        check_order(attr, range)?;
        returns.range = Some(range);
    }
    Ok(returns)
}

/// Handle a `min = N` or `max = N` entry. Returns `false` for other keys.
fn parse_bound_option(meta: &ParseNestedMeta<'_>, range: &mut RangeDef) -> syn::Result<bool> {
    let slot = if meta.path.is_ident("min") {
        &mut range.min
    } else if meta.path.is_ident("max") {
        &mut range.max
    } else {
        return Ok(false);
    };

    if slot.is_some() {
        return Err(meta.error("duplicate bound"));
    }
    *slot = Some(parse_bound(meta.value()?)?);
    Ok(true)
}

/// Parse an optionally negated integer literal into `i64`.
fn parse_bound(input: ParseStream<'_>) -> syn::Result<i64> {
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let literal: LitInt = input.parse()?;
    let magnitude: i128 = literal.base10_parse()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| syn::Error::new(literal.span(), "bound does not fit in i64"))
}

fn check_order(attr: &Attribute, range: RangeDef) -> syn::Result<()> {
    if let (Some(min), Some(max)) = (range.min, range.max)
        && min > max
    {
        return Err(syn::Error::new_spanned(
            attr,
            format!("`min` ({min}) must not exceed `max` ({max})")
        ));
    }
    Ok(())
}

fn set_once<T>(slot: &mut Option<T>, value: T, attr: &Attribute) -> syn::Result<()> {
    if slot.is_some() {
        return Err(duplicate(attr));
    }
    *slot = Some(value);
    Ok(())
}

fn duplicate(attr: &Attribute) -> syn::Error {
    let name = attr
        .path()
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default();
    syn::Error::new_spanned(attr, format!("duplicate #[{name}] annotation"))
}
