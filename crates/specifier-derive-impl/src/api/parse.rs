// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Impl block parsing.
//!
//! Turns an `#[api]` impl block into an [`ApiDef`], the intermediate
//! representation consumed by the generator. Parsing also strips the helper
//! attributes so the impl block can be emitted as ordinary Rust.
//!
//! # Parsing Flow
//!
//! ```text
//! #[api(...)] impl Calc { ... }
//!        │
//!        ├── ApiArgs::parse()          impl-level arguments (darling)
//!        │
//!        ├── for each fn item
//!        │     ├── take_helpers()      strip api_* attributes
//!        │     ├── is it an operation? pub fn, or any fn of a trait impl
//!        │     └── parse_*_attrs()     collect annotations
//!        ▼
//!   ApiDef { name, description, operations: [OperationDef { parameters, returns }] }
//! ```
//!
//! # Operation Rules
//!
//! - Inherent impl: only `pub` functions are operations
//! - Trait impl: every function is an operation
//! - The receiver is never a parameter
//! - Identifier patterns are named after the identifier (`r#type` → `type`);
//!   `_` and destructuring patterns become `arg{index}`

mod args;
mod attrs;

use std::collections::HashSet;

use quote::ToTokens;
use syn::{
    FnArg, Generics, ImplItem, ImplItemFn, ItemImpl, Pat, Path, Type, Visibility, ext::IdentExt,
    spanned::Spanned
};

pub use self::{
    args::{ApiArgs, RenameRule},
    attrs::Annotations
};
use self::attrs::{parse_operation_attrs, parse_parameter_attrs, take_helpers};

/// Parsed `#[api]` impl block.
#[derive(Debug)]
pub struct ApiDef {
    /// Path to the runtime crate.
    pub crate_path: Path,

    /// Generics of the impl block, reused for the provider impl.
    pub generics: Generics,

    /// The type the impl block is for.
    pub self_ty: Box<Type>,

    /// Reported type name.
    pub name: String,

    /// Type-level annotations.
    pub annotations: Annotations,

    /// Operations in declaration order.
    pub operations: Vec<OperationDef>
}

/// Parsed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDef {
    /// Reported operation name.
    pub name: String,

    /// Annotations on the method.
    pub annotations: Annotations,

    /// Parameters in signature order.
    pub parameters: Vec<ParameterDef>,

    /// Annotations on the return value.
    pub returns: Annotations
}

/// Parsed parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDef {
    /// Reported parameter name.
    pub name: String,

    /// Annotations on the parameter.
    pub annotations: Annotations
}

impl ApiDef {
    /// Build the definition from an impl block, stripping helper attributes.
    pub fn from_impl(args: ApiArgs, item: &mut ItemImpl) -> syn::Result<Self> {
        let trait_impl = item.trait_.is_some();
        let mut operations = Vec::new();
        let mut seen = HashSet::new();

        for impl_item in &mut item.items {
            let ImplItem::Fn(method) = impl_item else {
                continue;
            };
            let span = method.sig.ident.span();
            let Some(operation) = parse_operation(method, trait_impl, args.rename_all)? else {
                continue;
            };
            if !seen.insert(operation.name.clone()) {
                return Err(syn::Error::new(
                    span,
                    format!("duplicate operation name `{}`", operation.name)
                ));
            }
            operations.push(operation);
        }

        Ok(Self {
            crate_path: args.crate_path,
            generics: item.generics.clone(),
            self_ty: item.self_ty.clone(),
            name: args.name.unwrap_or_else(|| type_name(&item.self_ty)),
            annotations: Annotations {
                description: args.description,
                ..Annotations::default()
            },
            operations
        })
    }
}

/// Remove every helper attribute from an impl block.
///
/// Used when parsing fails part way, so the emitted impl carries no
/// attributes the compiler cannot resolve.
pub fn strip_helpers(item: &mut ItemImpl) {
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        take_helpers(&mut method.attrs);
        for input in &mut method.sig.inputs {
            let attrs = match input {
                FnArg::Receiver(receiver) => &mut receiver.attrs,
                FnArg::Typed(typed) => &mut typed.attrs
            };
            take_helpers(attrs);
        }
    }
}

/// Parse one method. Returns `None` for methods that are not operations.
fn parse_operation(
    method: &mut ImplItemFn,
    trait_impl: bool,
    rename: Option<RenameRule>
) -> syn::Result<Option<OperationDef>> {
    let helpers = take_helpers(&mut method.attrs);
    let mut inputs = Vec::new();

    for input in &mut method.sig.inputs {
        match input {
            FnArg::Receiver(receiver) => {
                if let Some(attr) = take_helpers(&mut receiver.attrs).first() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "the receiver is not an API parameter"
                    ));
                }
            }
            FnArg::Typed(typed) => {
                let helpers = take_helpers(&mut typed.attrs);
                let name = parameter_name(&typed.pat, inputs.len());
                inputs.push((name, typed.pat.span(), helpers));
            }
        }
    }

    let is_operation = trait_impl || matches!(method.vis, Visibility::Public(_));
    if !is_operation {
        let stray = helpers
            .first()
            .or_else(|| inputs.iter().find_map(|(_, _, helpers)| helpers.first()));
        if let Some(attr) = stray {
            return Err(syn::Error::new_spanned(
                attr,
                "API annotations have no effect on non-public methods; make the method `pub`"
            ));
        }
        return Ok(None);
    }

    let (annotations, returns) = parse_operation_attrs(&helpers)?;
    let mut parameters = Vec::with_capacity(inputs.len());
    let mut seen = HashSet::new();
    for (name, span, helpers) in inputs {
        let name = apply_rename(rename, name);
        if !seen.insert(name.clone()) {
            return Err(syn::Error::new(
                span,
                format!("duplicate parameter name `{name}`")
            ));
        }
        parameters.push(ParameterDef {
            name,
            annotations: parse_parameter_attrs(&helpers)?
        });
    }

    Ok(Some(OperationDef {
        name: apply_rename(rename, method.sig.ident.unraw().to_string()),
        annotations,
        parameters,
        returns
    }))
}

/// Reported name of a parameter pattern.
fn parameter_name(pat: &Pat, index: usize) -> String {
    match pat {
        Pat::Ident(ident) => ident.ident.unraw().to_string(),
        _ => format!("arg{index}")
    }
}

/// Default reported name of the impl's self type.
fn type_name(ty: &Type) -> String {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.unraw().to_string())
            .unwrap_or_default(),
        Type::Reference(reference) => type_name(&reference.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        Type::Group(group) => type_name(&group.elem),
        other => other.to_token_stream().to_string()
    }
}

fn apply_rename(rule: Option<RenameRule>, name: String) -> String {
    match rule {
        Some(rule) => rule.apply(&name),
        None => name
    }
}
