// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Impl-level argument parsing with darling.
//!
//! # Supported Arguments
//!
//! | Argument | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `description` | No | — | *Description* annotation on the type |
//! | `name` | No | self type name | Type name reported by the specifier |
//! | `rename_all` | No | — | Case applied to operation and parameter names |
//! | `crate` | No | `::specifier` | Path to the runtime crate |
//!
//! ```rust,ignore
//! #[api(description = "Calculator", rename_all = "camelCase")]
//! impl Calc { /* ... */ }
//! ```

use convert_case::{Case, Casing};
use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;

/// Returns the default runtime crate path.
fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::specifier)
}

/// Arguments of the `#[api(...)]` attribute.
#[derive(Debug, FromMeta)]
pub struct ApiArgs {
    /// Description text of the type.
    #[darling(default)]
    pub description: Option<String>,

    /// Overrides the reported type name.
    #[darling(default)]
    pub name: Option<String>,

    /// Case conversion for operation and parameter names.
    #[darling(default)]
    pub rename_all: Option<RenameRule>,

    /// Path under which the runtime types are reachable.
    #[darling(rename = "crate", default = "default_crate_path")]
    pub crate_path: syn::Path
}

impl ApiArgs {
    /// Parse the token stream passed to the attribute.
    pub fn parse(args: TokenStream) -> darling::Result<Self> {
        let items = NestedMeta::parse_meta_list(args)?;
        Self::from_list(&items)
    }
}

/// Case conversion selected by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `camelCase`
    Camel,

    /// `PascalCase`
    Pascal,

    /// `snake_case`
    Snake,

    /// `kebab-case`
    Kebab
}

impl RenameRule {
    /// Apply the rule to a Rust identifier.
    pub fn apply(self, name: &str) -> String {
        let case = match self {
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
            Self::Snake => Case::Snake,
            Self::Kebab => Case::Kebab
        };
        name.to_case(case)
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
