// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use specifier_core::prelude::*;
//! ```

pub use crate::{
    ApiDescription, ApiSpecifier, CommonDescription, MetadataProvider, MethodDescription,
    ParamDescription, Specifier
};
