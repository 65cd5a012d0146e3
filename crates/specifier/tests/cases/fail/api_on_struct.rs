// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::api;

#[api(description = "Calculator")]
pub struct Calc;

fn main() {}
