// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::api;

pub struct Calc;

#[api]
impl Calc {
    #[api_method]
    #[api_description("Adds")]
    #[api_description("Adds again")]
    pub fn add(&self, a: i64) -> i64 {
        a
    }
}

fn main() {}
