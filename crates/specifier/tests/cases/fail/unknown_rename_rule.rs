// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::api;

pub struct Calc;

#[api(rename_all = "SCREAMING_SNAKE_CASE")]
impl Calc {
    #[api_method]
    pub fn add(&self, a: i64) -> i64 {
        a
    }
}

fn main() {}
