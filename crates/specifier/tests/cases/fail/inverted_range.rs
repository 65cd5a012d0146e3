// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::api;

pub struct Calc;

#[api]
impl Calc {
    #[api_method]
    pub fn add(&self, #[api_range(min = 3, max = 1)] a: i64) -> i64 {
        a
    }

    pub fn sub(&self, a: i64) -> i64 {
        -a
    }
}

fn main() {
    // Only the range error is reported; the methods still exist.
    assert_eq!(Calc.add(1), 1);
    assert_eq!(Calc.sub(1), -1);
}
