// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::{ApiSpecifier, Specifier, api};

pub struct Calc;

#[api(description = "Calculator")]
impl Calc {
    #[api_method]
    #[api_description("Adds two numbers")]
    pub fn add(
        &self,
        #[api_description("left operand, non-negative")]
        #[api_range(min = 0)]
        #[api_required]
        a: i64,
        b: i64,
    ) -> i64 {
        a + b
    }

    pub fn reset(&mut self) {}

    fn helper(&self) -> i64 {
        0
    }
}

fn main() {
    let spec = Specifier::<Calc>::new();
    assert_eq!(spec.api_method_names(), vec!["add"]);

    let a = spec.api_method_param_full_description("add", "a");
    assert_eq!(a.min_value, Some(0));
    assert!(a.required);

    assert_eq!(Calc.add(1, 2), 3);
    assert_eq!(Calc.helper(), 0);
}
