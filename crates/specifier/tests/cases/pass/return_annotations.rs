// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::{ApiSpecifier, Specifier, api};

pub struct Thermostat;

#[api]
impl Thermostat {
    #[api_method]
    #[api_return(description = "temperature in celsius", required, min = -40, max = 60)]
    pub fn read(&self) -> i32 {
        21
    }

    #[api_method]
    #[api_return(description = "ignored without required")]
    pub fn target(&self) -> i32 {
        20
    }
}

fn main() {
    let spec = Specifier::<Thermostat>::new();

    let read = spec.api_method_full_description("read").unwrap();
    let returns = read.returns.unwrap();
    assert_eq!(returns.name(), None);
    assert_eq!(returns.min_value, Some(-40));
    assert_eq!(returns.max_value, Some(60));
    assert!(returns.required);

    let target = spec.api_method_full_description("target").unwrap();
    assert!(target.returns.is_none());
}
