// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::{ApiSpecifier, Specifier, api};

pub trait Greeter {
    fn greet(&self, name: &str) -> String;
    fn farewell(&self) -> String;
}

pub struct English;

// Trait methods are operations without `pub`.
#[api(description = "English greetings")]
impl Greeter for English {
    #[api_method]
    #[api_description("Greets someone")]
    fn greet(&self, #[api_required] name: &str) -> String {
        format!("Hello, {name}!")
    }

    fn farewell(&self) -> String {
        "Goodbye!".to_string()
    }
}

fn main() {
    let spec = Specifier::<English>::new();
    assert_eq!(spec.api_method_names(), vec!["greet"]);
    assert_eq!(spec.api_method_param_names("farewell"), Some(vec![]));
    assert!(spec.api_method_full_description("farewell").is_none());
    assert_eq!(English.greet("Ann"), "Hello, Ann!");
}
