// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::{ApiSpecifier, Specifier, api};

pub struct Users;

#[api(rename_all = "camelCase")]
impl Users {
    #[api_method]
    pub fn find_by_email(&self, email_address: String, r#type: u8, _: bool) -> bool {
        !email_address.is_empty() && r#type > 0
    }
}

fn main() {
    let spec = Specifier::<Users>::new();
    assert_eq!(spec.api_method_names(), vec!["findByEmail"]);
    assert_eq!(
        spec.api_method_param_names("findByEmail"),
        Some(vec!["emailAddress".to_string(), "type".to_string(), "arg2".to_string()])
    );
}
