// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::api;

pub struct Users;

#[api(rename_all = "camelCase")]
impl Users {
    #[api_method]
    pub fn find_user(&self) {}

    #[allow(non_snake_case)]
    #[api_method]
    pub fn findUser(&self) {}
}

fn main() {}
