// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use specifier::{ApiSpecifier, Specifier, api};

pub struct Store<T> {
    items: Vec<T>,
}

#[api(description = "Typed store", name = "Store")]
impl<T> Store<T>
where
    T: Clone,
{
    #[api_method]
    #[api_description("Reads an item by index")]
    pub fn get(&self, #[api_range(min = 0)] index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }
}

fn main() {
    let spec = Specifier::<Store<String>>::new();
    assert_eq!(spec.type_name(), "Store");
    assert_eq!(spec.api_method_names(), vec!["get"]);

    let store = Store { items: vec![1, 2, 3] };
    assert_eq!(store.get(1), Some(2));
}
