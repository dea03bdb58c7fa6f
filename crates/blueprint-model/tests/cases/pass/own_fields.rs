// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::model;

#[model(name = "Name")]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Account {
    pub(crate) balance: i64,
    pub(crate) tags: Vec<String>,
}

fn main() {
    let account = Account::new();
    assert_eq!(account.balance, 0);
    assert!(account.tags.is_empty());
    assert_eq!(account.name, "");

    let named = Account::with_fields(None, "Ada".to_string());
    assert_eq!(named.name, "Ada");
    assert_eq!(named.clone(), named);
}
