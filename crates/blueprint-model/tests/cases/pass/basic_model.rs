// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::{Model, Uuid, model};

#[model(field1 = "Hello", field2 = "Test", field3 = "Again")]
pub struct Test {}

fn main() {
    let id = Uuid::nil();
    let test = Test::with_fields(
        Some(id),
        "one".to_string(),
        "two".to_string(),
        "three".to_string()
    );

    assert_eq!(Test::SCHEMA, "Test");
    assert_eq!(<Test as Model>::SCHEMA, "Test");
    assert_eq!(test.id, Some(id));
    assert_eq!(test.field1, "one");
    assert_eq!(test.field2, "two");
    assert_eq!(test.field3, "three");
    assert_eq!(test.value("Again"), Some("three"));
}
