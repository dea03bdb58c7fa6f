// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::{Model, model};

#[model]
pub struct Empty {}

#[model()]
pub struct Marker;

fn main() {
    let empty = Empty::with_fields(None);
    assert!(empty.id.is_none());
    assert_eq!(Empty::SCHEMA, "Empty");
    assert!(Empty::FIELDS.is_empty());

    let marker = Marker::new();
    assert!(marker.id().is_none());
    assert_eq!(Marker::SCHEMA, "Marker");
}
