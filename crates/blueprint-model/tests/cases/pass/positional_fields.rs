// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::{FieldKey, Model, model};

#[model("title", body = "Body")]
pub struct Post {}

fn main() {
    assert_eq!(
        Post::FIELDS,
        &[FieldKey::new("title", "title"), FieldKey::new("body", "Body")]
    );

    let post = Post::with_fields(None, "Hi".to_string(), "Text".to_string());
    assert_eq!(post.value("title"), Some("Hi"));
    assert_eq!(post.value("Body"), Some("Text"));
    assert_eq!(post.value("body"), None);
}
