// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::{Model, model};

#[model(label = "Label")]
pub struct Tagged<T>
where
    T: Default,
{
    pub payload: T,
}

fn describe<M: Model>(model: &M) -> String {
    format!("{}:{}", M::SCHEMA, model.value("Label").unwrap_or_default())
}

fn main() {
    let tagged: Tagged<u8> = Tagged::with_fields(None, "x".to_string());
    assert_eq!(tagged.payload, 0);
    assert_eq!(describe(&tagged), "Tagged:x");
}
