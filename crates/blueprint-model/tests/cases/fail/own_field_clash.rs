// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::model;

#[model(title = "Title")]
pub struct Post {
    pub title: String,
}

fn main() {}
