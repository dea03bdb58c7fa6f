// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::model;

#[model(id = "identifier")]
pub struct Post {}

fn main() {}
