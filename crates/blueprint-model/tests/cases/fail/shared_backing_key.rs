// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::model;

#[model(a = "K", b = "K")]
pub struct Dup {}

fn main() {}
