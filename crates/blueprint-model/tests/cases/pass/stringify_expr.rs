// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

use blueprint_model::stringify_expr;

fn main() {
    let (a, b) = (17, 25);
    let (value, source) = stringify_expr!(a + b);
    assert_eq!(value, 42);
    assert_eq!(source, "a + b");

    let (text, source) = stringify_expr!("Hello");
    assert_eq!(text, "Hello");
    assert_eq!(source, "\"Hello\"");
}
