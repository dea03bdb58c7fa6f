// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! `stringify_expr!` implementation.
//!
//! Pairs an expression with its own source text:
//!
//! ```rust,ignore
//! let (value, source) = stringify_expr!(a + b);
//! // value == a + b, source == "a + b"
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::Expr;

/// Main entry point for the `stringify_expr!` macro.
pub fn expand(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    generate(input.into()).into()
}

fn generate(input: TokenStream) -> TokenStream {
    if input.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "stringify_expr! expects an expression"
        )
        .to_compile_error();
    }

    match syn::parse2::<Expr>(input) {
        Ok(expr) => {
            let source = quote!(#expr).to_string();
            quote! { (#expr, #source) }
        }
        Err(err) => err.to_compile_error()
    }
}
