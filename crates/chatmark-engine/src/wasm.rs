//! WASM bindings for the in-browser chat widget.
//!
//! This module exposes the formatter to JavaScript via wasm-bindgen. The
//! widget assigns the returned string to a bubble's `innerHTML`.

use wasm_bindgen::prelude::*;

use crate::{FormatOptions, escape_html, format_with};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Format a bot reply as an HTML fragment.
#[wasm_bindgen(js_name = formatMarkdown)]
pub fn format_markdown(text: &str) -> String {
    format_with(text, &FormatOptions::default())
}

/// Escape user-typed text for display without markdown expansion.
#[wasm_bindgen(js_name = escapeText)]
pub fn escape_text(text: &str) -> String {
    escape_html(text).into_owned()
}
