//! # chatmark-engine
//!
//! Safe markdown-to-HTML formatting for chatbot replies.
//!
//! [`format`] escapes untrusted text, then recognises fenced code blocks,
//! code spans, strong/em emphasis, bullet lists and line breaks. It never
//! fails: anything malformed stays as literal escaped text.
//!
//! ```
//! use chatmark_engine::format;
//!
//! assert_eq!(format("**bold**"), "<strong>bold</strong>");
//! assert_eq!(format("* a\n* b\nplain"), "<ul><li>a</li><li>b</li></ul>plain");
//! assert_eq!(
//!     format("<script>alert(1)</script>"),
//!     "&lt;script&gt;alert(1)&lt;/script&gt;"
//! );
//! ```
//!
//! Callers that build their own DOM can take the render instructions from
//! [`parse`] instead of the HTML string.

pub mod escape;
pub mod options;
pub mod parsing;
pub mod render;
pub mod transcript;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use escape::escape_html;
pub use options::FormatOptions;
pub use parsing::{Block, Document, InlineNode, parse};
pub use render::{render_html, render_html_with};
pub use transcript::{
    AskRequest, BackendReply, Endpoint, Message, Sender, Transcript, TranscriptError,
    TranscriptStyle, render_message,
};

/// Format untrusted message text as an HTML fragment, all stages enabled.
pub fn format(text: &str) -> String {
    format_with(text, &FormatOptions::default())
}

/// Format untrusted message text with the given stage switches.
pub fn format_with(text: &str, options: &FormatOptions) -> String {
    render_html_with(&parse(text, options), options)
}
