//! # Message Parsing
//!
//! Turns raw message text into a [`Document`] of render instructions.
//!
//! ## Stages
//!
//! 1. **Escape**: `&`, `<`, `>` become entities before anything else runs
//! 2. **Segments** (`segments`): fenced blocks, then code spans in the gaps
//! 3. **Lines** (`lines`): plain segments split at newlines
//! 4. **Classification** (`classify`): each line is a bullet item or plain
//! 5. **Emphasis** (`inline`): strong then em over each line, code kept whole
//! 6. **Blocks** (`builder`): bullet items grouped into list runs
//!
//! ## Key Invariants
//!
//! - Code segments are raw zones: no emphasis or list parsing inside
//! - Segments cover the escaped text left to right without overlap
//! - Emitted emphasis always nests inside its line

pub mod builder;
pub mod classify;
pub mod cursor;
pub mod inline;
pub mod kinds;
pub mod lines;
pub mod segments;
pub mod span;
pub mod types;

#[cfg(test)]
mod tests;

use crate::{escape::escape_html, options::FormatOptions};

use builder::BlockBuilder;
use classify::{LineClass, LineClassifier};
use inline::inline_nodes;
use lines::split_lines;
use segments::split_segments;
pub use types::{Block, Document, InlineNode, Segment};

/// Parses raw (untrusted) message text into render instructions.
///
/// Never fails: unterminated fences, unclosed code spans and unmatched
/// emphasis markers stay in the output as literal text.
pub fn parse(text: &str, options: &FormatOptions) -> Document {
    let escaped = escape_html(text);
    let s: &str = &escaped;

    let segments = split_segments(s, options);
    let classifier = LineClassifier::new(options.lists);
    let mut builder = BlockBuilder::new();

    for line in split_lines(s, &segments) {
        match classifier.classify(s, line) {
            LineClass::Bullet { content } => builder.push_item(inline_nodes(s, &content, options)),
            LineClass::Plain { segments } => builder.push_line(inline_nodes(s, &segments, options)),
        }
    }

    Document {
        blocks: builder.finish(),
    }
}
