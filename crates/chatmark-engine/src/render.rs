//! HTML rendering of parsed [`Document`]s.
//!
//! Rendering is pure string accumulation: the only markup emitted is the
//! fixed tag set below, and every text payload is already escaped.

use crate::{
    options::FormatOptions,
    parsing::{Block, Document, InlineNode},
};

const LINE_BREAK: &str = "<br>";

/// Render a document with `<br>` between lines.
pub fn render_html(doc: &Document) -> String {
    render_html_with(doc, &FormatOptions::default())
}

/// Render a document, honouring `options.line_breaks`.
///
/// Lines are joined by a break, except next to a list: a `<ul>` already
/// starts and ends its own block, so no break is written immediately before
/// `<ul>` or after `</ul>`.
pub fn render_html_with(doc: &Document, options: &FormatOptions) -> String {
    let separator = if options.line_breaks { LINE_BREAK } else { "\n" };
    let mut out = String::new();
    let mut after_line = false;

    for block in &doc.blocks {
        match block {
            Block::Line(nodes) => {
                if after_line {
                    out.push_str(separator);
                }
                push_inline(&mut out, nodes);
                after_line = true;
            }
            Block::List(items) => {
                out.push_str("<ul>");
                for item in items {
                    out.push_str("<li>");
                    push_inline(&mut out, item);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
                after_line = false;
            }
        }
    }

    out
}

fn push_inline(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(text),
            InlineNode::Code(code) => {
                out.push_str("<code>");
                out.push_str(code);
                out.push_str("</code>");
            }
            InlineNode::CodeBlock(code) => {
                out.push_str("<pre><code>");
                out.push_str(code);
                out.push_str("</code></pre>");
            }
            InlineNode::Strong(children) => {
                out.push_str("<strong>");
                push_inline(out, children);
                out.push_str("</strong>");
            }
            InlineNode::Emphasis(children) => {
                out.push_str("<em>");
                push_inline(out, children);
                out.push_str("</em>");
            }
        }
    }
}
