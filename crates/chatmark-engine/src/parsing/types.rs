use serde::Serialize;

use super::span::Span;

/// A classified run of the escaped text.
///
/// Segments store spans rather than text; code variants are raw zones
/// whose `inner` span is emitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Text eligible for emphasis and list recognition.
    Plain(Span),
    /// A triple-backtick fenced block, possibly spanning lines.
    CodeBlock {
        /// Full span including both fences.
        full: Span,
        /// Content between the fences.
        inner: Span,
    },
    /// A single-backtick code span.
    InlineCode {
        /// Full span including backticks.
        full: Span,
        /// Content between backticks.
        inner: Span,
    },
}

impl Segment {
    /// Extracts the full span from any segment variant.
    pub fn span(&self) -> Span {
        match self {
            Segment::Plain(sp) => *sp,
            Segment::CodeBlock { full, .. } | Segment::InlineCode { full, .. } => *full,
        }
    }

    pub fn is_code(&self) -> bool {
        !matches!(self, Segment::Plain(_))
    }
}

/// A rendered inline node. Text payloads are already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineNode {
    Text(String),
    Code(String),
    CodeBlock(String),
    Strong(Vec<InlineNode>),
    Emphasis(Vec<InlineNode>),
}

/// A block-level render instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// One line of inline content; consecutive lines are separated by breaks.
    Line(Vec<InlineNode>),
    /// A list run: one entry per bullet item.
    List(Vec<Vec<InlineNode>>),
}

/// The ordered render instructions for one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks
            .iter()
            .all(|b| matches!(b, Block::Line(nodes) if nodes.is_empty()))
    }
}
