//! # Inline Emphasis
//!
//! Turns the segments of one line (or one list item) into [`InlineNode`]s.
//!
//! Code segments become leaf nodes holding their verbatim interior. The
//! emphasis rules then run in order (strong before em) over the whole line.
//! For each rule the current nodes are flattened into one string in which
//! every non-text node is a single [`ATOM`] character, so markers can enclose
//! inline code or an earlier `Strong` but never match inside one. A fenced
//! code block splits the line into runs that are emphasised separately.

use std::collections::VecDeque;

use crate::options::FormatOptions;

use super::{
    kinds::{Emphasis, EmphasisRule},
    types::{InlineNode, Segment},
};

/// Stand-in for a non-text node while a rule scans the flattened line.
/// Neither a marker nor whitespace nor alphanumeric.
const ATOM: char = '\u{FFFC}';

/// Builds inline nodes for a run of segments from the escaped text `s`.
pub fn inline_nodes(s: &str, segments: &[Segment], options: &FormatOptions) -> Vec<InlineNode> {
    let mut out = Vec::with_capacity(segments.len());
    let mut run = Vec::new();
    for seg in segments {
        match *seg {
            Segment::Plain(sp) => run.push(InlineNode::Text(sp.slice(s).to_string())),
            Segment::InlineCode { inner, .. } => {
                run.push(InlineNode::Code(inner.slice(s).to_string()))
            }
            Segment::CodeBlock { inner, .. } => {
                out.extend(emphasize(std::mem::take(&mut run), options));
                out.push(InlineNode::CodeBlock(inner.slice(s).to_string()));
            }
        }
    }
    out.extend(emphasize(run, options));
    out
}

fn emphasize(nodes: Vec<InlineNode>, options: &FormatOptions) -> Vec<InlineNode> {
    if !options.emphasis || nodes.is_empty() {
        return nodes;
    }
    apply_rules(nodes)
}

fn apply_rules(mut nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    for rule in EmphasisRule::ORDERED {
        nodes = apply_rule(nodes, rule);
    }
    nodes
}

fn apply_rule(nodes: Vec<InlineNode>, rule: EmphasisRule) -> Vec<InlineNode> {
    let nodes = nodes.into_iter().map(|node| match node {
        InlineNode::Strong(children) => InlineNode::Strong(apply_rule(children, rule)),
        InlineNode::Emphasis(children) => InlineNode::Emphasis(apply_rule(children, rule)),
        other => other,
    });
    FlatRun::new(nodes).split(rule)
}

/// Sibling nodes flattened to text, with non-text nodes held aside by the
/// byte offset of their [`ATOM`].
struct FlatRun {
    text: String,
    atoms: VecDeque<(usize, InlineNode)>,
}

impl FlatRun {
    fn new(nodes: impl IntoIterator<Item = InlineNode>) -> Self {
        let mut text = String::new();
        let mut atoms = VecDeque::new();
        for node in nodes {
            match node {
                InlineNode::Text(t) => text.push_str(&t),
                other => {
                    atoms.push_back((text.len(), other));
                    text.push(ATOM);
                }
            }
        }
        Self { text, atoms }
    }

    fn split(mut self, rule: EmphasisRule) -> Vec<InlineNode> {
        let mut out = Vec::new();
        let mut last = 0;
        while let Some(((start, end), (inner_start, inner_end))) = rule.find_at(&self.text, last) {
            self.take(last, start, &mut out);
            let mut inner = Vec::new();
            self.take(inner_start, inner_end, &mut inner);
            out.push(match rule.kind() {
                Emphasis::Strong => InlineNode::Strong(inner),
                Emphasis::Em => InlineNode::Emphasis(inner),
            });
            last = end;
        }
        let len = self.text.len();
        self.take(last, len, &mut out);
        out
    }

    /// Moves the nodes covering `start..end` into `out`. Ranges are taken in
    /// increasing order; delimiter bytes between them hold no atoms.
    fn take(&mut self, start: usize, end: usize, out: &mut Vec<InlineNode>) {
        let mut last = start;
        while let Some(&(at, _)) = self.atoms.front() {
            if at >= end {
                break;
            }
            if at > last {
                out.push(InlineNode::Text(self.text[last..at].to_string()));
            }
            if let Some((_, node)) = self.atoms.pop_front() {
                out.push(node);
            }
            last = at + ATOM.len_utf8();
        }
        if last < end {
            out.push(InlineNode::Text(self.text[last..end].to_string()));
        }
    }
}
