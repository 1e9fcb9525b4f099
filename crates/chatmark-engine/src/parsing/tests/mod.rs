//! Pipeline tests for the parsing module.
//!
//! Case tables cover the whole escape → segment → line → block path;
//! snapshot tests pin the serialized render instructions.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    escape::escape_html,
    options::FormatOptions,
    parsing::{Block, InlineNode, parse, segments::split_segments},
};

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.to_string())
}

// Invariant tests

#[rstest]
#[case("")]
#[case("plain")]
#[case("`a` and ```b``` and `c")]
#[case("````x```")]
#[case("```\nunterminated")]
#[case("<b>`&`</b>")]
#[case("* a\n* `b`\n```\n* c\n```")]
fn segments_hold_invariants(#[case] raw: &str) {
    let escaped = escape_html(raw);
    let segs = split_segments(&escaped, &FormatOptions::default());
    invariants::check(&escaped, &segs);
}

// Block structure tests

#[test]
fn bullet_run_then_plain_line() {
    let doc = parse("* a\n* b\nplain", &FormatOptions::default());
    assert_eq!(
        doc.blocks,
        vec![
            Block::List(vec![vec![text("a")], vec![text("b")]]),
            Block::Line(vec![text("plain")]),
        ]
    );
}

#[test]
fn all_marker_characters_join_one_run() {
    let doc = parse("* a\n- b\n+ c", &FormatOptions::default());
    assert_eq!(doc.blocks.len(), 1);
    match &doc.blocks[0] {
        Block::List(items) => assert_eq!(items.len(), 3),
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn bullet_markers_inside_fence_are_not_items() {
    let doc = parse("```\n* not\n* items\n```", &FormatOptions::default());
    assert_eq!(
        doc.blocks,
        vec![Block::Line(vec![InlineNode::CodeBlock(
            "\n* not\n* items\n".to_string()
        )])]
    );
}

#[test]
fn emphasis_inside_list_item() {
    let doc = parse("- **key**: value", &FormatOptions::default());
    assert_eq!(
        doc.blocks,
        vec![Block::List(vec![vec![
            InlineNode::Strong(vec![text("key")]),
            text(": value"),
        ]])]
    );
}

#[test]
fn emphasis_does_not_cross_lines() {
    let doc = parse("**a\nb**", &FormatOptions::default());
    assert_eq!(
        doc.blocks,
        vec![Block::Line(vec![text("**a")]), Block::Line(vec![text("b**")])]
    );
}

#[test]
fn code_text_stays_escaped() {
    let doc = parse("`<br>`", &FormatOptions::default());
    assert_eq!(
        doc.blocks,
        vec![Block::Line(vec![InlineNode::Code("&lt;br&gt;".to_string())])]
    );
}

#[test]
fn empty_input_is_empty_document() {
    assert!(parse("", &FormatOptions::default()).is_empty());
    assert!(!parse("x", &FormatOptions::default()).is_empty());
}

// Snapshot tests

#[test]
fn render_instructions_serialize_as_tagged_json() {
    let doc = parse("Hi *there*\n- `x`", &FormatOptions::default());
    let json = serde_json::to_string(&doc).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"{"blocks":[{"line":[{"text":"Hi "},{"emphasis":[{"text":"there"}]}]},{"list":[[{"code":"x"}]]}]}"#
    );
}
