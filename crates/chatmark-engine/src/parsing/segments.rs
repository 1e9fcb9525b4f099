use crate::options::FormatOptions;

use super::{
    cursor::Cursor,
    kinds::{CodeFence, CodeSpan},
    span::Span,
    types::Segment,
};

/// Splits escaped text into a sequence of [`Segment`]s.
///
/// # Raw Zone Precedence
/// Fenced code blocks are extracted over the whole text first; code spans are
/// then looked for only in the plain gaps between blocks. A triple backtick
/// therefore never turns into empty code spans, and a code span can never
/// reach into a fenced block.
///
/// # Returns
/// Non-overlapping segments, left to right, covering the entire input.
/// Plain runs between constructs are emitted as `Segment::Plain`.
pub fn split_segments(s: &str, options: &FormatOptions) -> Vec<Segment> {
    let mut out = vec![];

    if !options.code_blocks {
        scan_code_spans(s, 0, options, &mut out);
        return out;
    }

    let mut cur = Cursor::new(s, 0);
    while !cur.eof() {
        let Some(open) = cur.find_from(0, CodeFence::FENCE) else {
            break;
        };
        let Some(close) = CodeFence::find_close(s, open) else {
            log::debug!("unterminated code fence at byte {open}, leaving it literal");
            break;
        };

        scan_code_spans(&s[cur.i..open], cur.pos(), options, &mut out);
        let end = close + CodeFence::FENCE.len();
        out.push(Segment::CodeBlock {
            full: Span::new(open, end),
            inner: Span::new(open + CodeFence::FENCE.len(), close),
        });
        cur.seek(end);
    }

    scan_code_spans(&s[cur.i..], cur.pos(), options, &mut out);
    out
}

/// Scans one plain gap for code spans, pushing segments with absolute spans.
fn scan_code_spans(gap: &str, base: usize, options: &FormatOptions, out: &mut Vec<Segment>) {
    let mut cur = Cursor::new(gap, base);
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Plain segment
    fn flush_text(out: &mut Vec<Segment>, start: usize, end: usize) {
        if end > start {
            out.push(Segment::Plain(Span::new(start, end)));
        }
    }

    if options.inline_code {
        while !cur.eof() {
            if let Some(seg) = try_parse_code_span(&mut cur) {
                flush_text(out, text_start, seg.span().start);
                text_start = seg.span().end;
                out.push(seg);
                continue;
            }
            cur.bump();
        }
    } else {
        cur.bump_n(gap.len());
    }

    flush_text(out, text_start, cur.pos());
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span would be empty, or if it
/// isn't closed. On failure, cursor position is unchanged.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Segment> {
    if cur.peek() != Some(CodeSpan::TICK) || cur.starts_with(CodeSpan::EMPTY) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(Segment::InlineCode {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}
