use super::{span::Span, types::Segment};

/// One line of the segmented text.
///
/// Only newlines inside plain segments end a line; a fenced block that spans
/// several source lines stays inside the line that opened it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineRef {
    pub segments: Vec<Segment>,
}

/// Groups segments into lines, splitting plain segments at `\n`.
///
/// A `\r` directly before the newline is dropped. There is always at least
/// one line, so empty input yields a single empty line.
pub fn split_lines(s: &str, segments: &[Segment]) -> Vec<LineRef> {
    let mut lines = vec![];
    let mut current = vec![];

    for seg in segments {
        let Segment::Plain(sp) = *seg else {
            current.push(*seg);
            continue;
        };

        let mut start = sp.start;
        for (off, _) in sp.slice(s).match_indices('\n') {
            let nl = sp.start + off;
            let mut end = nl;
            if end > start && s.as_bytes()[end - 1] == b'\r' {
                end -= 1;
            }
            push_plain(&mut current, start, end);
            lines.push(LineRef {
                segments: std::mem::take(&mut current),
            });
            start = nl + 1;
        }
        push_plain(&mut current, start, sp.end);
    }

    lines.push(LineRef { segments: current });
    lines
}

fn push_plain(current: &mut Vec<Segment>, start: usize, end: usize) {
    if end > start {
        current.push(Segment::Plain(Span::new(start, end)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{options::FormatOptions, parsing::segments::split_segments};
    use pretty_assertions::assert_eq;

    fn lines_of(s: &str) -> Vec<Vec<String>> {
        let segs = split_segments(s, &FormatOptions::default());
        split_lines(s, &segs)
            .into_iter()
            .map(|l| {
                l.segments
                    .iter()
                    .map(|seg| seg.span().slice(s).to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(lines_of(""), vec![Vec::<String>::new()]);
    }

    #[test]
    fn splits_plain_text_on_newlines() {
        assert_eq!(
            lines_of("a\nb\n\nc"),
            vec![vec!["a"], vec!["b"], vec![], vec!["c"]]
        );
    }

    #[test]
    fn trailing_newline_leaves_empty_last_line() {
        assert_eq!(lines_of("a\n"), vec![vec!["a".to_string()], vec![]]);
    }

    #[test]
    fn crlf_is_one_break() {
        assert_eq!(lines_of("a\r\nb"), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn fenced_block_does_not_split_lines() {
        assert_eq!(
            lines_of("see:\n```\nx\ny\n```\ndone"),
            vec![vec!["see:"], vec!["```\nx\ny\n```"], vec!["done"]]
        );
    }

    #[test]
    fn code_span_stays_on_its_line() {
        assert_eq!(
            lines_of("* `x` y\nz"),
            vec![vec!["* ", "`x`", " y"], vec!["z"]]
        );
    }
}
