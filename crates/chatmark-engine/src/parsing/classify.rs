use super::{kinds::Bullet, lines::LineRef, span::Span, types::Segment};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; grouping bullet lines into list
/// runs is the builder's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A bullet item. `content` has the indent, marker and separating
    /// whitespace stripped.
    Bullet { content: Vec<Segment> },
    /// Any other line, kept as-is.
    Plain { segments: Vec<Segment> },
}

/// Classifies lines as bullet items or plain lines.
pub struct LineClassifier {
    pub lists: bool,
}

impl LineClassifier {
    pub fn new(lists: bool) -> Self {
        Self { lists }
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// A line is a bullet only if its first segment is plain text starting
    /// with a bullet prefix and something non-blank follows the prefix.
    pub fn classify(&self, s: &str, line: LineRef) -> LineClass {
        let segments = line.segments;
        if !self.lists {
            return LineClass::Plain { segments };
        }

        let Some(Segment::Plain(first)) = segments.first().copied() else {
            return LineClass::Plain { segments };
        };
        let Some(prefix) = Bullet::prefix_len(first.slice(s)) else {
            return LineClass::Plain { segments };
        };

        let mut content = Vec::with_capacity(segments.len());
        let rest = Span::new(first.start + prefix, first.end);
        if !rest.is_empty() {
            content.push(Segment::Plain(rest));
        }
        content.extend_from_slice(&segments[1..]);

        let has_content = content.iter().any(|seg| match seg {
            Segment::Plain(sp) => !sp.slice(s).trim().is_empty(),
            _ => true,
        });
        if !has_content {
            return LineClass::Plain { segments };
        }

        LineClass::Bullet { content }
    }
}
