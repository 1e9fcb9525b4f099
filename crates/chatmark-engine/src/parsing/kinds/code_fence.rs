/// Fenced code block type with owned delimiter constant.
///
/// A fence opens at the leftmost triple backtick and closes at the next
/// triple backtick, wherever it sits. Everything in between, newlines
/// included, is a raw zone.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Local offset of the closing fence for an opener at `open`, if any.
    pub fn find_close(s: &str, open: usize) -> Option<usize> {
        let from = open + Self::FENCE.len();
        s.get(from..)?.find(Self::FENCE).map(|off| from + off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_next_fence_after_opener() {
        assert_eq!(CodeFence::find_close("```a```", 0), Some(4));
    }

    #[test]
    fn empty_block_closes_immediately() {
        assert_eq!(CodeFence::find_close("``````", 0), Some(3));
    }

    #[test]
    fn no_close_for_lone_fence() {
        assert_eq!(CodeFence::find_close("```rust\nfn main() {}", 0), None);
    }
}
