use super::types::{Block, InlineNode};

/// Groups classified lines into blocks.
///
/// Consecutive bullet items accumulate into one open list run; a plain line
/// closes the run before it is emitted. A run still open at EOF is closed by
/// [`BlockBuilder::finish`].
pub struct BlockBuilder {
    list: Option<Vec<Vec<InlineNode>>>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: None,
            out: vec![],
        }
    }

    pub fn push_item(&mut self, content: Vec<InlineNode>) {
        self.list.get_or_insert_with(Vec::new).push(content);
    }

    pub fn push_line(&mut self, nodes: Vec<InlineNode>) {
        self.flush_list();
        self.out.push(Block::Line(nodes));
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn flush_list(&mut self) {
        if let Some(items) = self.list.take() {
            self.out.push(Block::List(items));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
