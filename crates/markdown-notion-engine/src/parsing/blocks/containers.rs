use crate::models::Block;

/// One level of list nesting.
///
/// A frame owns the items placed at its level. Items are handed to the
/// parent item's children when the frame is popped, so no frame ever holds
/// a reference into another.
#[derive(Debug, Default)]
struct Frame {
    /// Leading spaces of the items at this level.
    indent: usize,
    items: Vec<Block>,
}

impl Frame {
    fn continues_list(&self) -> bool {
        self.items.last().is_some_and(|b| b.list_item().is_some())
    }
}

/// The nesting context stack.
///
/// The bottom frame is the document's top level and is never popped; every
/// frame above it belongs to the last item of the frame beneath.
#[derive(Debug)]
pub struct NestingStack {
    frames: Vec<Frame>,
}

impl NestingStack {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
        }
    }

    /// Current nesting depth; 0 at the top level.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Places a list item according to its indentation.
    ///
    /// Deeper frames are closed first. An item indented past the current
    /// level becomes a child of the last item there, opening exactly one new
    /// level however large the jump. With no item to attach to, it is a
    /// sibling instead.
    pub fn push_item(&mut self, indent: usize, item: Block) {
        while self.depth() > 0 && self.top().indent > indent {
            self.pop_frame();
        }

        let top = self.top_mut();
        let continues = top.continues_list();
        if continues && indent > top.indent {
            self.frames.push(Frame {
                indent,
                items: vec![item],
            });
        } else {
            if !continues || indent < top.indent {
                top.indent = indent;
            }
            top.items.push(item);
        }
    }

    /// Appends a non-list block at the top level, closing any open list.
    pub fn push_block(&mut self, block: Block) {
        self.close_all();
        self.top_mut().items.push(block);
    }

    /// Closes every open level and returns the top-level blocks.
    pub fn finish(mut self) -> Vec<Block> {
        self.close_all();
        self.frames.pop().map(|f| f.items).unwrap_or_default()
    }

    fn close_all(&mut self) {
        while self.depth() > 0 {
            self.pop_frame();
        }
    }

    fn pop_frame(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let parent = self.top_mut();
        match parent.items.last_mut().and_then(Block::list_item_mut) {
            Some(item) => item.children.extend(frame.items),
            None => parent.items.extend(frame.items),
        }
    }

    fn top(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

impl Default for NestingStack {
    fn default() -> Self {
        Self::new()
    }
}
