use crate::models::{Block, ListItem};
use crate::parsing::{
    ParseOptions,
    inline::format_inline,
    opaque::OpaqueRegions,
    table::render_table,
};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    containers::NestingStack,
};

/// Line-driven state machine that assembles the block tree.
///
/// Holds the placeholder side tables for one document, the nesting stack,
/// and the two pending accumulators (table rows and indented code). A
/// parser is consumed by [`BlockParser::finish`] and never reused.
pub struct BlockParser {
    regions: OpaqueRegions,
    options: ParseOptions,
    stack: NestingStack,
    table: Vec<String>,
    indented_code: Vec<String>,
}

impl BlockParser {
    pub fn new(regions: OpaqueRegions, options: ParseOptions) -> Self {
        Self {
            regions,
            options,
            stack: NestingStack::new(),
            table: Vec::new(),
            indented_code: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        let class = MarkdownLineClassifier.classify(line);
        log::trace!("{class:?}");

        if !matches!(class, LineClass::TableRow) {
            self.flush_table();
        }
        if !matches!(class, LineClass::IndentedCode(_)) {
            self.flush_indented_code();
        }

        match class {
            LineClass::TableRow => self.table.push(line.to_string()),
            LineClass::ListItem {
                kind,
                indent,
                content,
            } => {
                let item = kind.block(ListItem::new(format_inline(content)));
                self.stack.push_item(indent, item);
            }
            LineClass::IndentedCode(code) => self.indented_code.push(code.to_string()),
            LineClass::Heading { level, content } => {
                self.stack
                    .push_block(Block::heading(level, format_inline(content)));
            }
            LineClass::Divider => self.stack.push_block(Block::Divider),
            LineClass::Quote(content) => {
                self.stack.push_block(Block::quote(format_inline(content)));
            }
            LineClass::Placeholder(placeholder) => {
                let block = self.regions.resolve(placeholder).unwrap_or_else(|| {
                    log::debug!("unresolved placeholder {placeholder:?}");
                    Block::paragraph(format_inline(line.trim()))
                });
                self.stack.push_block(block);
            }
            LineClass::Image { url, caption } => self.stack.push_block(Block::Image {
                url: url.to_string(),
                caption: caption.map(str::to_string),
            }),
            LineClass::Paragraph(text) => {
                self.stack.push_block(Block::paragraph(format_inline(text)));
            }
            LineClass::Blank => {}
        }
    }

    /// Flushes pending accumulators and returns the top-level blocks.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_table();
        self.flush_indented_code();
        self.stack.finish()
    }

    fn flush_table(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.table);
        self.stack.push_block(Block::equation(render_table(&lines)));
    }

    fn flush_indented_code(&mut self) {
        if self.indented_code.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.indented_code);
        self.stack.push_block(Block::code(
            self.options.default_code_language.clone(),
            lines.join("\n"),
        ));
    }
}
