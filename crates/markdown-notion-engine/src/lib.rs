//! Converts Markdown into the nested block tree of a block-based document
//! API, and encodes that tree (plus page properties) as the API's JSON.
//!
//! ```
//! use markdown_notion_engine::{Block, HeadingLevel, TextRun, parse_markdown};
//!
//! let blocks = parse_markdown("# Title");
//! assert_eq!(
//!     blocks,
//!     vec![Block::heading(HeadingLevel::H1, vec![TextRun::plain("Title")])]
//! );
//! ```

pub mod models;
pub mod notion;
pub mod parsing;
pub mod properties;

// Re-export key types for easier usage
pub use models::*;
pub use notion::{EncodeOptions, Encoder};
pub use parsing::{ParseOptions, parse_markdown, parse_markdown_with};
pub use properties::{Person, PropertyMapper, PropertyValue};
