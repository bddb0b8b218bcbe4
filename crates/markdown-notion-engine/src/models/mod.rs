pub mod block;
pub mod rich_text;

pub use block::{Block, HeadingLevel, ListItem};
pub use rich_text::{Annotations, TextRun};
