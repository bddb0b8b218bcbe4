pub mod block_quote;
pub mod heading;
pub mod image;
pub mod indented_code;
pub mod list_item;
pub mod table_row;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use image::Image;
pub use indented_code::IndentedCode;
pub use list_item::{ListItem, ListKind, ListMarker};
pub use table_row::TableRow;
pub use thematic_break::ThematicBreak;
