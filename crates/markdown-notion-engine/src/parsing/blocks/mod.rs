//! # Block Parsing
//!
//! Two-phase, single-pass block parsing over placeholder-substituted text.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    using local facts only, rules tried in a fixed precedence order
//!
//! 2. **Block Construction** (`builder`): a `BlockParser` buffers table rows
//!    and indented code, resolves placeholders, and places blocks through
//!    the nesting stack
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types that own their syntax (list markers,
//!   headings, quotes, rules, images, table rows, indented code)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` per line
//! - **`containers`**: `NestingStack`, the list nesting frames
//! - **`builder`**: `BlockParser` state machine
//!
//! ## Key Invariants
//!
//! - Every line is classified; malformed syntax degrades to a paragraph
//! - List nesting mirrors source indentation; depth is unbounded
//! - Only list items ever have children

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;

pub use builder::BlockParser;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use containers::NestingStack;
