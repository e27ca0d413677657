//! Frontmatter normalization for Markdown documents
//!
//! A document may open with a block of `key: value` lines between two `---`
//! delimiters. The block is handled as opaque text lines: only the `title:`
//! key is ever inspected or rewritten, everything else is carried over
//! untouched.

mod merge;
mod quote;
mod split;
mod title;

pub use merge::{MergeOutcome, insert_title};
pub use quote::quote_title;
pub use split::split;
pub use title::{ResolvedTitle, TitleSource, resolve_title};

/// Frontmatter key the transforms look for, anchored at line start.
const TITLE_KEY: &str = "title:";
