//! Document model.
//!
//! Transient values built fresh for every conversion: the frontmatter
//! metadata and the ordered list of classified blocks.

mod block;
mod document;

pub use block::*;
pub use document::*;
