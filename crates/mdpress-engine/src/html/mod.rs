//! The HTML render tree and the block-to-node conversion that builds it
//! from classified blocks.

pub mod convert;
pub mod node;

pub use convert::{ConvertError, block_to_node, markdown_to_html, markdown_to_node};
pub use node::{HtmlNode, RenderError};
