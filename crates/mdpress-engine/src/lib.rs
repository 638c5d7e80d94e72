//! Core engine for mdpress: parses a constrained Markdown dialect into an
//! HTML render tree and assembles static pages from a template.
//!
//! The pipeline is pure and synchronous: raw document text is segmented
//! into blocks, each block is classified and converted into a node subtree,
//! and the resulting `div`-rooted tree renders to the HTML body fragment.
//! File handling and page assembly live in [`io`] and [`site`].

pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

// Re-export key types for easier usage
pub use html::{ConvertError, HtmlNode, RenderError, block_to_node, markdown_to_html, markdown_to_node};
pub use parsing::{BlockType, InlineKind, InlineRun, UnmatchedDelimiter, classify, segment, text_to_runs};
pub use site::{SiteError, apply_template, extract_title, generate_page, generate_pages};
