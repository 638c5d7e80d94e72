//! The Markdown parsing pipeline: block segmentation and classification,
//! plus inline span splitting within a block's text.

pub mod blocks;
pub mod inline;

pub use blocks::{BlockType, classify, segment};
pub use inline::{InlineKind, InlineRun, UnmatchedDelimiter, text_to_runs};
