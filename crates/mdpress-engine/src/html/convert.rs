use thiserror::Error;

use crate::parsing::blocks::classify::{BlockType, FENCE, UNORDERED_MARKER, classify};
use crate::parsing::blocks::segment;
use crate::parsing::inline::{InlineKind, InlineRun, UnmatchedDelimiter, text_to_runs};

use super::node::{HtmlNode, RenderError};

/// The ordered list marker is cut at a fixed width; the per-item trim
/// absorbs the difference for wider markers.
const ORDERED_MARKER_LEN: usize = "1. ".len();

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(transparent)]
    UnmatchedDelimiter(#[from] UnmatchedDelimiter),
    #[error("heading marker without text in block {block:?}")]
    InvalidHeading { block: String },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a whole document into its render tree: a `div` parent whose
/// children are the per-block nodes in document order.
///
/// Any failing block aborts the whole conversion; there is no partial
/// result.
pub fn markdown_to_node(document: &str) -> Result<HtmlNode, ConvertError> {
    let children = segment(document)
        .iter()
        .map(|block| block_to_node(block))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Parses and renders in one step, producing the HTML body fragment.
pub fn markdown_to_html(document: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_node(document)?.render()?)
}

/// Builds the HTML subtree for a single block, dispatching on its
/// classified type. A block that failed a more specific grammar converts as
/// a plain paragraph.
pub fn block_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    match classify(block) {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading(level) => heading_to_node(block, level),
        BlockType::Code => Ok(code_to_node(block)),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => list_to_node(block, "ul", UNORDERED_MARKER.len()),
        BlockType::OrderedList => list_to_node(block, "ol", ORDERED_MARKER_LEN),
    }
}

/// Inline-splits `text` and maps each run onto the leaf the renderer emits
/// for it.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(text_to_runs(text)?.into_iter().map(run_to_node).collect())
}

fn run_to_node(run: InlineRun) -> HtmlNode {
    match run.kind {
        InlineKind::Plain => HtmlNode::text(run.text),
        InlineKind::Bold => HtmlNode::leaf("b", run.text),
        InlineKind::Italic => HtmlNode::leaf("i", run.text),
        InlineKind::Code => HtmlNode::leaf("code", run.text),
        InlineKind::Link => HtmlNode::leaf_with_attrs(
            "a",
            run.text,
            vec![("href".to_string(), run.url.unwrap_or_default())],
        ),
        InlineKind::Image => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), run.url.unwrap_or_default()),
                ("alt".to_string(), run.text),
            ],
        ),
    }
}

/// Lines joined with a single space, then inline-split.
fn paragraph_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode, ConvertError> {
    // the marker run plus the single whitespace character after it
    let mut chars = block.chars();
    for _ in 0..=level {
        chars.next();
    }
    let text = chars.as_str();
    if text.is_empty() {
        return Err(ConvertError::InvalidHeading {
            block: block.to_string(),
        });
    }
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

/// Strips the opening fence with the newline right after it and the closing
/// fence; what remains is verbatim code, with no inline splitting.
fn code_to_node(block: &str) -> HtmlNode {
    // the classifier guarantees both fences and at least 6 characters, but
    // the fences overlap in degenerate all-backtick blocks
    let inner = block
        .get(FENCE.len()..block.len() - FENCE.len())
        .unwrap_or("");
    let mut chars = inner.chars();
    chars.next();
    let code = HtmlNode::parent("code", vec![HtmlNode::text(chars.as_str())]);
    HtmlNode::parent("pre", vec![code])
}

/// Each line loses its leading `>` run and surrounding whitespace; the
/// results are joined with single spaces into one inline-split body.
fn quote_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let content = block
        .split('\n')
        .map(|line| line.trim_start_matches('>').trim())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&content)?))
}

fn list_to_node(block: &str, tag: &str, marker_len: usize) -> Result<HtmlNode, ConvertError> {
    let items = block
        .split('\n')
        .map(|line| {
            let text = line.get(marker_len..).unwrap_or_default().trim();
            Ok(HtmlNode::parent("li", text_to_children(text)?))
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;
    Ok(HtmlNode::parent(tag, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_block(block: &str) -> String {
        block_to_node(block).unwrap().render().unwrap()
    }

    #[test]
    fn heading_levels_map_to_their_tags() {
        assert_eq!(render_block("# Hello"), "<h1>Hello</h1>");
        for level in 1..=6 {
            let block = format!("{} Heading {level}", "#".repeat(level));
            assert_eq!(
                render_block(&block),
                format!("<h{level}>Heading {level}</h{level}>")
            );
        }
    }

    #[test]
    fn failed_heading_grammar_renders_as_paragraph() {
        assert_eq!(render_block("#NoSpace"), "<p>#NoSpace</p>");
        assert_eq!(
            render_block("####### Too many hashes"),
            "<p>####### Too many hashes</p>"
        );
    }

    #[test]
    fn code_block_keeps_content_verbatim() {
        assert_eq!(
            render_block("```\ncode\n```"),
            "<pre><code>code\n</code></pre>"
        );
        assert_eq!(
            render_block("```\nline1\nline2\n```"),
            "<pre><code>line1\nline2\n</code></pre>"
        );
    }

    #[test]
    fn code_block_suppresses_inline_splitting() {
        assert_eq!(
            render_block("```\nnot **bold** or _italic_\n```"),
            "<pre><code>not **bold** or _italic_\n</code></pre>"
        );
    }

    #[test]
    fn empty_code_block_renders_empty_element() {
        assert_eq!(render_block("```\n```"), "<pre><code></code></pre>");
        assert_eq!(render_block("``````"), "<pre><code></code></pre>");
    }

    #[test]
    fn quote_lines_join_into_one_body() {
        assert_eq!(
            render_block("> Line 1\n> Line 2"),
            "<blockquote>Line 1 Line 2</blockquote>"
        );
        assert_eq!(render_block(">"), "<blockquote></blockquote>");
    }

    #[test]
    fn unordered_list_items_become_li_nodes() {
        assert_eq!(render_block("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(
            render_block("-   spaced out"),
            "<ul><li>spaced out</li></ul>"
        );
    }

    #[test]
    fn ordered_list_items_become_li_nodes() {
        assert_eq!(render_block("1. a\n2. b"), "<ol><li>a</li><li>b</li></ol>");
        assert_eq!(render_block("1.   padded"), "<ol><li>padded</li></ol>");
    }

    #[test]
    fn list_items_are_inline_split() {
        assert_eq!(
            render_block("- plain\n- has **bold** inside"),
            "<ul><li>plain</li><li>has <b>bold</b> inside</li></ul>"
        );
    }

    #[test]
    fn paragraph_joins_lines_with_spaces() {
        assert_eq!(
            render_block("Line 1\nLine 2\nLine 3"),
            "<p>Line 1 Line 2 Line 3</p>"
        );
    }

    #[test]
    fn paragraph_without_delimiters_round_trips() {
        let block = "no markers here\njust text";
        assert_eq!(render_block(block), "<p>no markers here just text</p>");
    }

    #[test]
    fn inline_styles_render_inside_paragraph() {
        assert_eq!(
            render_block("This is **bold** and _italic_"),
            "<p>This is <b>bold</b> and <i>italic</i></p>"
        );
    }

    #[test]
    fn links_and_images_render_with_attributes() {
        assert_eq!(
            render_block("see [docs](https://example.com)"),
            "<p>see <a href=\"https://example.com\">docs</a></p>"
        );
        assert_eq!(
            render_block("![alt](http://x)"),
            "<p><img src=\"http://x\" alt=\"alt\"></p>"
        );
    }

    #[test]
    fn unmatched_delimiter_aborts_conversion() {
        let err = block_to_node("an **unclosed delimiter").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnmatchedDelimiter(UnmatchedDelimiter {
                delimiter: "**".to_string(),
                text: "an **unclosed delimiter".to_string(),
            })
        );
    }

    #[test]
    fn document_maps_to_div_of_blocks() {
        let document = "# Title\n\nA paragraph.\n\n- one\n- two";
        assert_eq!(
            markdown_to_html(document).unwrap(),
            "<div><h1>Title</h1><p>A paragraph.</p><ul><li>one</li><li>two</li></ul></div>"
        );
    }

    #[test]
    fn empty_document_is_an_empty_div() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
    }
}
