/// The classified type of one block, derived purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    /// Heading with its level, 1 through 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

pub const MAX_HEADING_LEVEL: usize = 6;

/// The 3-backtick marker opening and closing a code block.
pub const FENCE: &str = "```";

/// Dash-space prefix required on every unordered list line.
pub const UNORDERED_MARKER: &str = "- ";

/// Classifies a block by its leading character, then verifies the full
/// grammar for the candidate type. A block that fails the candidate's
/// grammar is a paragraph; classification never errors.
///
/// Pure function over the block text alone, with no cross-block state.
pub fn classify(block: &str) -> BlockType {
    let Some(first) = block.chars().next() else {
        return BlockType::Paragraph;
    };
    match first {
        '#' => match heading_level(block) {
            Some(level) => BlockType::Heading(level),
            None => BlockType::Paragraph,
        },
        '`' if is_code(block) => BlockType::Code,
        '>' if is_quote(block) => BlockType::Quote,
        '-' if is_unordered_list(block) => BlockType::UnorderedList,
        '1' if is_ordered_list(block) => BlockType::OrderedList,
        _ => BlockType::Paragraph,
    }
}

/// A heading is a single line of 1 to 6 `#` characters, one whitespace
/// character, and a non-whitespace character right after. Counting stops at
/// the end of the block, so short all-hash blocks are paragraphs.
fn heading_level(block: &str) -> Option<u8> {
    if block.contains('\n') {
        return None;
    }
    let mut chars = block.chars().peekable();
    let mut level = 0;
    while level < MAX_HEADING_LEVEL && chars.peek() == Some(&'#') {
        chars.next();
        level += 1;
    }
    match (chars.next(), chars.next()) {
        (Some(space), Some(text)) if space.is_whitespace() && !text.is_whitespace() => {
            Some(level as u8)
        }
        _ => None,
    }
}

/// Code blocks open and close with a 3-backtick fence, at least 6
/// characters in total.
fn is_code(block: &str) -> bool {
    block.len() >= 6 && block.starts_with(FENCE) && block.ends_with(FENCE)
}

/// Every line must start with `>`. A lone `>` with no content still counts.
fn is_quote(block: &str) -> bool {
    block.split('\n').all(|line| line.starts_with('>'))
}

fn is_unordered_list(block: &str) -> bool {
    block.split('\n').all(|line| line.starts_with(UNORDERED_MARKER))
}

/// Line *i* (1-indexed) must start with `"{i}. "`: strictly consecutive
/// numbering from 1, so gaps, repeats and wrong start numbers all demote
/// the block to a paragraph.
fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(idx, line)| line.starts_with(&format!("{}. ", idx + 1)))
}
