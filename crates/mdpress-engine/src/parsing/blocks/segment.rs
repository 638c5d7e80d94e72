/// Splits a document into blocks on blank-line boundaries.
///
/// A line containing only whitespace counts as blank, and any run of blank
/// lines separates two blocks. Each block is trimmed of surrounding
/// whitespace and blocks that end up empty are dropped, so the output never
/// contains an empty block. Original order is preserved.
pub fn segment(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    for line in document.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut blocks);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    flush(&mut current, &mut blocks);
    blocks
}

fn flush(current: &mut String, blocks: &mut Vec<String>) {
    let chunk = std::mem::take(current);
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}
