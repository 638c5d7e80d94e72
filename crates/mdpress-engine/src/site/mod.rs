use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::html::convert::{ConvertError, markdown_to_html};
use crate::io::{self, IoError};

/// Template placeholder replaced with the page title.
pub const TITLE_SLOT: &str = "{{ Title }}";
/// Template placeholder replaced with the rendered HTML body.
pub const CONTENT_SLOT: &str = "{{ Content }}";

const H1_MARKER: &str = "# ";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no first-level heading found in {document}")]
    MissingTitle { document: String },
    #[error("content path is not relative to the content root: {0}")]
    InvalidContentPath(PathBuf),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Reads the page title from the first line starting with `"# "`.
///
/// Everything after the marker is the title, exactly as written: embedded
/// `#` characters and surrounding spaces are kept.
pub fn extract_title(document: &str) -> Result<String, SiteError> {
    document
        .split('\n')
        .find_map(|line| line.strip_prefix(H1_MARKER))
        .map(str::to_string)
        .ok_or_else(|| SiteError::MissingTitle {
            document: document.to_string(),
        })
}

/// Replaces every title and content placeholder in the template text.
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_SLOT, title)
        .replace(CONTENT_SLOT, content)
}

/// Generates one HTML page: read the markdown source, convert it to an HTML
/// body, extract the title, fill the template, and write the page into the
/// mirrored location under the output root.
pub fn generate_page(
    source: &RelativePath,
    content_root: &Path,
    template: &str,
    output_root: &Path,
) -> Result<(), SiteError> {
    let markdown = io::read_file(source, content_root)?;
    let body = markdown_to_html(&markdown)?;
    let title = extract_title(&markdown)?;
    let page = apply_template(template, &title, &body);

    let dest = html_sibling(source);
    println!("Generating {source} -> {dest}");
    io::write_file(&dest, output_root, &page)?;
    Ok(())
}

/// The output path for a markdown source: same location, `.html` extension.
fn html_sibling(source: &RelativePath) -> RelativePathBuf {
    let stem = source
        .as_str()
        .strip_suffix(".md")
        .unwrap_or_else(|| source.as_str());
    RelativePathBuf::from(format!("{stem}.html"))
}

/// Walks the content tree and generates a mirrored `.html` page for every
/// markdown file. Any failing page aborts the whole build.
pub fn generate_pages(
    content_root: &Path,
    template: &str,
    output_root: &Path,
) -> Result<(), SiteError> {
    for path in io::scan_markdown_files(content_root)? {
        let source = relative_to(&path, content_root)?;
        generate_page(&source, content_root, template, output_root)?;
    }
    Ok(())
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, SiteError> {
    let stripped = path.strip_prefix(root).unwrap_or(path);
    RelativePathBuf::from_path(stripped)
        .map_err(|_| SiteError::InvalidContentPath(path.to_path_buf()))
}
