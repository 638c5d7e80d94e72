//! Inline span splitting: turning a run of raw text into an alternating
//! sequence of plain and styled runs.

pub mod patterns;
pub mod split;
pub mod types;

pub use split::{UnmatchedDelimiter, split_by_delimiter};
pub use types::{InlineKind, InlineRun};

/// Delimiter passes in their fixed order. Bold must run before italic and
/// code so that `**` is consumed before single-character delimiters get a
/// look at the text.
const DELIMITERS: [(&str, InlineKind); 3] = [
    ("**", InlineKind::Bold),
    ("_", InlineKind::Italic),
    ("`", InlineKind::Code),
];

/// Splits raw text into its full inline run sequence: the three delimiter
/// passes chained in order, then image extraction, then link extraction.
pub fn text_to_runs(text: &str) -> Result<Vec<InlineRun>, UnmatchedDelimiter> {
    let mut runs = vec![InlineRun::plain(text)];
    for (delimiter, kind) in DELIMITERS {
        runs = split_by_delimiter(runs, delimiter, kind)?;
    }
    let runs = patterns::split_images(runs);
    let runs = patterns::split_links(runs);
    Ok(runs)
}
