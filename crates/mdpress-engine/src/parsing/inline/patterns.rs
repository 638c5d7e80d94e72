use std::sync::LazyLock;

use regex::Regex;

use super::types::{InlineKind, InlineRun};

/// `![alt](url)` with non-empty alt text and url.
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").expect("image pattern compiles"));

/// `[alt](url)` with non-empty alt text and url. The regex crate has no
/// lookbehind, so the "not preceded by `!`" constraint that separates links
/// from images is enforced by [`first_link`] on each candidate match.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern compiles"));

/// One pattern occurrence inside a run's text.
#[derive(Debug, Clone, Copy)]
struct PatternMatch<'t> {
    /// Byte range of the whole match, including the `!` prefix for images.
    start: usize,
    end: usize,
    alt: &'t str,
    url: &'t str,
}

fn first_image(text: &str) -> Option<PatternMatch<'_>> {
    let caps = IMAGE.captures(text)?;
    let whole = caps.get(0)?;
    Some(PatternMatch {
        start: whole.start(),
        end: whole.end(),
        alt: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}

fn first_link(text: &str) -> Option<PatternMatch<'_>> {
    for caps in LINK.captures_iter(text) {
        let whole = caps.get(0)?;
        // an immediately preceding `!` makes this an image, not a link
        if whole.start() > 0 && text.as_bytes()[whole.start() - 1] == b'!' {
            continue;
        }
        return Some(PatternMatch {
            start: whole.start(),
            end: whole.end(),
            alt: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        });
    }
    None
}

/// Extracts every `![alt](url)` image from the `Plain` runs in `runs`.
pub fn split_images(runs: Vec<InlineRun>) -> Vec<InlineRun> {
    split_by_pattern(runs, first_image, InlineKind::Image)
}

/// Extracts every `[alt](url)` link from the `Plain` runs in `runs`.
pub fn split_links(runs: Vec<InlineRun>) -> Vec<InlineRun> {
    split_by_pattern(runs, first_link, InlineKind::Link)
}

fn split_by_pattern<F>(runs: Vec<InlineRun>, find: F, kind: InlineKind) -> Vec<InlineRun>
where
    F: for<'t> Fn(&'t str) -> Option<PatternMatch<'t>>,
{
    let mut out = Vec::with_capacity(runs.len());
    for run in runs {
        if run.kind != InlineKind::Plain {
            out.push(run);
            continue;
        }
        split_plain_run(run, &find, kind, &mut out);
    }
    out
}

/// Scans one plain run to exhaustion, emitting a head run for the text
/// before each match (only when non-empty), one `kind` run per match, and a
/// trailing plain run for any leftover text. A run with no matches at all
/// passes through unchanged.
fn split_plain_run<F>(run: InlineRun, find: &F, kind: InlineKind, out: &mut Vec<InlineRun>)
where
    F: for<'t> Fn(&'t str) -> Option<PatternMatch<'t>>,
{
    if find(&run.text).is_none() {
        out.push(run);
        return;
    }
    let mut rest = run.text.as_str();
    while let Some(m) = find(rest) {
        let head = &rest[..m.start];
        if !head.is_empty() {
            out.push(InlineRun::plain(head));
        }
        out.push(InlineRun::linked(m.alt, kind, m.url));
        rest = &rest[m.end..];
    }
    if !rest.is_empty() {
        out.push(InlineRun::plain(rest));
    }
}
