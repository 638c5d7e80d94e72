use thiserror::Error;

use super::types::{InlineKind, InlineRun};

/// An opening delimiter without a closing partner.
///
/// Splitting a run on a delimiter must produce an odd number of parts; an
/// even count means a styled span never closed. The error carries the
/// delimiter and the full text of the offending run, and aborts the whole
/// conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unmatched delimiter {delimiter:?} in text {text:?}")]
pub struct UnmatchedDelimiter {
    pub delimiter: String,
    pub text: String,
}

/// Splits every `Plain` run on literal occurrences of `delimiter`, assigning
/// alternating kinds: even-indexed parts stay `Plain`, odd-indexed parts
/// become `kind`. Runs of other kinds pass through unchanged, in place.
///
/// Empty parts are kept, so `**bold**` splits into an empty plain run, a
/// bold run, and another empty plain run.
pub fn split_by_delimiter(
    runs: Vec<InlineRun>,
    delimiter: &str,
    kind: InlineKind,
) -> Result<Vec<InlineRun>, UnmatchedDelimiter> {
    let mut out = Vec::with_capacity(runs.len());
    for run in runs {
        if run.kind != InlineKind::Plain {
            out.push(run);
            continue;
        }
        split_run(&run.text, delimiter, kind, &mut out)?;
    }
    Ok(out)
}

fn split_run(
    text: &str,
    delimiter: &str,
    kind: InlineKind,
    out: &mut Vec<InlineRun>,
) -> Result<(), UnmatchedDelimiter> {
    let parts: Vec<&str> = text.split(delimiter).collect();
    if parts.len() % 2 == 0 {
        return Err(UnmatchedDelimiter {
            delimiter: delimiter.to_string(),
            text: text.to_string(),
        });
    }
    out.extend(parts.into_iter().enumerate().map(|(i, part)| {
        if i % 2 == 0 {
            InlineRun::plain(part)
        } else {
            InlineRun::styled(part, kind)
        }
    }));
    Ok(())
}
