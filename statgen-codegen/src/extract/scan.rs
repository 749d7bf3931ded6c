use miette::SourceSpan;
use tracing::trace;

use super::{LineRules, RawEntry, split_entry};
use crate::{HeaderSource, Result};

/// Collect the entry lines of one enum block, in declaration order.
///
/// Scanning stops at the closing `};`; anything after it is never looked at.
pub fn scan_enum(header: &HeaderSource, rules: &LineRules<'_>) -> Result<Vec<RawEntry>> {
    let mut begin: Option<SourceSpan> = None;
    let mut entries = Vec::new();
    let mut offset = 0;

    for (index, raw) in header.content().split_inclusive('\n').enumerate() {
        let line_offset = offset;
        offset += raw.len();
        let line = raw.trim_end_matches(['\n', '\r']);

        if begin.is_none() {
            if rules.is_begin(line) {
                begin = Some(line_span(line, line_offset));
            }
            continue;
        }

        if rules.is_end(line) {
            return Ok(entries);
        }
        if !rules.is_entry(line) {
            trace!(line = index + 1, "skipping non-entry line");
            continue;
        }

        let span = line_span(line, line_offset);
        let (name, value) =
            split_entry(line).ok_or_else(|| header.malformed_entry_error(line.trim(), span))?;
        entries.push(RawEntry {
            name: name.to_string(),
            value: value.map(String::from),
            line: index + 1,
            span,
        });
    }

    match begin {
        Some(span) => Err(header.unterminated_enum_error(rules.enum_name(), span)),
        None => Err(header.missing_enum_error(rules.enum_name())),
    }
}

/// Span of a line without its surrounding whitespace.
fn line_span(line: &str, line_offset: usize) -> SourceSpan {
    let leading = line.len() - line.trim_start().len();
    (line_offset + leading, line.trim().len()).into()
}
