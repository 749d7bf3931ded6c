//! Validation of a parsed task table.

use std::collections::HashMap;

use miette::SourceSpan;
use statgen_core::{is_c_identifier, is_rust_keyword};

use super::Manifest;
use crate::{Result, error::SourceContext};

const REPR_TYPES: &[&str] = &[
    "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize",
];

pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.tasks.is_empty() {
        return Err(ctx.validation_error("task table defines no tasks", None));
    }

    let repr = manifest.output.repr.as_str();
    if !REPR_TYPES.contains(&repr) {
        return Err(ctx.validation_error(
            format!("'{repr}' is not a primitive integer type"),
            find_value_span(ctx.src(), "repr", repr, 0),
        ));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for task in &manifest.tasks {
        let name = task.name.as_str();
        let occurrence = seen.get(name).copied().unwrap_or(0);
        let span = find_value_span(ctx.src(), "name", name, occurrence);

        if occurrence > 0 {
            return Err(ctx.duplicate_task_error(
                name,
                find_value_span(ctx.src(), "name", name, 0),
                span,
            ));
        }
        seen.insert(name, occurrence + 1);

        if is_rust_keyword(name) {
            return Err(ctx.reserved_keyword_error(name, span));
        }
        if !is_c_identifier(name) {
            return Err(ctx.invalid_identifier_error(name, "task", span));
        }
        if task.sentinel_suffix.is_empty() {
            return Err(ctx.validation_error(
                format!("task '{name}' has an empty sentinel suffix"),
                span,
            ));
        }
        if task.sources.is_empty() {
            return Err(ctx.validation_error(format!("task '{name}' has no sources"), span));
        }

        for source in &task.sources {
            if !is_c_identifier(&source.enum_name) {
                return Err(ctx.invalid_identifier_error(
                    &source.enum_name,
                    "source enum",
                    find_value_span(ctx.src(), "enum", &source.enum_name, 0),
                ));
            }
        }
    }

    Ok(())
}

/// Find the span of the `nth` string value assigned to `key` in the TOML
/// source, e.g. `Tickers` in `enum = "Tickers"`.
fn find_value_span(src: &str, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    ['"', '\''].into_iter().find_map(|quote| {
        let pattern = format!("{key} = {quote}{value}{quote}");
        src.match_indices(&pattern).nth(nth).map(|(pos, _)| {
            // Skip `key = "`
            let start = pos + key.len() + 4;
            SourceSpan::from((start, value.len()))
        })
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    fn task(name: &str, body: &str) -> String {
        format!("[[tasks]]\nname = \"{name}\"\n{body}\n")
    }

    const SOURCE: &str = "[[tasks.sources]]\npath = \"a.h\"\nenum = \"Tickers\"";

    #[test]
    fn test_no_tasks() {
        let err = Manifest::from_str("").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_duplicate_task() {
        let src = format!("{}{}", task("Stats", SOURCE), task("Stats", SOURCE));
        let err = Manifest::from_str(&src).unwrap_err();
        match *err {
            Error::DuplicateTask {
                name,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(name, "Stats");
                assert_eq!(first_span.unwrap().offset(), 18);
                assert!(second_span.unwrap().offset() > 18);
            }
            other => panic!("expected duplicate task error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_sources() {
        let err = Manifest::from_str(&task("Stats", "")).unwrap_err();
        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "task 'Stats' has no sources");
                assert_eq!(span.unwrap().offset(), 18);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_reserved_task_name() {
        let err = Manifest::from_str(&task("Self", SOURCE)).unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_invalid_task_name() {
        let err = Manifest::from_str(&task("Ticker-Type", SOURCE)).unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_invalid_source_enum() {
        let src = task(
            "Stats",
            "[[tasks.sources]]\npath = \"a.h\"\nenum = \"enum Tickers\"",
        );
        let err = Manifest::from_str(&src).unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, context, .. } => {
                assert_eq!(name, "enum Tickers");
                assert_eq!(context, "source enum");
            }
            other => panic!("expected invalid identifier error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_repr() {
        let src = format!("[output]\nrepr = \"f32\"\n{}", task("Stats", SOURCE));
        let err = Manifest::from_str(&src).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_find_value_span() {
        let src = "name = \"A\"\nname = 'A'";
        let first = find_value_span(src, "name", "A", 0).unwrap();
        assert_eq!(first.offset(), 8);
        assert_eq!(first.len(), 1);
        assert!(find_value_span(src, "name", "B", 0).is_none());
    }
}
