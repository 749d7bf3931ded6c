use miette::SourceSpan;

/// An entry line taken from a C enum block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// C identifier, e.g. `BLOCK_CACHE_MISS`
    pub name: String,
    /// Explicit value expression, `None` when the value follows the counter
    pub value: Option<String>,
    /// 1-based line number in the header
    pub line: usize,
    /// Span of the trimmed line in the header
    pub span: SourceSpan,
}

/// Split an entry line into its name and optional value expression.
///
/// Everything from the first comma on is dropped. Returns `None` when more
/// than one `=` remains.
///
/// ```
/// use statgen_codegen::extract::split_entry;
///
/// assert_eq!(split_entry("  BLOCK_CACHE_HIT,"), Some(("BLOCK_CACHE_HIT", None)));
/// assert_eq!(split_entry("  DB_GET = 0,"), Some(("DB_GET", Some("0"))));
/// assert_eq!(split_entry("  A = B = 1,"), None);
/// ```
pub fn split_entry(line: &str) -> Option<(&str, Option<&str>)> {
    let head = line.split(',').next().unwrap_or_default();
    let mut parts = head.split('=');
    let name = parts.next().unwrap_or_default().trim();
    match (parts.next(), parts.next()) {
        (None, _) => Some((name, None)),
        (Some(value), None) => Some((name, Some(value.trim()))),
        (Some(_), Some(_)) => None,
    }
}
