use indexmap::IndexMap;
use statgen_core::to_pascal_case;

use super::RawEntry;
use crate::{HeaderSource, Result};

/// An entry with its final Rust name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Name in the header, e.g. `BLOCK_CACHE_MISS`
    pub source_name: String,
    /// Variant name, e.g. `BlockCacheMiss`
    pub name: String,
    pub value: i64,
}

/// Value resolution state shared by all sources of one task.
///
/// The counter holds the value of the next implicit entry, or `None` once the
/// previous entry took the largest `i64`. Sentinel entries
/// (names ending in the sentinel suffix) are never emitted; their value is
/// recorded so later entries can refer to them by name.
#[derive(Debug, Clone)]
pub struct TaskState<'a> {
    sentinel_suffix: &'a str,
    counter: Option<i64>,
    variables: IndexMap<String, i64>,
}

impl<'a> TaskState<'a> {
    pub fn new(sentinel_suffix: &'a str) -> Self {
        Self {
            sentinel_suffix,
            counter: Some(0),
            variables: IndexMap::new(),
        }
    }

    /// Value of the next implicit entry.
    pub fn counter(&self) -> Option<i64> {
        self.counter
    }

    /// Sentinel values recorded so far, in declaration order.
    pub fn variables(&self) -> &IndexMap<String, i64> {
        &self.variables
    }

    /// Resolve one entry. Returns `None` for sentinels.
    pub fn take(
        &mut self,
        entry: &RawEntry,
        header: &HeaderSource,
    ) -> Result<Option<ResolvedEntry>> {
        let value = match entry.value.as_deref() {
            None => self
                .counter
                .ok_or_else(|| header.value_overflow_error(&entry.name, entry.span))?,
            Some(expr) => {
                let value = match self.variables.get(expr) {
                    Some(value) => *value,
                    None => match parse_int(expr) {
                        Some(IntLiteral::Value(value)) => value,
                        Some(IntLiteral::OutOfRange) => {
                            return Err(header.literal_out_of_range_error(
                                &entry.name,
                                expr,
                                entry.span,
                            ));
                        }
                        None => {
                            return Err(header.unresolved_value_error(
                                &entry.name,
                                expr,
                                self.sentinel_suffix,
                                entry.span,
                            ));
                        }
                    },
                };
                self.counter = Some(value);
                value
            }
        };

        if entry.name.ends_with(self.sentinel_suffix) {
            self.variables.insert(entry.name.clone(), value);
            return Ok(None);
        }

        self.counter = value.checked_add(1);
        Ok(Some(ResolvedEntry {
            source_name: entry.name.clone(),
            name: to_pascal_case(&entry.name),
            value,
        }))
    }
}

/// An integer literal found in a value expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntLiteral {
    Value(i64),
    /// Well-formed, but outside the `i64` range
    OutOfRange,
}

/// Parse a C integer literal: decimal or `0x` hex, optionally negative, with
/// `u`/`l` suffixes ignored. Returns `None` if `expr` is not a literal.
pub fn parse_int(expr: &str) -> Option<IntLiteral> {
    let expr = expr.trim();
    let (negative, digits) = match expr.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, expr),
    };
    let digits = digits.trim_end_matches(['u', 'U', 'l', 'L']);
    let hex = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"));
    let (digits, radix) = match hex {
        Some(hex) => (hex, 16),
        None => (digits, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let Ok(magnitude) = u64::from_str_radix(digits, radix) else {
        return Some(IntLiteral::OutOfRange);
    };
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    Some(i64::try_from(value).map_or(IntLiteral::OutOfRange, IntLiteral::Value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn entry(name: &str, value: Option<&str>) -> RawEntry {
        RawEntry {
            name: name.to_string(),
            value: value.map(String::from),
            line: 1,
            span: (0, name.len()).into(),
        }
    }

    fn header() -> HeaderSource {
        HeaderSource::new("statistics.h", "enum Tickers {\n};\n")
    }

    fn pairs(items: &[(&str, i64)]) -> Vec<(String, i64)> {
        items.iter().map(|(n, v)| (n.to_string(), *v)).collect()
    }

    fn values(state: &mut TaskState, entries: &[RawEntry]) -> Vec<(String, i64)> {
        let header = header();
        entries
            .iter()
            .filter_map(|e| state.take(e, &header).unwrap())
            .map(|e| (e.name, e.value))
            .collect()
    }

    #[test]
    fn test_auto_increment() {
        let mut state = TaskState::new("ENUM_MAX");
        let got = values(
            &mut state,
            &[entry("A_ONE", None), entry("B_TWO", None), entry("C", None)],
        );
        assert_eq!(got, pairs(&[("AOne", 0), ("BTwo", 1), ("C", 2)]));
    }

    #[test]
    fn test_explicit_value_resumes_counter() {
        let mut state = TaskState::new("ENUM_MAX");
        let got = values(
            &mut state,
            &[entry("A", Some("10")), entry("B", None), entry("C", None)],
        );
        assert_eq!(got, pairs(&[("A", 10), ("B", 11), ("C", 12)]));
        assert_eq!(state.counter(), Some(13));
    }

    #[test]
    fn test_sentinel_recorded_not_emitted() {
        let mut state = TaskState::new("ENUM_MAX");
        let got = values(
            &mut state,
            &[
                entry("BLOCK_CACHE_MISS", Some("0")),
                entry("BLOCK_CACHE_HIT", None),
                entry("TICKER_ENUM_MAX", None),
            ],
        );
        assert_eq!(got, pairs(&[("BlockCacheMiss", 0), ("BlockCacheHit", 1)]));
        assert_eq!(state.variables().get("TICKER_ENUM_MAX"), Some(&2));
        // Sentinels do not advance the counter
        assert_eq!(state.counter(), Some(2));
    }

    #[test]
    fn test_sentinel_reference() {
        let mut state = TaskState::new("ENUM_MAX");
        let got = values(
            &mut state,
            &[
                entry("A", None),
                entry("TICKER_ENUM_MAX", None),
                entry("TITAN_NUM_GET", Some("TICKER_ENUM_MAX")),
                entry("TITAN_NUM_SEEK", None),
            ],
        );
        assert_eq!(
            got,
            pairs(&[("A", 0), ("TitanNumGet", 1), ("TitanNumSeek", 2)])
        );
    }

    #[test]
    fn test_unresolved_value() {
        let mut state = TaskState::new("ENUM_MAX");
        let err = state
            .take(&entry("TITAN_NUM_GET", Some("UNKNOWN_MAX")), &header())
            .unwrap_err();
        match *err {
            Error::UnresolvedValue { name, expr, .. } => {
                assert_eq!(name, "TITAN_NUM_GET");
                assert_eq!(expr, "UNKNOWN_MAX");
            }
            other => panic!("expected unresolved value, got {other:?}"),
        }
    }

    #[test]
    fn test_largest_value_is_last() {
        let mut state = TaskState::new("ENUM_MAX");
        let got = values(&mut state, &[entry("A", Some("9223372036854775807"))]);
        assert_eq!(got, pairs(&[("A", i64::MAX)]));
        assert_eq!(state.counter(), None);
    }

    #[test]
    fn test_implicit_value_after_largest_overflows() {
        let mut state = TaskState::new("ENUM_MAX");
        let header = header();
        state
            .take(&entry("A", Some("0x7FFFFFFFFFFFFFFF")), &header)
            .unwrap();
        let err = state.take(&entry("B", None), &header).unwrap_err();
        match *err {
            Error::ValueOverflow { name, .. } => assert_eq!(name, "B"),
            other => panic!("expected value overflow, got {other:?}"),
        }

        // An explicit value starts counting again
        let got = values(&mut state, &[entry("C", Some("3")), entry("D", None)]);
        assert_eq!(got, pairs(&[("C", 3), ("D", 4)]));
    }

    #[test]
    fn test_literal_out_of_range() {
        let mut state = TaskState::new("ENUM_MAX");
        let err = state
            .take(&entry("A", Some("0xFFFFFFFFFFFFFFFF")), &header())
            .unwrap_err();
        match *err {
            Error::LiteralOutOfRange { name, expr, .. } => {
                assert_eq!(name, "A");
                assert_eq!(expr, "0xFFFFFFFFFFFFFFFF");
            }
            other => panic!("expected literal out of range, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_int() {
        use IntLiteral::{OutOfRange, Value};

        assert_eq!(parse_int("0"), Some(Value(0)));
        assert_eq!(parse_int(" 42 "), Some(Value(42)));
        assert_eq!(parse_int("0x1F"), Some(Value(31)));
        assert_eq!(parse_int("0X10"), Some(Value(16)));
        assert_eq!(parse_int("-1"), Some(Value(-1)));
        assert_eq!(parse_int("7u"), Some(Value(7)));
        assert_eq!(parse_int("100ULL"), Some(Value(100)));
        assert_eq!(parse_int("9223372036854775807"), Some(Value(i64::MAX)));
        assert_eq!(parse_int("-9223372036854775808"), Some(Value(i64::MIN)));
        assert_eq!(parse_int("9223372036854775808"), Some(OutOfRange));
        assert_eq!(parse_int("0xFFFFFFFFFFFFFFFF"), Some(OutOfRange));
        assert_eq!(parse_int("123456789012345678901234567890"), Some(OutOfRange));
        assert_eq!(parse_int("+1"), None);
        assert_eq!(parse_int("0x+5"), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("1 << 2"), None);
        assert_eq!(parse_int("TICKER_ENUM_MAX"), None);
        assert_eq!(parse_int(""), None);
    }
}
