use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for extraction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A header file loaded for scanning, kept whole for diagnostics.
#[derive(Debug, Clone)]
pub struct HeaderSource {
    path: PathBuf,
    content: String,
}

impl HeaderSource {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a header from disk.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Ok(Self::new(path, content))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.path.display().to_string(), self.content.clone())
    }

    pub(crate) fn missing_enum_error(&self, enum_name: &str) -> Box<Error> {
        Box::new(Error::MissingEnum {
            path: self.path.clone(),
            enum_name: enum_name.to_string(),
        })
    }

    pub(crate) fn unterminated_enum_error(&self, enum_name: &str, span: SourceSpan) -> Box<Error> {
        Box::new(Error::UnterminatedEnum {
            src: self.named_source(),
            span,
            enum_name: enum_name.to_string(),
        })
    }

    pub(crate) fn malformed_entry_error(&self, line: &str, span: SourceSpan) -> Box<Error> {
        Box::new(Error::MalformedEntry {
            src: self.named_source(),
            span,
            line: line.to_string(),
        })
    }

    pub(crate) fn unresolved_value_error(
        &self,
        name: &str,
        expr: &str,
        suffix: &str,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::UnresolvedValue {
            src: self.named_source(),
            span,
            name: name.to_string(),
            expr: expr.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub(crate) fn literal_out_of_range_error(
        &self,
        name: &str,
        expr: &str,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::LiteralOutOfRange {
            src: self.named_source(),
            span,
            name: name.to_string(),
            expr: expr.to_string(),
        })
    }

    pub(crate) fn value_overflow_error(&self, name: &str, span: SourceSpan) -> Box<Error> {
        Box::new(Error::ValueOverflow {
            src: self.named_source(),
            span,
            name: name.to_string(),
        })
    }

    pub(crate) fn value_out_of_range_error(
        &self,
        name: &str,
        value: i64,
        repr: &str,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::ValueOutOfRange {
            src: self.named_source(),
            span,
            name: name.to_string(),
            value,
            repr: repr.to_string(),
        })
    }

    pub(crate) fn duplicate_variant_error(
        &self,
        name: &str,
        variant: &str,
        first: &str,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateVariant {
            src: self.named_source(),
            span,
            name: name.to_string(),
            variant: variant.to_string(),
            first: first.to_string(),
        })
    }

    pub(crate) fn duplicate_value_error(
        &self,
        name: &str,
        value: i64,
        first: &str,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateValue {
            src: self.named_source(),
            span,
            name: name.to_string(),
            value,
            first: first.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read header '{path}'")]
    #[diagnostic(
        code(statgen::header_io),
        help("relative header paths resolve against the root directory, see --root")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("enum '{enum_name}' not found in '{path}'")]
    #[diagnostic(
        code(statgen::missing_enum),
        help("expected a line like `enum {enum_name} : uint32_t {{`")
    )]
    MissingEnum { path: PathBuf, enum_name: String },

    #[error("enum '{enum_name}' is never closed")]
    #[diagnostic(
        code(statgen::unterminated_enum),
        help("expected a line starting with `}};` after the last entry")
    )]
    UnterminatedEnum {
        #[source_code]
        src: NamedSource<String>,
        #[label("enum opened here")]
        span: SourceSpan,
        enum_name: String,
    },

    #[error("invalid enum: {line}")]
    #[diagnostic(
        code(statgen::malformed_entry),
        help("entries must look like `NAME,` or `NAME = VALUE,`")
    )]
    MalformedEntry {
        #[source_code]
        src: NamedSource<String>,
        #[label("more than one '=' in this entry")]
        span: SourceSpan,
        line: String,
    },

    #[error("cannot resolve value '{expr}' of '{name}'")]
    #[diagnostic(
        code(statgen::unresolved_value),
        help("values must be integer literals or names of earlier entries ending in '{suffix}'")
    )]
    UnresolvedValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown value")]
        span: SourceSpan,
        name: String,
        expr: String,
        suffix: String,
    },

    #[error("integer literal '{expr}' of '{name}' does not fit in 64 bits")]
    #[diagnostic(code(statgen::literal_out_of_range))]
    LiteralOutOfRange {
        #[source_code]
        src: NamedSource<String>,
        #[label("out of range")]
        span: SourceSpan,
        name: String,
        expr: String,
    },

    #[error("implicit value of '{name}' overflows")]
    #[diagnostic(
        code(statgen::value_overflow),
        help("the previous entry already holds the largest 64-bit value")
    )]
    ValueOverflow {
        #[source_code]
        src: NamedSource<String>,
        #[label("no value after i64::MAX")]
        span: SourceSpan,
        name: String,
    },

    #[error("value {value} of '{name}' does not fit in {repr}")]
    #[diagnostic(
        code(statgen::value_out_of_range),
        help("choose a wider integer type with `repr` in the [output] table")
    )]
    ValueOutOfRange {
        #[source_code]
        src: NamedSource<String>,
        #[label("out of range for {repr}")]
        span: SourceSpan,
        name: String,
        value: i64,
        repr: String,
    },

    #[error("'{name}' and '{first}' both become variant '{variant}'")]
    #[diagnostic(code(statgen::duplicate_variant))]
    DuplicateVariant {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate variant name")]
        span: SourceSpan,
        name: String,
        variant: String,
        first: String,
    },

    #[error("'{name}' has value {value}, already used by '{first}'")]
    #[diagnostic(
        code(statgen::duplicate_value),
        help("Rust enums cannot share a discriminant between variants")
    )]
    DuplicateValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate value")]
        span: SourceSpan,
        name: String,
        value: i64,
        first: String,
    },
}
