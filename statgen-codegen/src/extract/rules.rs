/// Line classification for one C enum block.
#[derive(Debug, Clone, Copy)]
pub struct LineRules<'a> {
    enum_name: &'a str,
}

impl<'a> LineRules<'a> {
    pub fn new(enum_name: &'a str) -> Self {
        Self { enum_name }
    }

    pub fn enum_name(&self) -> &'a str {
        self.enum_name
    }

    /// `enum <Name> ... {`, e.g. `enum Tickers : uint32_t {`.
    pub fn is_begin(&self, line: &str) -> bool {
        let Some(rest) = line.trim_start().strip_prefix("enum") else {
            return false;
        };
        if !rest.starts_with(char::is_whitespace) {
            return false;
        }
        let Some(rest) = rest.trim_start().strip_prefix(self.enum_name) else {
            return false;
        };
        !rest.starts_with(is_ident_char) && line.trim_end().ends_with('{')
    }

    /// An identifier-led line containing a comma. Comments, blank lines and
    /// preprocessor directives don't qualify.
    pub fn is_entry(&self, line: &str) -> bool {
        line.trim_start().starts_with(is_ident_char) && line.contains(',')
    }

    pub fn is_end(&self, line: &str) -> bool {
        line.trim_start().starts_with("};")
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
