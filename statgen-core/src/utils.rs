//! Shared utility functions for code generation.

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords (2021 edition)
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords (may be used in future)
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
    // Weak keywords (context-sensitive, but best to avoid)
    "union",
];

/// Convert an upper snake case C identifier to PascalCase
/// (e.g., "BLOCK_CACHE_MISS" -> "BlockCacheMiss").
///
/// Each word keeps its first character upper-cased and has the rest
/// lower-cased, so "L0_HIT" becomes "L0Hit". Empty words from doubled
/// underscores vanish.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}

/// Check if a name is a Rust reserved keyword
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Check if a name is a plain C identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
