//! Rust keyword vocabulary (for codegen identifier escaping).

/// Reserved + strict keywords in Rust, including the 2024 edition reservation of `gen`.
pub const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try", "gen",
];

/// Keywords that cannot be written as raw identifiers (`r#self` is rejected by rustc).
pub const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Check whether an identifier is a Rust keyword.
pub fn is_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Check whether a keyword can be escaped with the `r#` prefix.
pub fn can_be_raw(name: &str) -> bool {
    !NON_RAW_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_detected() {
        assert!(is_keyword("type"));
        assert!(is_keyword("gen"));
        assert!(!is_keyword("status"));
    }

    #[test]
    fn test_raw_escape_rules() {
        assert!(can_be_raw("type"));
        assert!(!can_be_raw("crate"));
        assert!(!can_be_raw("self"));
    }
}
