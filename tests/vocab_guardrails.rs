use std::collections::HashSet;

use typegen_core::lang::rust_keywords::{self, NON_RAW_KEYWORDS, RUST_KEYWORDS};

#[test]
fn keyword_spellings_unique() {
    let mut seen: HashSet<&'static str> = HashSet::new();
    for &kw in RUST_KEYWORDS {
        if !seen.insert(kw) {
            panic!("duplicate keyword spelling {:?}", kw);
        }
    }
}

#[test]
fn keywords_are_lowercase_ascii() {
    for &kw in RUST_KEYWORDS {
        assert!(
            kw.chars().all(|c| c.is_ascii_lowercase()),
            "keyword {:?} should be lowercase ascii",
            kw
        );
        assert!(rust_keywords::is_keyword(kw));
    }
}

#[test]
fn non_raw_keywords_are_never_escaped() {
    for &kw in NON_RAW_KEYWORDS {
        assert!(!rust_keywords::can_be_raw(kw), "{:?} must not be raw-escaped", kw);
    }
}
