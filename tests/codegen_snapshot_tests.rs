//! Golden snapshot tests for codegen
//!
//! These tests generate Rust code from JSON type models and compare the
//! output against stored snapshots. This ensures codegen changes are
//! reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use typegen::backend::{EmitConfig, Generator, OverrideRules};
use typegen_model::load_type_map;

/// Load a fixture from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

/// Generate Rust code from a JSON model, without the version header so snapshots survive releases
fn generate_rust(model: &str, rules: Option<OverrideRules>) -> String {
    let types = load_type_map(model).expect("model failed to load");
    let mut generator = Generator::new(&types, &[]).with_config(EmitConfig::new().with_header(false));
    if let Some(rules) = rules {
        generator = generator.with_override(rules);
    }
    generator.generate().expect("generation failed").into_source()
}

#[test]
fn test_request_codegen() {
    let rust_code = generate_rust(&load_test_file("request.json"), None);
    insta::assert_snapshot!("request", rust_code);
}

#[test]
fn test_numeric_enums_codegen() {
    let rust_code = generate_rust(&load_test_file("numeric_enums.json"), None);
    insta::assert_snapshot!("numeric_enums", rust_code);
}

#[test]
fn test_recursive_inline_codegen() {
    let rust_code = generate_rust(&load_test_file("recursive_inline.json"), None);
    insta::assert_snapshot!("recursive_inline", rust_code);
}

#[test]
fn test_overrides_codegen() {
    let rules = OverrideRules::from_json(&load_test_file("overrides.rules.json")).expect("invalid rules");
    let rust_code = generate_rust(&load_test_file("overrides.json"), Some(rules));
    insta::assert_snapshot!("overrides", rust_code);
}

/// Every fixture must produce a file that parses back as Rust.
#[test]
fn test_all_fixtures_reparse() {
    for name in ["request.json", "numeric_enums.json", "recursive_inline.json"] {
        let rust_code = generate_rust(&load_test_file(name), None);
        syn::parse_file(&rust_code).unwrap_or_else(|e| panic!("{} produced invalid Rust: {}", name, e));
    }
}
