//! Layering guardrails for the shared crates.
//!
//! `typegen_core` and `typegen_model` stay free of code-generation machinery: only the root `typegen` crate
//! may depend on `syn`, `quote`, `proc-macro2` or `prettyplease`. `typegen_core` additionally must not depend
//! on the model. These tests scan the `[dependencies]` tables of the crate manifests.

const CODEGEN_CRATES: &[&str] = &["syn", "quote", "proc-macro2", "prettyplease"];

/// Names of the crates listed in a manifest's `[dependencies]` table.
fn dependencies(manifest: &str) -> Vec<&str> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            deps.push(name.trim());
        }
    }
    deps
}

#[test]
fn shared_crates_do_not_depend_on_codegen() {
    let manifests = [
        ("typegen_core", include_str!("../crates/typegen_core/Cargo.toml")),
        ("typegen_model", include_str!("../crates/typegen_model/Cargo.toml")),
    ];
    for (crate_name, manifest) in manifests {
        for dep in dependencies(manifest) {
            assert!(
                !CODEGEN_CRATES.contains(&dep),
                "`{}` must not depend on `{}`; code generation belongs to the root crate",
                crate_name,
                dep
            );
        }
    }
}

#[test]
fn core_does_not_depend_on_model() {
    let deps = dependencies(include_str!("../crates/typegen_core/Cargo.toml"));
    assert!(!deps.contains(&"typegen_model"), "`typegen_core` must not depend on `typegen_model`");
}

#[test]
fn root_depends_on_both_shared_crates() {
    let deps = dependencies(include_str!("../Cargo.toml"));
    assert!(deps.contains(&"typegen_core"));
    assert!(deps.contains(&"typegen_model"));
}
