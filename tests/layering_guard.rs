//! Layering guardrails to keep the parsing library free of binary-only dependencies.
//!
//! `minus_syntax` is a library: it emits `tracing` events but never installs a subscriber, and it has no CLI.
//! `minus_core` is the vocabulary layer and depends on nothing. This test scans their `Cargo.toml` files and fails if
//! a forbidden crate appears in `[dependencies]`.

fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            // Any new section after `[dependencies]` ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some(name) = line_no_comment.split('=').next() {
            names.push(name.trim().to_string());
        }
    }

    names
}

#[test]
fn syntax_crate_does_not_depend_on_binary_crates() {
    let deps = dependencies(include_str!("../crates/minus_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "tracing"), "expected `tracing` in {deps:?}");

    for forbidden in ["clap", "tracing-subscriber"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in minus_syntax [dependencies]"
        );
    }
}

#[test]
fn core_crate_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/minus_core/Cargo.toml"));
    assert!(deps.is_empty(), "minus_core must stay dependency-free, found {deps:?}");
}
