//! Hygiene: source-level budgets for patterns this crate does not allow.
//!
//! Scans `src/` (skipping `_test.rs` sidecars). Every budget is a ceiling;
//! lower it when a hit is removed, never raise it.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

fn assert_budget(pattern: &str, max: usize, why: &str) {
    let found = hits(&source_files(), pattern);
    let count: usize = found.iter().map(|(_, n)| n).sum();
    let listing = found.iter().map(|(p, n)| format!("  {p}: {n}")).collect::<Vec<_>>().join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded ({why}): found {count}, max {max}.\n{listing}");
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

// Panics abort the whole wasm instance.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0, "panics");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0, "panics");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0, "panics");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0, "panics");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0, "stub");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0, "stub");
}

// Silent loss.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0, "discards a result unread");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0, "drops the error; log it through dom::settle instead");
}

// Leaks.

#[test]
fn forget_budget() {
    // Progress-bar replay: one per bar, fires once.
    assert_budget(".forget()", 1, "leaks a callback");
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0, "delete it instead");
}
