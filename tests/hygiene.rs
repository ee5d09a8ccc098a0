//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the crate's source tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first — the budget never grows.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            // Skip test files
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Assert that `pattern` appears at most `max` times across production source.
fn assert_budget(pattern: &str, max: usize, label: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            if count > 0 {
                Some((file.path.clone(), count))
            } else {
                None
            }
        })
        .collect();

    let total: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        total <= max,
        "{label} budget exceeded: found {total}, max {max}.\n{listing}"
    );
}

// Panics — these crash the process.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0, ".unwrap()");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0, ".expect()");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0, "panic!()");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0, "unreachable!()");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0, "todo!()");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", 0, "unimplemented!()");
}

// Silent loss — discards errors without inspecting.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0, "let _ =");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0, ".ok()");
}

// Style / structure.

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0, "#[allow(dead_code)]");
}
