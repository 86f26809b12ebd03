//! Hygiene — enforces coding standards at test time.
//!
//! Scans production sources under `src/` for antipatterns. Each pattern
//! carries a budget (ideally zero) and the budget never grows: fix an
//! existing hit before adding another.

use std::fs;
use std::path::Path;

/// `(pattern, budget)` pairs checked against every production line.
///
/// The non-zero budgets cover browser glue: DOM attribute writes,
/// fragment writes, and listener registration deliberately discard
/// JS-side errors, and off-browser stubs discard their inputs.
const BUDGETS: &[(&str, usize)] = &[
    // Panics — these crash the process.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 6),
    (".ok()", 1),
    // Style / structure.
    ("#[allow(dead_code)]", 0),
];

/// Collect production `.rs` files under `src/`, skipping `*_test.rs`.
fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let name = path.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((name, content));
            }
        }
    }
}

fn count_hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

#[test]
fn source_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    for &(pattern, budget) in BUDGETS {
        let hits = count_hits(&files, pattern);
        let found: usize = hits.iter().map(|(_, count)| count).sum();
        let listing = hits
            .iter()
            .map(|(path, count)| format!("  {path}: {count}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(
            found <= budget,
            "`{pattern}` budget exceeded: found {found}, max {budget}.\n{listing}"
        );
    }
}
