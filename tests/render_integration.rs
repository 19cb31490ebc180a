//! Snapshot tests for rendered trees.
//!
//! Any visual change requires explicit approval with `cargo insta review`.

use insta::assert_snapshot;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;
use tree_limited::tree::{render, Connector, ExclusionGroup, ExclusionSet, TreeOptions};
use tree_limited::render_to_string;

/// A small mixed project:
///
/// ```text
/// project/
///   .git/config
///   README.md
///   docs/guide.md
///   src/main.rs
///   src/util/mod.rs
///   venv/bin/python
/// ```
fn create_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::create_dir_all(root.join("src/util")).unwrap();
    fs::create_dir_all(root.join("venv/bin")).unwrap();

    for file in [
        ".git/config",
        "README.md",
        "docs/guide.md",
        "src/main.rs",
        "src/util/mod.rs",
        "venv/bin/python",
    ] {
        File::create(root.join(file)).unwrap();
    }

    dir
}

fn names_at_depth(root: &Path, options: &TreeOptions) -> Vec<(usize, String)> {
    render(root, options)
        .unwrap()
        .into_iter()
        .map(|line| (line.prefix.chars().count() / 4, line.name))
        .collect()
}

#[test]
fn test_project_default_levels() {
    let dir = create_project();
    let output = render_to_string(dir.path(), &TreeOptions::new()).unwrap();
    assert_snapshot!(output, @r"
    ├── README.md
    ├── docs
    │   └── guide.md
    ├── src
    │   ├── main.rs
    │   └── util
    └── venv
        └── bin
    ");
}

#[test]
fn test_project_three_levels() {
    let dir = create_project();
    let output = render_to_string(dir.path(), &TreeOptions::new().with_max_level(3)).unwrap();
    assert_snapshot!(output, @r"
    ├── README.md
    ├── docs
    │   └── guide.md
    ├── src
    │   ├── main.rs
    │   └── util
    │       └── mod.rs
    └── venv
        └── bin
            └── python
    ");
}

#[test]
fn test_project_common_group() {
    let dir = create_project();
    let options = TreeOptions::new()
        .with_max_level(3)
        .with_group(ExclusionGroup::Common);
    let output = render_to_string(dir.path(), &options).unwrap();
    assert_snapshot!(output, @r"
    ├── README.md
    ├── docs
    │   └── guide.md
    ├── src
    │   ├── main.rs
    │   └── util
    │       └── mod.rs
    └── venv
    ");
}

#[test]
fn test_exclusion_hides_only_descendants() {
    let dir = create_project();
    let options = TreeOptions::new()
        .with_max_level(10)
        .with_excluded(ExclusionSet::from_names(["src", "docs"]));
    let names: Vec<String> = names_at_depth(dir.path(), &options)
        .into_iter()
        .map(|(_, name)| name)
        .collect();

    assert_eq!(names, vec!["README.md", "docs", "src", "venv", "bin", "python"]);
}

#[test]
fn test_no_line_at_or_below_max_level() {
    let dir = create_project();
    for max_level in 0..4 {
        let options = TreeOptions::new().with_max_level(max_level);
        for (depth, name) in names_at_depth(dir.path(), &options) {
            assert!(depth < max_level, "{} at depth {} with max {}", name, depth, max_level);
        }
    }
}

#[test]
fn test_hidden_entries_never_rendered() {
    let dir = create_project();
    let options = TreeOptions::new()
        .with_max_level(10)
        .with_excluded(ExclusionSet::from_names([".git"]));
    let output = render_to_string(dir.path(), &options).unwrap();

    assert!(!output.contains(".git"));
    assert!(!output.contains("config"));
}

#[test]
fn test_siblings_sorted_and_last_connector() {
    let dir = create_project();
    let lines = render(dir.path(), &TreeOptions::new().with_max_level(10)).unwrap();
    let depth = |i: usize| lines[i].prefix.chars().count();

    for i in 0..lines.len() {
        // The next sibling is the next line at the same depth before the tree climbs out
        let next_sibling = (i + 1..lines.len())
            .take_while(|&j| depth(j) >= depth(i))
            .find(|&j| depth(j) == depth(i));

        match next_sibling {
            Some(j) => {
                assert!(lines[i].name < lines[j].name);
                assert_eq!(lines[i].connector, Connector::Branch);
            }
            None => assert_eq!(lines[i].connector, Connector::Last),
        }
    }

    assert_eq!(lines.last().unwrap().to_string(), "        └── python");
}
