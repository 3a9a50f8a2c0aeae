//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper writing to stdout. Format functions are pure, so the
//! exact console text is unit tested without capturing stdout.
//!
//! These lines are for people. Diagnostics (missing repository, unreadable
//! directories) go through `log` instead.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! repository
//! 001 com
//!     001 example
//!         001 bar (1 version)
//!             Coordinates: com.example:bar
//!             001 0.1 (3 files)
//!         002 foo (3 versions)
//!             Coordinates: com.example:foo
//!             001 2.0.0 (3 files)
//!             002 1.5.0 (3 files)
//!             003 1.0.0 (3 files)
//!
//! 2 artifacts, 4 versions
//! ```
//!
//! ## Generate
//!
//! ```text
//! Tree data generated successfully
//!     Main tree: public/tree-data/tree.json
//!     Tree data dir: public/tree-data
//!     2 artifacts, 4 versions, 4 manifests written
//!     Pruned: com_example_old_0.9.json
//! ```

use crate::index::{RepositoryIndex, WriteReport};
use crate::types::{NodeKind, TreeNode};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 version`, `3 versions`.
fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Positional index + name, with an optional parenthesized detail.
///
/// ```text
/// 001 com
/// 002 foo (3 versions)
/// ```
fn entity_header(index: usize, name: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), name, d),
        None => format!("{} {}", format_index(index), name),
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the scanned hierarchy for `maven-tree check`.
pub fn format_tree_output(index: &RepositoryIndex) -> Vec<String> {
    let mut lines = vec![index.tree.name.clone()];
    format_children(index, index.tree.children(), 0, &mut lines);

    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        plural(index.artifact_count(), "artifact"),
        plural(index.version_count(), "version")
    ));
    lines
}

fn format_children(
    index: &RepositoryIndex,
    nodes: &[TreeNode],
    depth: usize,
    lines: &mut Vec<String>,
) {
    let pad = indent(depth);
    for (i, node) in nodes.iter().enumerate() {
        match &node.kind {
            NodeKind::Dir { children } => {
                lines.push(format!("{}{}", pad, entity_header(i + 1, &node.name, None)));
                format_children(index, children, depth + 1, lines);
            }
            NodeKind::Artifact {
                coordinates,
                children,
            } => {
                let detail = plural(children.len(), "version");
                lines.push(format!(
                    "{}{}",
                    pad,
                    entity_header(i + 1, &node.name, Some(&detail))
                ));
                lines.push(format!(
                    "{}    Coordinates: {}:{}",
                    pad, coordinates.group_id, coordinates.artifact_id
                ));
                format_children(index, children, depth + 1, lines);
            }
            NodeKind::Version { .. } => {
                let detail = index
                    .manifest(&node.path)
                    .map(|m| plural(m.files.len(), "file"));
                lines.push(format!(
                    "{}{}",
                    pad,
                    entity_header(i + 1, &node.name, detail.as_deref())
                ));
            }
        }
    }
}

/// Print the scanned hierarchy to stdout.
pub fn print_tree_output(index: &RepositoryIndex) {
    for line in format_tree_output(index) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format the summary printed after a generator run.
pub fn format_generate_output(report: &WriteReport) -> Vec<String> {
    let mut lines = vec![
        "Tree data generated successfully".to_string(),
        format!("    Main tree: {}", report.tree_path.display()),
        format!("    Tree data dir: {}", report.output_dir.display()),
        format!(
            "    {}, {}, {} written",
            plural(report.artifacts, "artifact"),
            plural(report.versions, "version"),
            plural(report.manifests_written, "manifest")
        ),
    ];
    for path in &report.pruned {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        lines.push(format!("    Pruned: {}", name));
    }
    lines
}

/// Print the generator summary to stdout.
pub fn print_generate_output(report: &WriteReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index;
    use crate::test_helpers::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "version"), "0 versions");
        assert_eq!(plural(1, "version"), "1 version");
        assert_eq!(plural(2, "file"), "2 files");
    }

    #[test]
    fn entity_header_with_detail() {
        assert_eq!(
            entity_header(2, "foo", Some("3 versions")),
            "002 foo (3 versions)"
        );
        assert_eq!(entity_header(1, "com", None), "001 com");
    }

    #[test]
    fn tree_output_for_sample() {
        let tmp = sample_repository();
        let index = index::build(tmp.path(), "repository").unwrap();
        let lines = format_tree_output(&index);

        assert_eq!(
            lines,
            vec![
                "repository",
                "001 com",
                "    001 example",
                "        001 bar (1 version)",
                "            Coordinates: com.example:bar",
                "            001 0.1 (3 files)",
                "        002 foo (3 versions)",
                "            Coordinates: com.example:foo",
                "            001 2.0.0 (3 files)",
                "            002 1.5.0 (3 files)",
                "            003 1.0.0 (3 files)",
                "002 org",
                "    001 acme",
                "        001 widget (1 version)",
                "            Coordinates: org.acme:widget",
                "            001 3.1 (2 files)",
                "",
                "3 artifacts, 5 versions",
            ]
        );
    }

    #[test]
    fn tree_output_for_missing_repository() {
        let tmp = TempDir::new().unwrap();
        let index = index::build(&tmp.path().join("missing"), "repository").unwrap();
        let lines = format_tree_output(&index);
        assert_eq!(lines, vec!["repository", "", "0 artifacts, 0 versions"]);
    }

    #[test]
    fn generate_output_lists_paths_and_counts() {
        let report = WriteReport {
            tree_path: PathBuf::from("public/tree-data/tree.json"),
            output_dir: PathBuf::from("public/tree-data"),
            artifacts: 2,
            versions: 4,
            manifests_written: 4,
            pruned: vec![PathBuf::from("public/tree-data/com_example_old_0.9.json")],
        };
        let lines = format_generate_output(&report);
        assert_eq!(
            lines,
            vec![
                "Tree data generated successfully",
                "    Main tree: public/tree-data/tree.json",
                "    Tree data dir: public/tree-data",
                "    2 artifacts, 4 versions, 4 manifests written",
                "    Pruned: com_example_old_0.9.json",
            ]
        );
    }

    #[test]
    fn generate_output_without_pruning() {
        let report = WriteReport {
            tree_path: PathBuf::from("out/tree.json"),
            output_dir: PathBuf::from("out"),
            artifacts: 1,
            versions: 1,
            manifests_written: 1,
            pruned: Vec::new(),
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "    1 artifact, 1 version, 1 manifest written");
    }
}
