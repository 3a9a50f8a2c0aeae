//! Shared test utilities for the maven-tree test suite.
//!
//! Fixture builders that lay out Maven-shaped directory trees in a temp
//! directory, plus lookups and assertions over the resulting [`TreeNode`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = sample_repository();
//! let index = index::build(tmp.path(), "repository").unwrap();
//!
//! let foo = find_node(&index.tree, "com/example/foo");
//! assert_eq!(child_names(foo), vec!["2.0.0", "1.5.0", "1.0.0"]);
//! assert_kinds_consistent(&index.tree);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{NodeKind, TreeNode, VersionManifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a version directory at `rel` under `root` holding `files`.
///
/// File names may contain `/` to place files in nested directories. Each
/// file's content is its own name, so sizes are predictable.
pub fn write_version(root: &Path, rel: &str, files: &[&str]) {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    for file in files {
        let path = dir.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, file).unwrap();
    }
}

/// Lay out the standard sample repository directly inside `root`.
///
/// ```text
/// com/example/foo/{1.0.0,1.5.0,2.0.0}/   artifact foo, three versions
/// com/example/bar/0.1/                   artifact bar
/// org/acme/widget/3.1/                   artifact widget
/// README.md                              ignored everywhere
/// ```
pub fn populate_sample(root: &Path) {
    for version in ["1.0.0", "1.5.0", "2.0.0"] {
        let pom = format!("foo-{version}.pom");
        let jar = format!("foo-{version}.jar");
        let sha1 = format!("foo-{version}.jar.sha1");
        write_version(
            root,
            &format!("com/example/foo/{version}"),
            &[jar.as_str(), pom.as_str(), sha1.as_str()],
        );
    }
    write_version(
        root,
        "com/example/bar/0.1",
        &["bar-0.1.pom", "bar-0.1.jar", "bar-0.1-sources.jar"],
    );
    write_version(
        root,
        "org/acme/widget/3.1",
        &["widget-3.1.pom", "widget-3.1-javadoc.jar", "README.md"],
    );
    fs::write(root.join("README.md"), "# Maven repository").unwrap();
}

/// Temp directory that *is* the sample repository root.
pub fn sample_repository() -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate_sample(tmp.path());
    tmp
}

/// Temp project directory with the sample repository under `repository/`.
pub fn sample_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate_sample(&tmp.path().join("repository"));
    tmp
}

// =========================================================================
// Tree lookups, panicking with the missing path
// =========================================================================

/// Find a node by its relative path. Panics if not found.
pub fn find_node<'a>(tree: &'a TreeNode, path: &str) -> &'a TreeNode {
    fn walk<'a>(node: &'a TreeNode, path: &str) -> Option<&'a TreeNode> {
        if node.path == path {
            return Some(node);
        }
        node.children().iter().find_map(|c| walk(c, path))
    }
    walk(tree, path).unwrap_or_else(|| {
        let paths = all_paths(tree);
        panic!("node '{path}' not found. Available: {paths:?}")
    })
}

/// Names of a node's children, in order.
pub fn child_names(node: &TreeNode) -> Vec<&str> {
    node.children().iter().map(|c| c.name.as_str()).collect()
}

/// Every node path in depth-first order.
pub fn all_paths(tree: &TreeNode) -> Vec<String> {
    let mut paths = vec![tree.path.clone()];
    for child in tree.children() {
        paths.extend(all_paths(child));
    }
    paths
}

/// Paths of every version node in depth-first order.
pub fn version_paths(tree: &TreeNode) -> Vec<String> {
    if tree.is_version() {
        return vec![tree.path.clone()];
    }
    tree.children().iter().flat_map(version_paths).collect()
}

/// File names of a manifest, in order.
pub fn file_names(manifest: &VersionManifest) -> Vec<&str> {
    manifest.files.iter().map(|f| f.name.as_str()).collect()
}

// =========================================================================
// Structural assertions
// =========================================================================

/// Assert the kind invariants hold for every node in the tree.
///
/// - `dir` children are `dir` or `artifact`
/// - `artifact` children are `version`, and `versions` mirrors them
/// - `version` nodes have no children
pub fn assert_kinds_consistent(node: &TreeNode) {
    match &node.kind {
        NodeKind::Dir { children } => {
            for child in children {
                assert!(
                    !child.is_version(),
                    "dir '{}' has version child '{}'",
                    node.path,
                    child.path
                );
                assert_kinds_consistent(child);
            }
        }
        NodeKind::Artifact { children, .. } => {
            assert!(!children.is_empty(), "artifact '{}' is empty", node.path);
            for child in children {
                assert!(
                    child.is_version(),
                    "artifact '{}' has non-version child '{}'",
                    node.path,
                    child.path
                );
            }
            assert_eq!(node.versions(), Some(child_names(node)));
        }
        NodeKind::Version { .. } => {
            assert!(node.children().is_empty());
        }
    }
}
