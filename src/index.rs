//! Repository indexing and tree-data output.
//!
//! One recursive descent over the repository produces two things at once:
//!
//! - the aggregate [`TreeNode`] tree of group segments, artifacts and versions
//! - one [`VersionManifest`] per version directory, listing its files
//!
//! The tree references versions by path only. A frontend loads `tree.json`
//! up front and fetches a version's manifest when it is expanded:
//!
//! ```text
//! public/tree-data/
//! ├── tree.json                         # whole hierarchy, no file lists
//! ├── com_example_foo_1.0.json          # {"files": [...]} for com/example/foo/1.0
//! └── com_example_foo_2.0.json
//! ```
//!
//! Building ([`build`]) is kept apart from writing ([`write`]) so the scan can
//! be inspected without touching the output directory (`maven-tree check`).
//!
//! ## Failure Modes
//!
//! - Missing repository root: warning, empty tree, the run still writes output.
//! - Unreadable directory below the root: warning, the directory is skipped.
//! - Unreadable root or any write failure: returned as [`IndexError`]. Output
//!   already written stays in place; there is no rollback.
//! - A directory holding releases that has no place in the tree (a version
//!   directly under the root, an artifact nested inside another artifact):
//!   warning, recorded in [`RepositoryIndex::skipped`].
//! - Two version paths mapping to one manifest name (`a_b/c/1.0` and
//!   `a/b_c/1.0`): warning, the later one in scan order wins, recorded in
//!   [`RepositoryIndex::shadowed`].
//! - A manifest named like the tree file: [`IndexError::TreeFileCollision`],
//!   nothing is written.
//!
//! Manifests of versions that disappeared are left in the output directory
//! unless pruning is enabled. The tree is the authority on which versions
//! exist.

use crate::classify::{self, DirKind, Entry};
use crate::config::GeneratorConfig;
use crate::ordering;
use crate::types::{Coordinates, FileEntry, NodeKind, TreeNode, VersionManifest};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Output directory scan failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Manifest for {0} would overwrite the tree file")]
    TreeFileCollision(String),
}

/// Result of scanning a repository.
#[derive(Debug)]
pub struct RepositoryIndex {
    pub tree: TreeNode,
    /// Manifest file name → manifest, in file name order.
    pub manifests: BTreeMap<String, VersionManifest>,
    /// Paths of directories holding releases that were left out of the tree.
    pub skipped: Vec<String>,
    /// Version paths whose manifest was replaced by a later version with the
    /// same manifest file name.
    pub shadowed: Vec<String>,
    /// Manifest file name → version path it was built from.
    sources: BTreeMap<String, String>,
}

impl RepositoryIndex {
    pub fn artifact_count(&self) -> usize {
        count_nodes(&self.tree, &TreeNode::is_artifact)
    }

    pub fn version_count(&self) -> usize {
        count_nodes(&self.tree, &TreeNode::is_version)
    }

    /// Manifest of the version at `path`, if it was indexed.
    pub fn manifest(&self, path: &str) -> Option<&VersionManifest> {
        self.manifests.get(&manifest_file_name(path))
    }
}

fn count_nodes(node: &TreeNode, pred: &dyn Fn(&TreeNode) -> bool) -> usize {
    let own = usize::from(pred(node));
    own + node
        .children()
        .iter()
        .map(|c| count_nodes(c, pred))
        .sum::<usize>()
}

/// State collected during one descent.
#[derive(Default)]
struct ScanState {
    manifests: BTreeMap<String, VersionManifest>,
    sources: BTreeMap<String, String>,
    skipped: Vec<String>,
    shadowed: Vec<String>,
}

impl ScanState {
    fn add_manifest(&mut self, version_path: &str, manifest: VersionManifest) {
        let file_name = manifest_file_name(version_path);
        if let Some(previous) = self
            .sources
            .insert(file_name.clone(), version_path.to_string())
        {
            warn!("Manifest {file_name} for {version_path} replaces the one for {previous}");
            self.shadowed.push(previous);
        }
        self.manifests.insert(file_name, manifest);
    }

    fn skip(&mut self, path: String) {
        self.skipped.push(path);
    }

    fn finish(self, tree: TreeNode) -> RepositoryIndex {
        RepositoryIndex {
            tree,
            manifests: self.manifests,
            skipped: self.skipped,
            shadowed: self.shadowed,
            sources: self.sources,
        }
    }
}

/// What a [`write`] call put on disk.
#[derive(Debug)]
pub struct WriteReport {
    pub tree_path: PathBuf,
    pub output_dir: PathBuf,
    pub artifacts: usize,
    pub versions: usize,
    pub manifests_written: usize,
    /// Stale manifests removed, in file name order. Empty unless pruning.
    pub pruned: Vec<PathBuf>,
}

/// Manifest file name for a version path: `/` becomes `_`, plus `.json`.
///
/// `com/example/foo/1.0` → `com_example_foo_1.0.json`
pub fn manifest_file_name(version_path: &str) -> String {
    format!("{}.json", version_path.replace('/', "_"))
}

/// Scan a repository into an in-memory index.
///
/// A missing `root` is not an error: it is logged and yields an empty tree.
pub fn build(root: &Path, root_label: &str) -> Result<RepositoryIndex, IndexError> {
    let mut state = ScanState::default();

    if !root.exists() {
        warn!("Repository directory not found: {}", root.display());
        return Ok(state.finish(TreeNode::root(root_label, Vec::new())));
    }

    let entries = classify::visible_entries(root)?;
    let children = scan_group(&entries, "", &Coordinates::default(), &mut state);

    Ok(state.finish(TreeNode::root(root_label, children)))
}

/// Scan the subdirectories of a group segment (or of the root).
fn scan_group(
    entries: &[Entry],
    rel_path: &str,
    coords: &Coordinates,
    state: &mut ScanState,
) -> Vec<TreeNode> {
    let mut nodes = Vec::new();

    for entry in entries.iter().filter(|e| e.is_dir()) {
        let child_path = classify::join_relative(rel_path, &entry.name);
        let (kind, listing) = match classify::classify(&entry.path) {
            Ok(result) => result,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", entry.path.display(), e);
                continue;
            }
        };
        debug!("{child_path}: {kind:?}");

        match kind {
            DirKind::Version => {
                // Only reachable at the root: any deeper parent of a version
                // directory is classified as an artifact.
                warn!("Skipping version directory {child_path} with no artifact directory above it");
                state.skip(child_path);
            }
            DirKind::Artifact => {
                let artifact_coords = classify::artifact_coordinates(coords, &entry.name, rel_path);
                if let Some(node) = scan_artifact(
                    &entry.name,
                    child_path,
                    &listing,
                    artifact_coords,
                    state,
                ) {
                    nodes.push(node);
                }
            }
            DirKind::Group => {
                let group_coords = classify::group_coordinates(coords, &entry.name);
                let children = scan_group(&listing, &child_path, &group_coords, state);
                if !children.is_empty() {
                    nodes.push(TreeNode {
                        name: entry.name.clone(),
                        path: child_path,
                        kind: NodeKind::Dir { children },
                    });
                }
            }
        }
    }

    nodes
}

/// Scan an artifact directory. Only version subdirectories become children.
fn scan_artifact(
    name: &str,
    path: String,
    entries: &[Entry],
    coords: Coordinates,
    state: &mut ScanState,
) -> Option<TreeNode> {
    let mut versions = Vec::new();

    for entry in entries.iter().filter(|e| e.is_dir()) {
        let version_path = classify::join_relative(&path, &entry.name);
        let (kind, listing) = match classify::classify(&entry.path) {
            Ok(result) => result,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", entry.path.display(), e);
                continue;
            }
        };
        match kind {
            DirKind::Version => {}
            DirKind::Artifact => {
                warn!("Skipping artifact {version_path} nested inside artifact {path}");
                state.skip(version_path);
                continue;
            }
            DirKind::Group if classify::has_pom_below(&entry.path) => {
                warn!("Skipping {version_path}: holds POMs below artifact {path}");
                state.skip(version_path);
                continue;
            }
            DirKind::Group => {
                debug!("{version_path}: not a version directory, ignored");
                continue;
            }
        }

        let manifest = build_manifest(&listing, &coords.artifact_id, &entry.name);
        state.add_manifest(&version_path, manifest);
        versions.push(TreeNode {
            name: entry.name.clone(),
            path: version_path,
            kind: NodeKind::Version {
                coordinates: coords.clone(),
            },
        });
    }

    if versions.is_empty() {
        return None;
    }
    ordering::sort_versions(&mut versions);

    Some(TreeNode {
        name: name.to_string(),
        path,
        kind: NodeKind::Artifact {
            coordinates: coords,
            children: versions,
        },
    })
}

/// Ordered file listing of a version directory.
pub fn build_manifest(entries: &[Entry], artifact_id: &str, version: &str) -> VersionManifest {
    let mut files: Vec<FileEntry> = entries
        .iter()
        .filter(|e| e.is_file())
        .map(|e| FileEntry {
            name: e.name.clone(),
            size: e.size,
        })
        .collect();
    ordering::sort_files(&mut files, artifact_id, version);
    VersionManifest { files }
}

/// Write the index to `output_dir`: every manifest, then the tree file.
///
/// Creates `output_dir` if needed and overwrites existing files. Does not
/// prune; see [`prune_stale`]. Fails before writing anything if a manifest
/// shares its name with `tree_file`.
pub fn write(
    index: &RepositoryIndex,
    output_dir: &Path,
    tree_file: &str,
) -> Result<WriteReport, IndexError> {
    if index.manifests.contains_key(tree_file) {
        let source = index
            .sources
            .get(tree_file)
            .cloned()
            .unwrap_or_else(|| tree_file.to_string());
        return Err(IndexError::TreeFileCollision(source));
    }

    fs::create_dir_all(output_dir)?;

    for (file_name, manifest) in &index.manifests {
        write_json(&output_dir.join(file_name), manifest)?;
    }

    let tree_path = output_dir.join(tree_file);
    write_json(&tree_path, &index.tree)?;

    Ok(WriteReport {
        tree_path,
        output_dir: output_dir.to_path_buf(),
        artifacts: index.artifact_count(),
        versions: index.version_count(),
        manifests_written: index.manifests.len(),
        pruned: Vec::new(),
    })
}

/// Pretty-printed JSON, two-space indent, no trailing newline.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), IndexError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Delete `.json` files in `output_dir` that the index did not produce.
///
/// The tree file and every current manifest are kept. Only the top level of
/// `output_dir` is considered. Returns the removed paths in name order.
pub fn prune_stale(
    index: &RepositoryIndex,
    output_dir: &Path,
    tree_file: &str,
) -> Result<Vec<PathBuf>, IndexError> {
    let mut removed = Vec::new();

    for entry in WalkDir::new(output_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(".json") || name == tree_file {
            continue;
        }
        if index.manifests.contains_key(&*name) {
            continue;
        }
        info!("Removing stale manifest {}", entry.path().display());
        fs::remove_file(entry.path())?;
        removed.push(entry.into_path());
    }

    Ok(removed)
}

/// Build, write, and optionally prune, as configured for a project directory.
pub fn run(project: &Path, config: &GeneratorConfig) -> Result<WriteReport, IndexError> {
    let root = config.repository_path(project);
    let output_dir = config.output_path(project);

    let index = build(&root, &config.root_label)?;
    let mut report = write(&index, &output_dir, &config.tree_file)?;
    if config.prune_stale {
        report.pruned = prune_stale(&index, &output_dir, &config.tree_file)?;
    }
    Ok(report)
}
