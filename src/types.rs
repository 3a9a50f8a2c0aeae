//! Shared types written to the tree-data directory.
//!
//! These are the contract with the rendering layer: one aggregate [`TreeNode`]
//! rooted at the repository, plus one [`VersionManifest`] per version
//! directory. Keys are camelCase on the wire (`groupId`, `artifactId`,
//! `hasData`) because the frontend reads them directly.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Maven coordinates inferred from directory shape.
///
/// Never read from a POM. `group_id` is the dotted form of the path segments
/// above the artifact directory, `artifact_id` is the artifact directory name.
/// Both are empty while the descent is still inside group segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
}

/// One directory in the navigation hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Directory base name (or the root label for the root node).
    pub name: String,
    /// Slash-joined path relative to the repository root. Empty for the root.
    pub path: String,
    pub kind: NodeKind,
}

/// What a directory turned out to be. Decided once, while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Group-path segment. Children are `Dir` or `Artifact` nodes.
    Dir { children: Vec<TreeNode> },
    /// Artifact directory. Children are `Version` nodes, newest-looking first.
    Artifact {
        coordinates: Coordinates,
        children: Vec<TreeNode>,
    },
    /// Version directory. Its file listing lives in a separate manifest.
    Version { coordinates: Coordinates },
}

impl NodeKind {
    /// Wire label for the `type` field.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Dir { .. } => "dir",
            NodeKind::Artifact { .. } => "artifact",
            NodeKind::Version { .. } => "version",
        }
    }
}

impl TreeNode {
    /// The sentinel root node wrapping the top-level entries.
    pub fn root(label: &str, children: Vec<TreeNode>) -> Self {
        Self {
            name: label.to_string(),
            path: String::new(),
            kind: NodeKind::Dir { children },
        }
    }

    /// Child nodes; empty for versions.
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Dir { children } | NodeKind::Artifact { children, .. } => children,
            NodeKind::Version { .. } => &[],
        }
    }

    pub fn coordinates(&self) -> Option<&Coordinates> {
        match &self.kind {
            NodeKind::Artifact { coordinates, .. } | NodeKind::Version { coordinates } => {
                Some(coordinates)
            }
            NodeKind::Dir { .. } => None,
        }
    }

    /// Version names of an artifact, in child order. `None` for other kinds.
    pub fn versions(&self) -> Option<Vec<&str>> {
        match &self.kind {
            NodeKind::Artifact { children, .. } => {
                Some(children.iter().map(|c| c.name.as_str()).collect())
            }
            _ => None,
        }
    }

    pub fn is_version(&self) -> bool {
        matches!(self.kind, NodeKind::Version { .. })
    }

    pub fn is_artifact(&self) -> bool {
        matches!(self.kind, NodeKind::Artifact { .. })
    }
}

// Wire field order: name, type, path, coordinates, children last.
impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = match &self.kind {
            NodeKind::Dir { .. } => 4,
            NodeKind::Artifact { .. } => 7,
            NodeKind::Version { .. } => 6,
        };
        let mut state = serializer.serialize_struct("TreeNode", len)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", self.kind.label())?;
        state.serialize_field("path", &self.path)?;
        match &self.kind {
            NodeKind::Dir { children } => {
                state.serialize_field("children", children)?;
            }
            NodeKind::Artifact {
                coordinates,
                children,
            } => {
                let versions: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
                state.serialize_field("groupId", &coordinates.group_id)?;
                state.serialize_field("artifactId", &coordinates.artifact_id)?;
                state.serialize_field("versions", &versions)?;
                state.serialize_field("children", children)?;
            }
            NodeKind::Version { coordinates } => {
                state.serialize_field("groupId", &coordinates.group_id)?;
                state.serialize_field("artifactId", &coordinates.artifact_id)?;
                state.serialize_field("hasData", &true)?;
            }
        }
        state.end()
    }
}

/// File listing of a single version directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionManifest {
    pub files: Vec<FileEntry>,
}

/// A regular file inside a version directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}
