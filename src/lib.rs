//! # maven-tree
//!
//! Precomputes a browsable index of a static Maven repository. The repository
//! directory is the only data source: group, artifact and version are inferred
//! from directory shape, and the result is written as JSON a web frontend can
//! render without ever listing the filesystem at request time.
//!
//! # Output: One Tree, Many Manifests
//!
//! ```text
//! repository/                      public/tree-data/
//! └── com/example/foo/             ├── tree.json                  (whole hierarchy)
//!     ├── 1.0/foo-1.0.pom    ──►   ├── com_example_foo_1.0.json   (files of 1.0)
//!     └── 2.0/foo-2.0.pom          └── com_example_foo_2.0.json   (files of 2.0)
//! ```
//!
//! The tree holds every group segment, artifact and version but no file
//! listings. Each version's files live in their own manifest, so the frontend
//! downloads the tree once and fetches a manifest when a version is opened.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`classify`] | Decides whether a directory is a group segment, artifact, or version |
//! | [`index`] | Single-pass scan into tree + manifests; JSON output; stale-manifest pruning |
//! | [`ordering`] | Version order (descending name) and file order (POM, main jar, ...) |
//! | [`types`] | Wire types: `TreeNode`, `VersionManifest` |
//! | [`config`] | Optional `maven-tree.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## No POM Parsing
//!
//! Coordinates come from paths. A `.pom` file marks a version directory, its
//! parent is the artifact, and everything above is the dotted group id. The
//! POM content is never opened, so a repository with broken or unusual POMs
//! still indexes.
//!
//! ## Deterministic Output
//!
//! Directory entries are read in name order and both sort orders are pure
//! string comparisons. Running twice over an unchanged repository writes
//! byte-identical files, so published output only changes when content does.
//!
//! ## Full Rebuild
//!
//! Every run rescans everything and rewrites every file. Manifests of removed
//! versions are left behind unless `prune_stale` is enabled; the tree is
//! always the authority on which versions exist.

pub mod classify;
pub mod config;
pub mod index;
pub mod ordering;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
