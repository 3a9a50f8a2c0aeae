//! Display ordering for version directories and the files inside them.
//!
//! Both orders are total and purely string-based, so repeated runs over the
//! same tree produce identical output.
//!
//! ## Files
//!
//! Files inside a version directory are grouped into [`FileRank`] buckets and
//! sorted by name within each bucket:
//!
//! ```text
//! foo-1.0.pom                ← Pom
//! foo-1.0.jar                ← MainJar   (exactly <artifactId>-<version>.jar)
//! foo-1.0-sources.jar        ← SourcesJar
//! foo-1.0-javadoc.jar        ← JavadocJar
//! foo-1.0-linux-x86_64.jar   ← OtherJar
//! foo-1.0.jar.sha1           ← Sha1
//! foo-1.0.jar.md5            ← Md5
//! foo-1.0.module             ← Other
//! ```
//!
//! A classifier-qualified main jar (`foo-1.0-all.jar`) is not recognized as the
//! main jar; it lands in `OtherJar`.
//!
//! ## Versions
//!
//! Descending string comparison of the directory name. `2.0.0` sorts before
//! `1.5.0`, but `9.0` also sorts before `10.0`: there is no semantic version
//! parsing.

use crate::types::{FileEntry, TreeNode};
use std::cmp::Ordering;

/// Display bucket of a file within a version directory, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileRank {
    Pom,
    MainJar,
    SourcesJar,
    JavadocJar,
    OtherJar,
    Sha1,
    Md5,
    Other,
}

/// File name of the main jar for an artifact version: `<artifactId>-<version>.jar`.
pub fn main_jar_name(artifact_id: &str, version: &str) -> String {
    format!("{artifact_id}-{version}.jar")
}

/// Rank a file name given the expected main jar name.
pub fn file_rank(name: &str, main_jar: &str) -> FileRank {
    if name.ends_with(".pom") {
        return FileRank::Pom;
    }
    if name == main_jar {
        return FileRank::MainJar;
    }
    if name.ends_with(".jar") {
        if name.contains("-sources.jar") {
            return FileRank::SourcesJar;
        }
        if name.contains("-javadoc.jar") {
            return FileRank::JavadocJar;
        }
        return FileRank::OtherJar;
    }
    if name.ends_with(".sha1") {
        FileRank::Sha1
    } else if name.ends_with(".md5") {
        FileRank::Md5
    } else {
        FileRank::Other
    }
}

/// Sort a version's files by rank, then by name.
pub fn sort_files(files: &mut [FileEntry], artifact_id: &str, version: &str) {
    let main_jar = main_jar_name(artifact_id, version);
    files.sort_by(|a, b| {
        file_rank(&a.name, &main_jar)
            .cmp(&file_rank(&b.name, &main_jar))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Compare two version directory names: newest-looking first.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Sort version nodes of an artifact in display order.
pub fn sort_versions(versions: &mut [TreeNode]) {
    versions.sort_by(|a, b| compare_versions(&a.name, &b.name));
}
