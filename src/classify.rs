//! Directory classification by shape.
//!
//! A Maven repository carries no marker saying which directory is a group
//! segment, an artifact, or a version. The layout is inferred from what each
//! directory contains:
//!
//! ```text
//! repository/
//! └── com/                         # Group (no POMs one or two levels down)
//!     └── example/                 # Group
//!         └── foo/                 # Artifact (a subdirectory holds a .pom)
//!             ├── 1.0/             # Version (holds a .pom)
//!             │   ├── foo-1.0.pom
//!             │   └── foo-1.0.jar
//!             └── 2.0/
//!                 └── foo-2.0.pom
//! ```
//!
//! The rules are checked in order and the first match wins, so a directory is
//! exactly one [`DirKind`]:
//!
//! 1. a regular `.pom` file among its entries → [`DirKind::Version`]
//! 2. a subdirectory holding a regular `.pom` file → [`DirKind::Artifact`]
//! 3. anything else → [`DirKind::Group`]
//!
//! Hidden entries and `README.md` are invisible at every level. Symlinks are
//! neither files nor directories here; entry types are read without following
//! links.

use crate::types::Coordinates;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const POM_SUFFIX: &str = ".pom";

/// Kind of a directory, decided from its own entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Version,
    Artifact,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Dir,
    Other,
}

/// A visible directory entry.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub entry_type: EntryType,
    /// Size in bytes for regular files, 0 otherwise.
    pub size: u64,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    fn is_pom(&self) -> bool {
        self.is_file() && self.name.ends_with(POM_SUFFIX)
    }
}

/// Entries excluded from every listing.
pub fn is_ignored(name: &str) -> bool {
    name.starts_with('.') || name == "README.md"
}

/// List the visible entries of a directory, sorted by name.
///
/// Entries whose type or metadata cannot be read are dropped.
pub fn visible_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries: Vec<Entry> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            if is_ignored(&name) {
                return None;
            }
            let file_type = e.file_type().ok()?;
            let (entry_type, size) = if file_type.is_file() {
                (EntryType::File, e.metadata().ok()?.len())
            } else if file_type.is_dir() {
                (EntryType::Dir, 0)
            } else {
                (EntryType::Other, 0)
            };
            Some(Entry {
                name,
                path: e.path(),
                entry_type,
                size,
            })
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Whether `dir` directly holds a `.pom` file.
///
/// An unreadable directory counts as "no", so it can never promote its parent
/// to an artifact.
pub fn contains_pom(dir: &Path) -> bool {
    match visible_entries(dir) {
        Ok(entries) => entries.iter().any(Entry::is_pom),
        Err(e) => {
            debug!("POM check of {} failed: {}", dir.display(), e);
            false
        }
    }
}

/// Whether a `.pom` file sits anywhere under `dir`, at any depth.
///
/// Hidden directories are not descended into; unreadable parts of the tree
/// are treated as holding nothing.
pub fn has_pom_below(dir: &Path) -> bool {
    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !is_ignored(&e.file_name().to_string_lossy()))
        .filter_map(|e| e.ok())
        .any(|e| e.file_type().is_file() && e.file_name().to_string_lossy().ends_with(POM_SUFFIX))
}

/// Classify a directory from its already-listed entries.
pub fn classify_entries(entries: &[Entry]) -> DirKind {
    if entries.iter().any(Entry::is_pom) {
        DirKind::Version
    } else if entries
        .iter()
        .any(|e| e.is_dir() && contains_pom(&e.path))
    {
        DirKind::Artifact
    } else {
        DirKind::Group
    }
}

/// List and classify a directory in one step.
pub fn classify(dir: &Path) -> io::Result<(DirKind, Vec<Entry>)> {
    let entries = visible_entries(dir)?;
    let kind = classify_entries(&entries);
    Ok((kind, entries))
}

/// Coordinates passed down into a group segment named `segment`.
///
/// The segment is appended to the dotted group id; the artifact id is carried
/// through unchanged.
pub fn group_coordinates(inherited: &Coordinates, segment: &str) -> Coordinates {
    let group_id = if inherited.group_id.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", inherited.group_id, segment)
    };
    Coordinates {
        group_id,
        artifact_id: inherited.artifact_id.clone(),
    }
}

/// Coordinates of an artifact directory named `name` found under `parent_path`.
///
/// The inherited group id wins when present; otherwise the parent's relative
/// path is used with `/` turned into `.`.
pub fn artifact_coordinates(inherited: &Coordinates, name: &str, parent_path: &str) -> Coordinates {
    let group_id = if inherited.group_id.is_empty() {
        parent_path.replace('/', ".")
    } else {
        inherited.group_id.clone()
    };
    Coordinates {
        group_id,
        artifact_id: name.to_string(),
    }
}

/// Join a relative path and a child name with `/`.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
