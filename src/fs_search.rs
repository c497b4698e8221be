//! Predicate-driven directory search.
//!
//! Read-only traversal; unreadable entries are skipped rather than surfaced.
//! `None` is the not-found sentinel for both directions.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Walk upward from `start` (inclusive) until the predicate matches a
/// directory or the filesystem root has been checked.
pub fn find_ancestor<P>(start: &Path, predicate: P) -> Option<PathBuf>
where
    P: Fn(&Path) -> bool,
{
    start
        .ancestors()
        .find(|dir| predicate(dir))
        .map(Path::to_path_buf)
}

/// Depth-first search of the subdirectories under `start` (exclusive) until
/// the predicate matches. The first match in traversal order wins.
pub fn find_descendant<P>(start: &Path, predicate: P) -> Option<PathBuf>
where
    P: Fn(&Path) -> bool,
{
    WalkDir::new(start)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .find(|entry| predicate(entry.path()))
        .map(|entry| entry.into_path())
}
