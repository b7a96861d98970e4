/// Replica filename planning for the bulk file duplicator.
///
/// Pure path math — the CLI performs the actual copies. A replica of
/// `a.txt` with index 0 is `a0.txt`; the index always lands between the
/// stem and the final extension.
use std::path::{Path, PathBuf};

/// Copies made per original file when no count is configured.
pub const DEFAULT_REPLICA_COUNT: usize = 25;

/// The sibling path for replica `index` of `path`.
///
/// Multi-dot names keep everything before the final extension in the stem,
/// so `archive.tar.gz` becomes `archive.tar0.gz`. Files without an
/// extension get the index appended to the whole name.
pub fn replica_name(path: &Path, index: usize) -> PathBuf {
    let mut name = path.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(index.to_string());
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Replica paths for indices `0..count`.
pub fn replica_targets(path: &Path, count: usize) -> Vec<PathBuf> {
    (0..count).map(|i| replica_name(path, i)).collect()
}
