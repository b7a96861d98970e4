/// Bulk file duplication: numbered copies of every file in a directory.
///
/// The listing is snapshotted before any copy so fresh replicas are never
/// re-enumerated, and an existing target name is reported and skipped, never
/// overwritten. Re-running on the same directory creates nothing new.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nameduel_core::replica_targets;

/// Outcome of a replication run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplicateReport {
    /// Regular files found directly inside the directory.
    pub files: usize,
    /// Copies created.
    pub copied: usize,
    /// Target names that already existed and were left alone.
    pub skipped: usize,
}

/// Create `count` numbered copies of every regular file directly inside
/// `dir`. No recursion; directories and other non-files are ignored.
///
/// Underlying IO failures abort the run — completed copies stay on disk,
/// and a re-run picks up where this one stopped.
pub fn replicate_dir(dir: &Path, count: usize, verbose: bool) -> io::Result<ReplicateReport> {
    let mut originals: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            originals.push(entry.path());
        }
    }
    originals.sort();

    let mut report = ReplicateReport {
        files: originals.len(),
        ..Default::default()
    };

    for original in &originals {
        for target in replica_targets(original, count) {
            if target.exists() {
                println!("Skipping existing file: {}", target.display());
                report.skipped += 1;
                continue;
            }

            fs::copy(original, &target)?;
            report.copied += 1;
            if verbose {
                eprintln!("Copied {} -> {}", original.display(), target.display());
            }
        }
    }

    Ok(report)
}
