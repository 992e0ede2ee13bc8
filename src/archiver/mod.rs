//! Compressed snapshots of the project tree.
//!
//! # Error Handling Strategy
//!
//! The archiver combines graceful degradation with one hard failure point:
//!
//! - **Output-open failures**: fatal. If `project_backup.zip` cannot be
//!   created (typically because it is still open elsewhere), the run aborts
//!   before touching anything else and the error propagates to the caller.
//! - **Per-file failures**: tolerated. A file that is unreadable or vanishes
//!   between listing and reading is reported to stderr and skipped; the walk
//!   continues and the failure is counted in [`ArchiveStats`].
//! - **Summary reporting**: progress is printed every 100 archived files and
//!   the final counts give visibility into how complete the snapshot is.

pub mod walk;
pub mod writer;

use std::path::Path;

use anyhow::Result;

pub use walk::{EXCLUDED_DIRS, walk_project};
pub use writer::{ArchiveStats, ArchiveWriter};

use crate::utils::paths::zip_entry_name;

/// The fixed output file name, created in the walk root.
pub const DEFAULT_ARCHIVE_NAME: &str = "project_backup.zip";

/// File name suffix skipped during the walk to avoid re-archiving archives.
const ARCHIVE_SUFFIX: &str = ".zip";

/// A progress line is printed after this many archived files.
const PROGRESS_INTERVAL: usize = 100;

/// Archive the project tree rooted at `root` into `output_name` inside it.
///
/// Walks the tree top-down with [`EXCLUDED_DIRS`] pruned at every depth,
/// skips `.zip`-suffixed files and the output file itself, and streams each
/// remaining file into the archive under its relative path.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or the finished
/// archive cannot be flushed. Individual unreadable files do not fail the
/// run; they are reported to stderr and counted in the returned stats.
pub fn archive_project(root: &Path, output_name: &str) -> Result<ArchiveStats> {
    let output_path = root.join(output_name);
    let mut writer = ArchiveWriter::create(&output_path)?;
    let mut stats = ArchiveStats::default();

    for entry in walk_project(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Warning: Skipping unreadable entry: {err}");
                stats.files_failed += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path == output_path {
            continue;
        }
        // Best-effort guard against stray archives from earlier runs
        if entry.file_name().to_string_lossy().ends_with(ARCHIVE_SUFFIX) {
            continue;
        }

        let entry_name = match zip_entry_name(root, path) {
            Ok(name) => name,
            Err(err) => {
                eprintln!("Warning: Could not archive {}: {err}", path.display());
                stats.files_failed += 1;
                continue;
            }
        };

        match writer.add_file(&entry_name, path) {
            Ok(()) => {
                stats.files_archived += 1;
                if stats.files_archived % PROGRESS_INTERVAL == 0 {
                    println!("Archived {} files...", stats.files_archived);
                }
            }
            Err(err) => {
                eprintln!("Warning: Could not archive {}: {err:#}", path.display());
                stats.files_failed += 1;
            }
        }
    }

    writer.finish()?;
    Ok(stats)
}
