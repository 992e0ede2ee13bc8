use std::path::Path;

use walkdir::{DirEntry, WalkDir};

/// Directory names pruned from the walk at every depth.
///
/// Matching is by exact name, not by path, so e.g. a nested
/// `packages/foo/node_modules` is pruned just like the top-level one.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    ".firebase",
    "playwright-report",
    "test-results",
    ".vercel",
    ".idx",
];

/// Returns `true` if the entry is a directory that must not be descended into.
///
/// The walk root itself (depth 0) is never excluded, even if the project
/// directory happens to carry an excluded name.
fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Walks the project tree top-down, pruning excluded directories.
///
/// Pruned subtrees are never entered, so a huge `node_modules` costs nothing.
/// Directory entries are still yielded; callers filter for files.
pub fn walk_project(root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root).into_iter().filter_entry(|entry| !is_excluded_dir(entry))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn collect_file_names(root: &Path) -> Vec<String> {
        let mut names: Vec<String> = walk_project(root)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_walk_skips_excluded_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules").join("b.txt"), "b").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git").join("c.txt"), "c").unwrap();

        assert_eq!(collect_file_names(dir.path()), vec!["a.txt"]);
    }

    #[test]
    fn test_walk_prunes_nested_excluded_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("packages").join("app").join("node_modules");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("dep.js"), "x").unwrap();
        fs::write(dir.path().join("packages").join("keep.txt"), "k").unwrap();

        assert_eq!(collect_file_names(dir.path()), vec!["keep.txt"]);
    }

    #[test]
    fn test_walk_keeps_files_named_like_excluded_dirs() {
        // Exclusion applies to directories only
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("node_modules"), "just a file").unwrap();

        assert_eq!(collect_file_names(dir.path()), vec!["node_modules"]);
    }

    #[test]
    fn test_walk_descends_into_ordinary_hidden_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".github")).unwrap();
        fs::write(dir.path().join(".github").join("workflow.yml"), "w").unwrap();

        assert_eq!(collect_file_names(dir.path()), vec!["workflow.yml"]);
    }
}
