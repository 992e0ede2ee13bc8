//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for laying out temporary project directory trees
pub struct ProjectDirBuilder {
    temp_dir: TempDir,
}

impl ProjectDirBuilder {
    /// Create a new builder with an empty project directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the project directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with the given relative path and content, creating parents
    pub fn with_file(self, relative: &str, content: &[u8]) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Add an empty directory with the given relative path
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(relative))
            .expect("Failed to create directory");
        self
    }

    /// Add a `.env.local` file with the given content
    pub fn with_env_file(self, content: &[u8]) -> Self {
        self.with_file(".env.local", content)
    }

    /// Finish building and return the TempDir (kept alive by the caller)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Read the sorted entry names of a zip archive
pub fn archive_entry_names(archive_path: &Path) -> Vec<String> {
    let file = fs::File::open(archive_path).expect("Failed to open archive");
    let archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

/// Extract a zip archive into the given directory, creating parents
pub fn extract_archive(archive_path: &Path, target: &Path) -> Vec<PathBuf> {
    let file = fs::File::open(archive_path).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut extracted = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).expect("Failed to read entry");
        let out_path = target.join(entry.name());
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        let mut out = fs::File::create(&out_path).expect("Failed to create output file");
        std::io::copy(&mut entry, &mut out).expect("Failed to extract entry");
        extracted.push(out_path);
    }

    extracted
}
