//! Project Tidy - Housekeeping utilities for a web project checkout
//!
//! This library provides two independent maintenance operations for a project
//! directory:
//!
//! - Sanitizing a `.env.local` file in place (stripping encoding artifacts and
//!   rewriting the Google Maps API key entry)
//! - Archiving the project tree into a compressed `.zip` snapshot, skipping
//!   dependency and build-output directories
//!
//! # Example
//!
//! ```no_run
//! use project_tidy::archive_project;
//! use std::path::Path;
//!
//! let stats = archive_project(Path::new("."), "project_backup.zip")?;
//! println!("Archived {} files", stats.files_archived);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod archiver;
pub mod cli;
pub mod sanitizer;
pub mod utils;

// Re-export commonly used types
pub use archiver::{ArchiveStats, DEFAULT_ARCHIVE_NAME, archive_project};
pub use sanitizer::{ENV_FILE_NAME, SanitizeOutcome, sanitize_env_file};
pub use utils::paths::zip_entry_name;
