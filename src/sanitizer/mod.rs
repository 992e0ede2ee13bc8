//! In-place sanitizing of the project's `.env.local` file.
//!
//! # Error Handling Strategy
//!
//! - **Absent input**: a missing `.env.local` is a success no-op, not an error.
//!   Running the command in a checkout that never had the file must be safe.
//! - **Decode loss**: byte sequences that are not valid UTF-8 are silently
//!   discarded. The file is best-effort text, not byte-exact data.
//! - **Filesystem errors**: read and write failures propagate to the caller
//!   with context attached; nothing is retried and no backup of the previous
//!   content is kept.

pub mod content;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use content::{MAPS_API_KEY, MAPS_API_KEY_VALUE, sanitize_content};

/// The fixed file name operated on, relative to the invocation directory.
pub const ENV_FILE_NAME: &str = ".env.local";

/// Result of a sanitizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeOutcome {
    /// The file does not exist; nothing was done.
    Missing,
    /// The file was rewritten; carries the number of lines written.
    Rewritten { lines: usize },
}

/// Sanitize an environment file in place.
///
/// Reads the file as raw bytes, runs [`sanitize_content`] over it, and writes
/// the cleaned text back as UTF-8 with a single trailing newline and no
/// byte-order mark. The original content is overwritten without a backup.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or written. A
/// missing file is not an error ([`SanitizeOutcome::Missing`]).
pub fn sanitize_env_file(path: &Path) -> Result<SanitizeOutcome> {
    if !path.exists() {
        return Ok(SanitizeOutcome::Missing);
    }

    let raw = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let cleaned = sanitize_content(&raw)?;
    fs::write(path, &cleaned)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(SanitizeOutcome::Rewritten { lines: cleaned.lines().count() })
}
