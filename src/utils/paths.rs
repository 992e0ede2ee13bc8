use std::path::{Component, Path};

use anyhow::{Result, bail};

/// Converts a file path into the entry name stored in the archive.
///
/// The path is made relative to `root` and joined with forward slashes so the
/// archive extracts to the same layout on any platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use project_tidy::zip_entry_name;
///
/// let name = zip_entry_name(Path::new("/proj"), Path::new("/proj/src/main.rs")).unwrap();
/// assert_eq!(name, "src/main.rs");
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `path` is not located under `root`
/// - the relative path contains `..` or other non-normal components
/// - a component is not valid UTF-8 (archive entry names are text)
pub fn zip_entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => bail!("Path is not under the walk root: {}", path.display()),
    };

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => match part.to_str() {
                Some(s) => parts.push(s),
                None => bail!("Non-UTF8 path component in {}", path.display()),
            },
            // CurDir shows up for "." roots; anything else escapes the tree
            Component::CurDir => continue,
            _ => bail!("Refusing non-normal path component in {}", path.display()),
        }
    }

    if parts.is_empty() {
        bail!("Path resolves to the walk root itself: {}", path.display());
    }

    Ok(parts.join("/"))
}
