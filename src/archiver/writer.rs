use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

/// Counters reported at the end of an archive run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveStats {
    /// Files successfully written into the archive.
    pub files_archived: usize,
    /// Files that were listed but could not be archived.
    pub files_failed: usize,
}

/// Streaming ZIP writer over an exclusively held output file.
///
/// Entries are compressed with Deflate and flushed incrementally; the whole
/// tree is never buffered in memory.
pub struct ArchiveWriter {
    zip: ZipWriter<BufWriter<File>>,
}

impl ArchiveWriter {
    /// Create (or overwrite) the output file and wrap it in a ZIP writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be opened. The permission case
    /// gets a dedicated message, since the usual cause is the previous archive
    /// still being open in another program.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|err| {
            if err.kind() == ErrorKind::PermissionDenied {
                anyhow!(
                    "Permission denied opening {}. Make sure it is not open in another program.",
                    path.display()
                )
            } else {
                anyhow!(err).context(format!("Failed to create {}", path.display()))
            }
        })?;

        Ok(Self { zip: ZipWriter::new(BufWriter::new(file)) })
    }

    /// Stream one file into the archive under the given entry name.
    ///
    /// The source is opened before the entry is started, so a file that
    /// vanished between listing and reading does not leave an empty entry
    /// behind.
    pub fn add_file(&mut self, entry_name: &str, path: &Path) -> Result<()> {
        let mut source =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip
            .start_file(entry_name, options)
            .with_context(|| format!("Failed to start archive entry {entry_name}"))?;
        io::copy(&mut source, &mut self.zip)
            .with_context(|| format!("Failed to compress {}", path.display()))?;

        Ok(())
    }

    /// Write the central directory and flush the output file.
    pub fn finish(mut self) -> Result<()> {
        let mut inner = self.zip.finish().context("Failed to finalize archive")?;
        inner.flush().context("Failed to flush archive to disk")?;
        Ok(())
    }
}
