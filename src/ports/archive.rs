//! Archive port for packaging compiled output.

use std::path::Path;

use crate::error::PortError;

/// A file stored in an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path inside the archive, `/`-separated.
    pub path: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Writes jar archives.
pub trait ArchiveWriter: Send + Sync {
    /// Writes a new archive at `destination` holding a manifest with the
    /// given main attributes followed by `entries`.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be written.
    fn write_archive(
        &self,
        destination: &Path,
        manifest: &[(String, String)],
        entries: &[ArchiveEntry],
    ) -> Result<(), PortError>;
}
