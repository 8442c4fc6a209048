//! Filesystem port for file I/O operations.

use std::io::Write;
use std::path::Path;

use crate::error::PortError;

/// Provides filesystem access for the synthesizer and the build pipeline.
pub trait FileSystem: Send + Sync {
    /// Creates a directory and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), PortError>;

    /// Opens a file for writing, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn create(&self, path: &Path) -> Result<Box<dyn Write + Send>, PortError>;

    /// Reads the entire contents of a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read(&self, path: &Path) -> Result<Vec<u8>, PortError>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Removes a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<(), PortError>;

    /// Removes a directory tree, files before the directories holding them.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> Result<(), PortError>;
}
