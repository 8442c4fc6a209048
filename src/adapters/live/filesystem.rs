//! Live filesystem adapter using `std::fs`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PortError;
use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), PortError> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn create(&self, path: &Path) -> Result<Box<dyn Write + Send>, PortError> {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, PortError> {
        Ok(std::fs::read(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_file(&self, path: &Path) -> Result<(), PortError> {
        Ok(std::fs::remove_file(path)?)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), PortError> {
        if !path.exists() {
            return Ok(());
        }
        Ok(std::fs::remove_dir_all(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_reads_and_removes_tree() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LiveFileSystem;
        let nested = dir.path().join("a/b");
        fs.create_dir_all(&nested).unwrap();

        let file = nested.join("C.java");
        {
            let mut out = fs.create(&file).unwrap();
            out.write_all(b"class C {}").unwrap();
            out.flush().unwrap();
        }
        assert_eq!(fs.read(&file).unwrap(), b"class C {}");

        let root = dir.path().join("a");
        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn removing_missing_tree_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LiveFileSystem.remove_dir_all(&dir.path().join("missing")).is_ok());
    }
}
