//! Live jar writer built on the `zip` crate.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PortError;
use crate::ports::archive::{ArchiveEntry, ArchiveWriter};

/// Location of the manifest inside a jar.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Writes jar files: a manifest entry followed by the given entries.
pub struct ZipArchiveWriter;

/// Renders manifest main attributes in the jar manifest format.
#[must_use]
pub fn render_manifest(attributes: &[(String, String)]) -> String {
    let mut text = String::new();
    for (name, value) in attributes {
        text.push_str(name);
        text.push_str(": ");
        text.push_str(value);
        text.push_str("\r\n");
    }
    text.push_str("\r\n");
    text
}

fn write_jar(
    destination: &Path,
    manifest: &[(String, String)],
    entries: &[ArchiveEntry],
) -> Result<(), PortError> {
    let mut writer = ZipWriter::new(File::create(destination)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(MANIFEST_PATH, options)?;
    writer.write_all(render_manifest(manifest).as_bytes())?;

    for entry in entries {
        writer.start_file(entry.path.as_str(), options)?;
        writer.write_all(&entry.bytes)?;
    }
    writer.finish()?;
    Ok(())
}

impl ArchiveWriter for ZipArchiveWriter {
    fn write_archive(
        &self,
        destination: &Path,
        manifest: &[(String, String)],
        entries: &[ArchiveEntry],
    ) -> Result<(), PortError> {
        let result = write_jar(destination, manifest, entries);
        if result.is_err() {
            let _ = std::fs::remove_file(destination);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn writes_manifest_then_entries() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("out.jar");
        let manifest = vec![("Manifest-Version".to_string(), "1.0".to_string())];
        let entries =
            vec![ArchiveEntry { path: "a/BImpl.class".into(), bytes: vec![0xCA, 0xFE, 0xBA, 0xBE] }];

        ZipArchiveWriter.write_archive(&jar, &manifest, &entries).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&jar).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), MANIFEST_PATH);

        let mut text = String::new();
        archive.by_name(MANIFEST_PATH).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "Manifest-Version: 1.0\r\n\r\n");

        let mut bytes = Vec::new();
        archive.by_name("a/BImpl.class").unwrap().read_to_end(&mut bytes).unwrap();
        assert_eq!(bytes, vec![0xCA, 0xFE, 0xBA, 0xBE]);
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("missing/out.jar");
        assert!(ZipArchiveWriter.write_archive(&jar, &[], &[]).is_err());
        assert!(!jar.exists());
    }
}
