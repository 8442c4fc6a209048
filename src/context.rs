//! Service context bundling all port trait objects.

use crate::adapters::catalog::CatalogMetadata;
use crate::adapters::live::archive::ZipArchiveWriter;
use crate::adapters::live::compiler::JavacCompiler;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::config::Settings;
use crate::error::ImplError;
use crate::ports::archive::ArchiveWriter;
use crate::ports::compiler::JavaCompiler;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;
use crate::ports::metadata::TypeMetadata;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests build the
/// struct directly with in-memory or scripted adapters.
pub struct ServiceContext {
    /// Type metadata queries.
    pub metadata: Box<dyn TypeMetadata>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Java compiler.
    pub compiler: Box<dyn JavaCompiler>,
    /// Jar writer.
    pub archive: Box<dyn ArchiveWriter>,
    /// ID generator for scratch workspace names.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context: real disk, `javac`, zip jars, and metadata
    /// loaded from the configured catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Metadata`] if a catalog cannot be loaded.
    pub fn live(settings: &Settings) -> Result<Self, ImplError> {
        let fs = LiveFileSystem;
        let metadata = CatalogMetadata::load(&fs, &settings.catalogs)?;
        Ok(Self {
            metadata: Box::new(metadata),
            fs: Box::new(fs),
            compiler: Box::new(JavacCompiler::new(settings.javac.clone())),
            archive: Box::new(ZipArchiveWriter),
            id_gen: Box::new(LiveIdGenerator::new()),
        })
    }
}
