//! Per-invocation synthesis plan and source file output.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::emit::{self, UnicodeEscaper};
use crate::error::{ImplError, PortError};
use crate::forwarder;
use crate::model::TargetType;
use crate::obligation::{ConstructorObligation, ObligationSet};
use crate::ports::filesystem::FileSystem;
use crate::ports::metadata::TypeMetadata;
use crate::surface;

/// Suffix appended to the target's simple name to form the generated name.
pub const IMPL_SUFFIX: &str = "Impl";

/// Everything needed to emit one implementation.
///
/// Built once per invocation and never shared, so repeated or concurrent
/// invocations cannot observe each other's target.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// The type being implemented.
    pub target: TargetType,
    /// Simple name of the generated class.
    pub generated_name: String,
    /// Constructors to forward, in declaration order.
    pub constructors: Vec<ConstructorObligation>,
    /// Abstract members to stub.
    pub members: ObligationSet,
}

impl Synthesis {
    /// Validates `target` and gathers its obligations.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Structural`], [`ImplError::NoAccessibleConstructor`]
    /// or [`ImplError::Resolution`]; nothing is written in any case.
    pub fn plan(metadata: &dyn TypeMetadata, target: TargetType) -> Result<Self, ImplError> {
        let surface = surface::collect(metadata, &target)?;
        let constructors = forwarder::forwarders(&target, &surface.constructors)?;
        let generated_name = format!("{}{IMPL_SUFFIX}", target.simple_name());
        Ok(Self { target, generated_name, constructors, members: surface.members })
    }

    /// Resolves `name` and plans its implementation.
    ///
    /// # Errors
    ///
    /// As [`Synthesis::plan`], plus [`ImplError::Resolution`] for unknown names.
    pub fn for_name(metadata: &dyn TypeMetadata, name: &str) -> Result<Self, ImplError> {
        let target = metadata.resolve(name)?;
        Self::plan(metadata, target)
    }

    /// `root` extended with one directory per package segment.
    #[must_use]
    pub fn package_dir(&self, root: &Path) -> PathBuf {
        let mut dir = root.to_path_buf();
        if let Some(package) = self.target.package() {
            dir.extend(package.split('.'));
        }
        dir
    }

    /// Where the generated source lives under `root`.
    #[must_use]
    pub fn source_path(&self, root: &Path) -> PathBuf {
        self.package_dir(root).join(format!("{}.java", self.generated_name))
    }

    /// Where the compiled class lives under an output root.
    #[must_use]
    pub fn class_path(&self, root: &Path) -> PathBuf {
        self.package_dir(root).join(format!("{}.class", self.generated_name))
    }

    /// The compiled class's path inside an archive, `/`-separated.
    #[must_use]
    pub fn class_entry(&self) -> String {
        match self.target.package() {
            Some(package) => format!("{}/{}.class", package.replace('.', "/"), self.generated_name),
            None => format!("{}.class", self.generated_name),
        }
    }

    /// Renders the source and writes it, escaped, under `root`.
    ///
    /// A partially written file is removed before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Io`] if directories or the file cannot be written.
    pub fn write_source(&self, fs: &dyn FileSystem, root: &Path) -> Result<PathBuf, ImplError> {
        let dir = self.package_dir(root);
        fs.create_dir_all(&dir)
            .map_err(|e| ImplError::io(format!("failed to create {}", dir.display()), e))?;

        let path = self.source_path(root);
        let source = emit::render(self);
        if let Err(e) = write_escaped(fs, &path, &source) {
            if fs.exists(&path) {
                if let Err(cleanup) = fs.remove_file(&path) {
                    warn!(path = %path.display(), error = %cleanup, "failed to remove partial source");
                }
            }
            return Err(ImplError::io(format!("failed to write {}", path.display()), e));
        }

        info!(
            target = %self.target.qualified_name,
            path = %path.display(),
            constructors = self.constructors.len(),
            methods = self.members.len(),
            "wrote implementation"
        );
        Ok(path)
    }
}

fn write_escaped(fs: &dyn FileSystem, path: &Path, source: &str) -> Result<(), PortError> {
    let mut out = UnicodeEscaper::new(fs.create(path)?);
    out.write_text(source)?;
    out.flush()?;
    Ok(())
}
