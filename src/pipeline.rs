//! Build pipeline: synthesize, compile, archive, clean up.
//!
//! Each stage runs once and depends on the previous one succeeding. The
//! scratch workspace is unique to the invocation and is removed whatever the
//! outcome; a failed removal is logged and reported but never turns a
//! finished archive into a failure.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::error::ImplError;
use crate::ports::archive::ArchiveEntry;
use crate::ports::compiler::CompileRequest;
use crate::synthesis::Synthesis;

/// The only manifest attribute written to archives.
pub const MANIFEST_VERSION: (&str, &str) = ("Manifest-Version", "1.0");

/// Prefix of scratch workspace directory names.
const SCRATCH_PREFIX: &str = "implementor-";

/// Pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Write the generated source into the scratch workspace.
    Synthesize,
    /// Run the compiler.
    Compile,
    /// Package the compiled class.
    Archive,
    /// Remove the scratch workspace.
    Cleanup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Synthesize => "synthesize",
            Stage::Compile => "compile",
            Stage::Archive => "archive",
            Stage::Cleanup => "cleanup",
        })
    }
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarOutcome {
    /// The archive that was written.
    pub archive: PathBuf,
    /// Path of the compiled class inside the archive.
    pub entry: String,
    /// Set if the scratch workspace could not be removed.
    pub cleanup_error: Option<String>,
}

/// Builds jars for planned syntheses.
pub struct JarBuilder<'a> {
    ctx: &'a ServiceContext,
    scratch_root: PathBuf,
    classpath: Vec<PathBuf>,
}

impl<'a> JarBuilder<'a> {
    /// Creates a builder placing scratch workspaces under `scratch_root` and
    /// compiling against `classpath`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, scratch_root: &Path, classpath: &[PathBuf]) -> Self {
        Self { ctx, scratch_root: scratch_root.to_path_buf(), classpath: classpath.to_vec() }
    }

    /// Runs every stage for `synthesis`, writing the jar to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Io`] or [`ImplError::Compilation`] from the first
    /// failing stage; no archive is left behind on failure.
    pub fn build(&self, synthesis: &Synthesis, destination: &Path) -> Result<JarOutcome, ImplError> {
        let scratch = self
            .scratch_root
            .join(format!("{SCRATCH_PREFIX}{}", self.ctx.id_gen.generate_id()));
        debug!(scratch = %scratch.display(), "created scratch workspace");

        let result = self.build_in(&scratch, synthesis, destination);

        info!(stage = %Stage::Cleanup, scratch = %scratch.display());
        let cleanup_error = match self.ctx.fs.remove_dir_all(&scratch) {
            Ok(()) => None,
            Err(e) => {
                warn!(scratch = %scratch.display(), error = %e, "failed to remove scratch workspace");
                Some(format!("failed to remove {}: {e}", scratch.display()))
            }
        };

        let entry = result?;
        Ok(JarOutcome { archive: destination.to_path_buf(), entry, cleanup_error })
    }

    fn build_in(
        &self,
        scratch: &Path,
        synthesis: &Synthesis,
        destination: &Path,
    ) -> Result<String, ImplError> {
        let fs = self.ctx.fs.as_ref();

        info!(stage = %Stage::Synthesize, target = %synthesis.target.qualified_name);
        fs.create_dir_all(scratch)
            .map_err(|e| ImplError::io(format!("failed to create {}", scratch.display()), e))?;
        let source = synthesis.write_source(fs, scratch)?;

        info!(stage = %Stage::Compile, source = %source.display());
        let mut classpath = vec![scratch.to_path_buf()];
        classpath.extend(self.classpath.iter().cloned());
        let request =
            CompileRequest { sources: vec![source.clone()], classpath, output_dir: scratch.to_path_buf() };
        let output = self
            .ctx
            .compiler
            .compile(&request)
            .map_err(|e| ImplError::io("failed to run the compiler", e))?;
        if !output.succeeded() {
            return Err(ImplError::Compilation {
                source_file: source,
                exit_code: output.exit_code,
                diagnostics: output.diagnostics,
            });
        }

        info!(stage = %Stage::Archive, archive = %destination.display());
        let class_file = synthesis.class_path(scratch);
        let bytes = fs
            .read(&class_file)
            .map_err(|e| ImplError::io(format!("failed to read {}", class_file.display()), e))?;
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs.create_dir_all(parent)
                .map_err(|e| ImplError::io(format!("failed to create {}", parent.display()), e))?;
        }
        let entry = synthesis.class_entry();
        let manifest = [(MANIFEST_VERSION.0.to_string(), MANIFEST_VERSION.1.to_string())];
        self.ctx
            .archive
            .write_archive(destination, &manifest, &[ArchiveEntry { path: entry.clone(), bytes }])
            .map_err(|e| ImplError::io(format!("failed to write {}", destination.display()), e))?;
        Ok(entry)
    }
}
