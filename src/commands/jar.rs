//! `implement -jar <TYPE> <OUTPUT_JAR>`: generate, compile and package.

use std::path::Path;

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::ImplError;
use crate::pipeline::{JarBuilder, JarOutcome};
use crate::synthesis::Synthesis;

/// Rejects archive destinations that cannot be written as a file.
///
/// # Errors
///
/// Returns [`ImplError::InvalidPath`] for an empty path, a path containing
/// NUL, or an existing directory.
pub fn check_jar_path(ctx: &ServiceContext, jar: &Path) -> Result<(), ImplError> {
    let invalid = |reason: &str| ImplError::InvalidPath { path: jar.to_path_buf(), reason: reason.into() };
    if jar.as_os_str().is_empty() {
        return Err(invalid("empty path"));
    }
    if jar.to_string_lossy().contains('\0') {
        return Err(invalid("path contains a NUL character"));
    }
    if ctx.fs.is_dir(jar) {
        return Err(invalid("is a directory"));
    }
    Ok(())
}

/// Execute the jar command.
///
/// # Errors
///
/// Returns any argument, resolution, synthesis, compilation or I/O error.
pub fn run(
    ctx: &ServiceContext,
    settings: &Settings,
    type_name: &str,
    jar: &Path,
) -> Result<JarOutcome, ImplError> {
    check_jar_path(ctx, jar)?;
    let synthesis = Synthesis::for_name(ctx.metadata.as_ref(), type_name)?;
    JarBuilder::new(ctx, &settings.scratch_root, &settings.classpath).build(&synthesis, jar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::CatalogMetadata;
    use crate::adapters::live::archive::ZipArchiveWriter;
    use crate::adapters::live::compiler::JavacCompiler;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::adapters::live::id_gen::LiveIdGenerator;

    fn settings(scratch: &Path) -> Settings {
        Settings {
            catalogs: Vec::new(),
            classpath: Vec::new(),
            javac: None,
            scratch_root: scratch.to_path_buf(),
        }
    }

    fn live_context() -> ServiceContext {
        ServiceContext {
            metadata: Box::new(CatalogMetadata::with_prelude()),
            fs: Box::new(LiveFileSystem),
            compiler: Box::new(JavacCompiler::new(None)),
            archive: Box::new(ZipArchiveWriter),
            id_gen: Box::new(LiveIdGenerator::new()),
        }
    }

    #[test]
    fn directory_destination_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&live_context(), &settings(dir.path()), "java.lang.Runnable", dir.path())
            .unwrap_err();
        assert!(matches!(err, ImplError::InvalidPath { .. }));
    }

    #[test]
    fn structural_rejection_happens_before_any_scratch_work() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("scratch");
        let err = run(&live_context(), &settings(&scratch), "int", &dir.path().join("int.jar"))
            .unwrap_err();
        assert!(matches!(err, ImplError::Structural { .. }));
        assert!(!scratch.exists());
    }
}
