//! `implement <TYPE> <OUTPUT_DIR>`: generate source only.

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::error::ImplError;
use crate::synthesis::Synthesis;

/// Rejects output directories that cannot hold generated source.
///
/// # Errors
///
/// Returns [`ImplError::InvalidPath`] for an empty path, a path containing
/// NUL, or a path naming an existing non-directory.
pub fn check_output_dir(ctx: &ServiceContext, dir: &Path) -> Result<(), ImplError> {
    let invalid = |reason: &str| ImplError::InvalidPath { path: dir.to_path_buf(), reason: reason.into() };
    if dir.as_os_str().is_empty() {
        return Err(invalid("empty path"));
    }
    if dir.to_string_lossy().contains('\0') {
        return Err(invalid("path contains a NUL character"));
    }
    if ctx.fs.exists(dir) && !ctx.fs.is_dir(dir) {
        return Err(invalid("not a directory"));
    }
    Ok(())
}

/// Execute the source-only command, returning the generated file's path.
///
/// # Errors
///
/// Returns any argument, resolution, synthesis or I/O error.
pub fn run(ctx: &ServiceContext, type_name: &str, output_dir: &Path) -> Result<PathBuf, ImplError> {
    check_output_dir(ctx, output_dir)?;
    let synthesis = Synthesis::for_name(ctx.metadata.as_ref(), type_name)?;
    synthesis.write_source(ctx.fs.as_ref(), output_dir)
}
