//! Compiler port for turning generated source into class files.

use std::path::PathBuf;

use crate::error::PortError;

/// One compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    /// Source files to compile.
    pub sources: Vec<PathBuf>,
    /// Classpath entries, in lookup order.
    pub classpath: Vec<PathBuf>,
    /// Directory receiving the compiled classes.
    pub output_dir: PathBuf,
}

/// The outcome of a compiler run.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The exit code of the compiler; non-zero means failure.
    pub exit_code: i32,
    /// Diagnostics printed by the compiler.
    pub diagnostics: String,
}

impl CompileOutput {
    /// Returns `true` if the compiler reported success.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Compiles Java source files.
pub trait JavaCompiler: Send + Sync {
    /// Runs the compiler once.
    ///
    /// # Errors
    ///
    /// Returns an error only if the compiler could not be run at all;
    /// rejected sources are reported through [`CompileOutput::exit_code`].
    fn compile(&self, request: &CompileRequest) -> Result<CompileOutput, PortError>;
}
