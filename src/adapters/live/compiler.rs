//! Live compiler adapter running `javac` as a child process.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::PortError;
use crate::ports::compiler::{CompileOutput, CompileRequest, JavaCompiler};

/// Runs the JDK's `javac`.
pub struct JavacCompiler {
    javac: Option<PathBuf>,
}

impl JavacCompiler {
    /// Uses `javac` when given, otherwise searches `PATH` and `JAVA_HOME`.
    #[must_use]
    pub fn new(javac: Option<PathBuf>) -> Self {
        Self { javac: javac.or_else(locate_javac) }
    }

    /// The executable that will be run, if one was found.
    #[must_use]
    pub fn executable(&self) -> Option<&Path> {
        self.javac.as_deref()
    }
}

fn locate_javac() -> Option<PathBuf> {
    which::which("javac").ok().or_else(|| {
        let home = PathBuf::from(env::var_os("JAVA_HOME")?);
        let exe = if cfg!(windows) { "javac.exe" } else { "javac" };
        let candidate = home.join("bin").join(exe);
        candidate.is_file().then_some(candidate)
    })
}

impl JavaCompiler for JavacCompiler {
    fn compile(&self, request: &CompileRequest) -> Result<CompileOutput, PortError> {
        let javac = self
            .javac
            .as_deref()
            .ok_or("unable to locate 'javac'; set IMPLEMENT_JAVAC or JAVA_HOME")?;

        let mut cmd = Command::new(javac);
        cmd.arg("-encoding").arg("US-ASCII");
        cmd.arg("-d").arg(&request.output_dir);
        if !request.classpath.is_empty() {
            cmd.arg("-cp").arg(env::join_paths(&request.classpath)?);
        }
        cmd.args(&request.sources);

        debug!(javac = %javac.display(), sources = request.sources.len(), "running compiler");
        let output = cmd.output()?;

        let mut diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();
        diagnostics.push_str(&String::from_utf8_lossy(&output.stdout));
        Ok(CompileOutput { exit_code: output.status.code().unwrap_or(-1), diagnostics })
    }
}
