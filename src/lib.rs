//! Core library entry for the `implement` CLI.
//!
//! Given a Java interface or abstract class, generates `<Name>Impl.java`
//! with forwarding constructors and default-returning method stubs, and
//! optionally compiles and packages it into a jar.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod defaults;
pub mod emit;
pub mod error;
pub mod forwarder;
pub mod model;
pub mod obligation;
pub mod pipeline;
pub mod ports;
pub mod surface;
pub mod synthesis;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::ImplError;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns [`ImplError::Argument`] when argument parsing fails, or the
/// command's own error.
pub fn run<I, T>(args: I) -> Result<(), ImplError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString>,
{
    let cli = match cli::Cli::try_parse_from(cli::normalize_args(args)) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            return Err(ImplError::Argument(first.trim_start_matches("error: ").to_string()));
        }
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::error::ImplError;

    #[test]
    fn run_rejects_missing_arguments() {
        assert!(matches!(run(["implement"]), Err(ImplError::Argument(_))));
        assert!(matches!(run(["implement", "-jar", "a.B"]), Err(ImplError::Argument(_))));
    }

    #[test]
    fn run_rejects_unknown_flags() {
        assert!(matches!(run(["implement", "--bogus", "a.B", "out"]), Err(ImplError::Argument(_))));
    }

    #[test]
    fn run_prints_help() {
        assert!(run(["implement", "--help"]).is_ok());
    }

    #[test]
    fn run_writes_source_for_prelude_type() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        run(["implement", "--scratch-dir", out, "java.lang.Runnable", out]).unwrap();
        assert!(dir.path().join("java/lang/RunnableImpl.java").is_file());
    }
}
