//! Error taxonomy for synthesis and the build pipeline.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Why a target can never be implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralReason {
    /// Primitive types and `void`.
    Primitive,
    /// Array types.
    Array,
    /// The universal enum base type.
    EnumBase,
    /// `final` classes, including enums.
    Final,
}

impl fmt::Display for StructuralReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StructuralReason::Primitive => "primitive types cannot be implemented",
            StructuralReason::Array => "array types cannot be implemented",
            StructuralReason::EnumBase => "the enum base type cannot be implemented",
            StructuralReason::Final => "final types cannot be extended",
        })
    }
}

/// Failure categories reported on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Malformed arguments.
    Argument,
    /// Unusable output path.
    InvalidPath,
    /// Target type not found.
    ClassNotFound,
    /// Anything that went wrong while implementing.
    Implementation,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureCategory::Argument => "Argument error",
            FailureCategory::InvalidPath => "Invalid path",
            FailureCategory::ClassNotFound => "No such class",
            FailureCategory::Implementation => "Implementation error",
        })
    }
}

/// Every way an invocation can fail.
#[derive(Debug, Error)]
pub enum ImplError {
    /// Command-line arguments malformed or out of count range.
    #[error("{0}")]
    Argument(String),

    /// An output path that cannot be used.
    #[error("{}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// The named type, or one of its ancestors, cannot be located.
    #[error("{name}")]
    Resolution {
        /// The name that failed to resolve.
        name: String,
    },

    /// Metadata that exists but cannot be read or parsed.
    #[error("invalid type metadata in {}: {reason}", path.display())]
    Metadata {
        /// The catalog file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// A superclass chain that leads back to a type already on it.
    #[error("circular superclass chain through {name}")]
    InheritanceCycle {
        /// The first type seen twice.
        name: String,
    },

    /// The target is structurally impossible to implement.
    #[error("cannot implement {name}: {reason}")]
    Structural {
        /// The target's name.
        name: String,
        /// Why it was rejected.
        reason: StructuralReason,
    },

    /// A class target with only private constructors.
    #[error("cannot implement {name}: no accessible constructor")]
    NoAccessibleConstructor {
        /// The target's name.
        name: String,
    },

    /// Writing source, compiled output or the archive failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being done.
        context: String,
        /// The underlying failure.
        #[source]
        source: PortError,
    },

    /// The external compiler rejected the generated source.
    #[error("compilation of {} failed (exit code {exit_code}){}", source_file.display(), format_diagnostics(diagnostics))]
    Compilation {
        /// The generated source file.
        source_file: PathBuf,
        /// Compiler exit code.
        exit_code: i32,
        /// Captured compiler output.
        diagnostics: String,
    },
}

fn format_diagnostics(diagnostics: &str) -> String {
    let trimmed = diagnostics.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

impl ImplError {
    /// Wraps a port failure with a description of the attempted operation.
    pub fn io(context: impl Into<String>, source: impl Into<PortError>) -> Self {
        ImplError::Io { context: context.into(), source: source.into() }
    }

    /// The command-line category this failure is reported under.
    #[must_use]
    pub fn category(&self) -> FailureCategory {
        match self {
            ImplError::Argument(_) => FailureCategory::Argument,
            ImplError::InvalidPath { .. } => FailureCategory::InvalidPath,
            ImplError::Resolution { .. } => FailureCategory::ClassNotFound,
            ImplError::Metadata { .. }
            | ImplError::InheritanceCycle { .. }
            | ImplError::Structural { .. }
            | ImplError::NoAccessibleConstructor { .. }
            | ImplError::Io { .. }
            | ImplError::Compilation { .. } => FailureCategory::Implementation,
        }
    }
}
