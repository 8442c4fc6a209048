//! CLI argument definitions.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::ImplError;

/// Top-level CLI parser for `implement`.
///
/// Usage is `implement <TYPE> <OUTPUT_DIR>` to generate source, or
/// `implement -jar <TYPE> <OUTPUT_JAR>` to also compile and package it.
#[derive(Debug, Parser)]
#[command(
    name = "implement",
    version,
    about = "Generate stub implementations of Java interfaces and abstract classes"
)]
pub struct Cli {
    /// Compile the implementation and package it into a jar.
    #[arg(long)]
    pub jar: bool,

    /// Type metadata catalog (YAML or JSON); may be repeated.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalogs: Vec<PathBuf>,

    /// Classpath used when compiling, in the platform's path-list format.
    #[arg(long, env = "CLASSPATH", value_name = "PATHS")]
    pub classpath: Option<OsString>,

    /// The `javac` executable to use.
    #[arg(long, env = "IMPLEMENT_JAVAC", value_name = "PATH")]
    pub javac: Option<PathBuf>,

    /// Directory under which scratch workspaces are created.
    #[arg(long = "scratch-dir", env = "IMPLEMENT_SCRATCH_DIR", value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// The fully qualified type name followed by the output location.
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// What the operator asked for, once arguments are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Generate source into a directory.
    Source {
        /// Fully qualified type name.
        type_name: String,
        /// Root directory for the generated source.
        output_dir: PathBuf,
    },
    /// Generate, compile and package into a jar.
    Jar {
        /// Fully qualified type name.
        type_name: String,
        /// Destination archive.
        jar_path: PathBuf,
    },
}

impl Cli {
    /// Checks argument counts and forms.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Argument`] for fewer than two or more than three
    /// arguments, or three arguments without a leading `-jar`.
    pub fn invocation(&self) -> Result<Invocation, ImplError> {
        let total = self.args.len() + usize::from(self.jar);
        if total < 2 {
            return Err(ImplError::Argument("Not enough arguments".into()));
        }
        if total > 3 {
            return Err(ImplError::Argument("Too many arguments".into()));
        }
        match (self.jar, self.args.as_slice()) {
            (false, [type_name, output]) => Ok(Invocation::Source {
                type_name: type_name.clone(),
                output_dir: PathBuf::from(output),
            }),
            (true, [type_name, output]) => Ok(Invocation::Jar {
                type_name: type_name.clone(),
                jar_path: PathBuf::from(output),
            }),
            (false, _) => {
                Err(ImplError::Argument("Three arguments require `-jar` as the first one".into()))
            }
            (true, _) => Err(ImplError::Argument("Not enough arguments for -jar".into())),
        }
    }
}

/// Long options that consume the following argument as their value.
const VALUE_OPTIONS: &[&str] = &["--catalog", "--classpath", "--javac", "--scratch-dir"];

/// Rewrites a single-dash `-jar` into the `--jar` flag clap expects.
///
/// Only a `-jar` ahead of the first positional argument counts; options and
/// their values may precede it.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut index = 1;
    while index < args.len() {
        let arg = args[index].to_string_lossy().into_owned();
        if arg == "-jar" {
            args[index] = OsString::from("--jar");
            break;
        }
        if arg == "--" || !arg.starts_with('-') {
            break;
        }
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            index += 1;
        }
        index += 1;
    }
    args
}
