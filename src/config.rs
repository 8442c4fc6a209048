//! Runtime settings resolved from the command line and environment.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Environment variable holding a path list of catalog files.
pub const CATALOG_ENV: &str = "IMPLEMENT_CATALOG";

/// Catalog picked up from the working directory when nothing else is configured.
pub const DEFAULT_CATALOG: &str = "implementor.yaml";

/// Settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Catalog files, loaded in order after the prelude.
    pub catalogs: Vec<PathBuf>,
    /// Extra classpath entries for compilation.
    pub classpath: Vec<PathBuf>,
    /// Explicit `javac`; `None` means search `PATH` and `JAVA_HOME`.
    pub javac: Option<PathBuf>,
    /// Parent directory of scratch workspaces.
    pub scratch_root: PathBuf,
}

impl Settings {
    /// Resolves settings from parsed arguments and the process environment.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, env::var_os(CATALOG_ENV), Path::new("."))
    }

    /// Resolves settings with an explicit catalog variable and working directory.
    ///
    /// Catalogs come from `--catalog`, else the catalog variable, else
    /// `implementor.yaml` in `cwd` if present.
    #[must_use]
    pub fn resolve(cli: &Cli, catalog_env: Option<OsString>, cwd: &Path) -> Self {
        let catalogs = if !cli.catalogs.is_empty() {
            cli.catalogs.clone()
        } else if let Some(list) = catalog_env.filter(|v| !v.is_empty()) {
            env::split_paths(&list).collect()
        } else {
            let fallback = cwd.join(DEFAULT_CATALOG);
            if fallback.is_file() {
                vec![fallback]
            } else {
                Vec::new()
            }
        };

        let classpath = cli
            .classpath
            .as_ref()
            .map(|list| env::split_paths(list).filter(|p| !p.as_os_str().is_empty()).collect())
            .unwrap_or_default();

        Self {
            catalogs,
            classpath,
            javac: cli.javac.clone(),
            scratch_root: cli.scratch_dir.clone().unwrap_or_else(env::temp_dir),
        }
    }
}
