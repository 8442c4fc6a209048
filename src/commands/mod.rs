//! Command dispatch and handlers.

pub mod implement;
pub mod jar;

use crate::cli::{Cli, Invocation};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::ImplError;

/// Dispatch a parsed command line to its handler.
///
/// # Errors
///
/// Returns the handler's error, or an argument or metadata error raised
/// before any handler runs.
pub fn dispatch(cli: &Cli) -> Result<(), ImplError> {
    let invocation = cli.invocation()?;
    let settings = Settings::from_cli(cli);
    let ctx = ServiceContext::live(&settings)?;
    dispatch_with_context(&invocation, &ctx, &settings)
}

/// Dispatch an invocation with the given service context.
///
/// # Errors
///
/// Returns the handler's error.
pub fn dispatch_with_context(
    invocation: &Invocation,
    ctx: &ServiceContext,
    settings: &Settings,
) -> Result<(), ImplError> {
    match invocation {
        Invocation::Source { type_name, output_dir } => {
            let path = implement::run(ctx, type_name, output_dir)?;
            println!("{}", path.display());
        }
        Invocation::Jar { type_name, jar_path } => {
            let outcome = jar::run(ctx, settings, type_name, jar_path)?;
            if let Some(cleanup) = &outcome.cleanup_error {
                println!("Warning: {cleanup}");
            }
            println!("{}", outcome.archive.display());
        }
    }
    Ok(())
}
