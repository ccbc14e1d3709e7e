//! Per-build temporary workspace.

use std::path::PathBuf;

use crate::error::{PackagerError, Result};
use crate::metadata::App;

/// Intermediate file locations for one build invocation.
///
/// The directory is uniquely named and never shared between builds.
/// Nothing deletes it automatically; a failed build leaves it behind for
/// inspection and cleanup is the caller's concern.
#[derive(Debug)]
pub struct Workspace {
    /// The temporary directory itself
    pub root: PathBuf,
    /// Where the rendered package description goes
    pub nuspec_path: PathBuf,
    /// Where the packaging tool drops the archive
    pub nupkg_path: PathBuf,
}

/// Create the workspace directory and fix the intermediate paths that
/// depend on it.
pub async fn provision(app: &App) -> Result<Workspace> {
    let dir = tempfile::Builder::new()
        .prefix("squirrel-packager-")
        .tempdir()
        .map_err(|source| PackagerError::Workspace { source })?;
    let root = dir.keep();
    log::debug!("provisioned workspace {}", root.display());

    let nuspec_path = root.join(app.nuspec_filename());
    let nupkg_path = root.join(app.nupkg_filename());
    Ok(Workspace {
        root,
        nuspec_path,
        nupkg_path,
    })
}
