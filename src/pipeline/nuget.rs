//! Package description staging and archive production.

use std::ffi::OsString;

use crate::error::{PackagerError, Result};
use crate::metadata::App;

use super::exec;
use super::template;
use super::tools::{Tool, Toolchain};
use super::workspace::Workspace;

/// Render the package description, stage the update runtime, and run the
/// packaging tool. The archive lands in the workspace.
pub async fn pack(app: &App, workspace: &Workspace, tools: &Toolchain) -> Result<()> {
    let nuget = tools.require(Tool::Nuget)?;
    let update_exe = tools.require(Tool::Update)?;

    let nuspec = template::render_nuspec(app)?;
    log::debug!("nuspec contents:\n{nuspec}");
    tokio::fs::write(&workspace.nuspec_path, &nuspec)
        .await
        .map_err(|e| {
            PackagerError::packaging(format!(
                "cannot write {}: {e}",
                workspace.nuspec_path.display()
            ))
        })?;

    // The update runtime ships inside the package so installed copies can
    // apply future releases. Overwrites any stale copy from a prior build.
    let staged_update = app.path.join("Update.exe");
    tokio::fs::copy(&update_exe, &staged_update)
        .await
        .map_err(|e| {
            PackagerError::packaging(format!(
                "cannot copy {} to {}: {e}",
                update_exe.display(),
                staged_update.display()
            ))
        })?;

    let args: Vec<OsString> = vec![
        "pack".into(),
        workspace.nuspec_path.clone().into(),
        "-BasePath".into(),
        app.path.clone().into(),
        "-OutputDirectory".into(),
        workspace.root.clone().into(),
        "-NoDefaultExcludes".into(),
    ];
    exec::run(&nuget, &args, app.tool_timeout)
        .await
        .map_err(PackagerError::packaging)?;

    log::info!("✓ Created {}", workspace.nupkg_path.display());
    Ok(())
}
