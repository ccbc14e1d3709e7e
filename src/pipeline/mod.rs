//! Ordered build pipeline turning a resolved record into a setup executable.
//!
//! # Module Organization
//!
//! - `workspace` - per-build temporary directory provisioning
//! - `template` - nuspec template constant and rendering
//! - `nuget` - package description staging and archive production
//! - `releases` - optional remote release feed synchronization
//! - `setup` - releasify invocation, signing arguments, final rename
//! - `tools` - locating the Squirrel.Windows and NuGet binaries
//! - `exec` - external process execution with logging and timeout

mod exec;
mod nuget;
mod releases;
mod setup;
mod template;
mod tools;
mod workspace;

use crate::error::Result;
use crate::metadata::App;

/// Run the build stages strictly in order, stopping at the first failure.
///
/// 1. Provision a fresh uniquely-named workspace.
/// 2. Render the package description, stage the update runtime into the
///    application root, and run the packaging tool.
/// 3. Synchronize the remote release feed when one is configured.
/// 4. Releasify the archive and move the setup executable into place.
///
/// The workspace is left behind on failure so the intermediate files can
/// be inspected.
pub async fn build(app: &App) -> Result<()> {
    log::info!(
        "Building Squirrel.Windows installer for {} {}",
        app.product_name,
        app.version
    );

    let tools = tools::Toolchain::new(app.vendor_dir.clone());

    let workspace = workspace::provision(app).await?;
    nuget::pack(app, &workspace, &tools).await?;
    releases::sync(app, &tools).await?;
    setup::releasify(app, &workspace, &tools).await?;

    Ok(())
}
