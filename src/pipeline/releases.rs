//! Remote release feed synchronization.

use std::ffi::OsString;

use crate::error::{PackagerError, Result};
use crate::metadata::App;

use super::exec;
use super::tools::{Tool, Toolchain};

/// Pull down the existing release feed so the release tool can compute
/// delta packages against prior versions.
///
/// Without a configured feed the stage does no work; it still yields once
/// so every stage suspends exactly like its neighbors. A sync failure is
/// fatal: the feed must be consistent before a new setup executable is
/// produced.
pub async fn sync(app: &App, tools: &Toolchain) -> Result<()> {
    let Some(remote) = &app.remote_releases else {
        tokio::task::yield_now().await;
        return Ok(());
    };

    let sync_releases = tools.require(Tool::SyncReleases)?;
    log::info!("Syncing releases from {remote}");

    let args: Vec<OsString> = vec![
        "-u".into(),
        remote.into(),
        "-r".into(),
        app.out.clone().into(),
    ];
    exec::run(&sync_releases, &args, app.tool_timeout)
        .await
        .map_err(PackagerError::sync)
}
