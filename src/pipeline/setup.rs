//! Setup executable production.

use std::ffi::OsString;
use std::path::Path;

use path_absolutize::Absolutize;

use crate::error::{PackagerError, Result};
use crate::metadata::{App, Secret};

use super::exec;
use super::tools::{Tool, Toolchain};
use super::workspace::Workspace;

/// Releasify the package archive and move the resulting setup executable
/// to its final name in the output directory.
pub async fn releasify(app: &App, workspace: &Workspace, tools: &Toolchain) -> Result<()> {
    let update_com = tools.require(Tool::UpdateCom)?;

    let mut args: Vec<OsString> = vec![
        "--releasify".into(),
        workspace.nupkg_path.clone().into(),
        "--releaseDir".into(),
        app.out.clone().into(),
        "--loadingGif".into(),
        app.loading_gif.clone().into(),
    ];

    if let Some(params) = sign_with_params(app) {
        args.push("--signWithParams".into());
        args.push(params.expose().into());
    }

    if let Some(icon) = &app.setup_icon {
        args.push("--setupIcon".into());
        args.push(absolute_os(icon));
    }

    exec::run(&update_com, &args, app.tool_timeout)
        .await
        .map_err(PackagerError::release)?;

    // The release tool always writes `Setup.exe`; give it the branded name.
    let produced = app.out.join("Setup.exe");
    let setup_path = app.setup_path();
    tokio::fs::rename(&produced, &setup_path)
        .await
        .map_err(|e| {
            PackagerError::release(format!(
                "cannot rename {} to {}: {e}",
                produced.display(),
                setup_path.display()
            ))
        })?;

    log::info!("✓ Created {}", setup_path.display());
    Ok(())
}

/// Signing parameters for the release tool.
///
/// An explicit pre-formatted string wins. Otherwise a certificate path and
/// password pair formats to `/a /f "<cert>" /p "<password>"`, with the
/// certificate path absolutized. Anything less than a full pair means no
/// signing.
pub fn sign_with_params(app: &App) -> Option<Secret> {
    if let Some(params) = &app.sign_with_params {
        return Some(params.clone());
    }
    match (&app.cert_path, &app.cert_password) {
        (Some(cert), Some(password)) => Some(Secret::new(format!(
            r#"/a /f "{}" /p "{}""#,
            absolute_display(cert),
            password.expose()
        ))),
        _ => None,
    }
}

fn absolute_display(path: &Path) -> String {
    path.absolutize()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

fn absolute_os(path: &Path) -> OsString {
    path.absolutize()
        .map(|p| p.into_owned().into_os_string())
        .unwrap_or_else(|_| path.as_os_str().to_owned())
}
