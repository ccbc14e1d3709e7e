//! Shared fixtures for the integration tests: a minimal unpacked
//! application tree and unix shell scripts standing in for the
//! Squirrel.Windows and NuGet binaries.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const FIXTURE_MANIFEST: &str = r#"{
    "name": "Myapp",
    "version": "0.0.0",
    "description": "A fixture Electron app for testing app packaging.",
    "author": { "name": "Arlo Basil" },
    "productName": "MyApp",
    "main": "index.js"
}"#;

/// Lay out `<root>/Myapp-win32` with a loose manifest and a dummy main
/// executable, returning the application root.
pub fn fixture_app(root: &Path) -> PathBuf {
    let app_root = root.join("Myapp-win32");
    let app_dir = app_root.join("resources").join("app");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("package.json"), FIXTURE_MANIFEST).unwrap();
    fs::write(app_root.join("Myapp.exe"), b"app-binary").unwrap();
    app_root
}

/// Stub tool binaries plus the log they record their invocations in.
///
/// Each stub appends one line per invocation: the tool name followed by
/// its arguments, tab-separated.
pub struct StubTools {
    pub vendor: PathBuf,
    log: PathBuf,
}

impl StubTools {
    /// Everything the stubs were invoked with so far.
    pub fn invocations(&self) -> String {
        fs::read_to_string(&self.log).unwrap_or_default()
    }

    /// Replace a stub with one that fails without doing anything.
    pub fn break_tool(&self, name: &str) {
        write_script(&self.vendor.join(name), "exit 1\n");
    }

    /// Replace a stub with one that never finishes on its own.
    pub fn slow_tool(&self, name: &str) {
        write_script(&self.vendor.join(name), "sleep 30\n");
    }
}

/// Populate `<root>/vendor` with working stand-ins for the packaging
/// toolchain.
///
/// `nuget.exe` drops the expected archive into its `-OutputDirectory`;
/// `Update.com` writes `Setup.exe` and `RELEASES` into its `--releaseDir`;
/// `SyncReleases.exe` writes `RELEASES` into its `-r` directory. The
/// update runtime `Update.exe` is a plain file since it is only ever
/// copied, never run.
pub fn stub_tools(root: &Path) -> StubTools {
    let vendor = root.join("vendor");
    fs::create_dir_all(&vendor).unwrap();
    let log = root.join("tool-invocations.log");

    let prelude = log_prelude(&log);

    write_script(
        &vendor.join("nuget.exe"),
        &format!(
            "{prelude}{}: > \"$out/Myapp.0.0.0.nupkg\"\n",
            arg_after("-OutputDirectory", "out")
        ),
    );
    write_script(
        &vendor.join("Update.com"),
        &format!(
            "{prelude}{}printf 'setup-stub' > \"$dir/Setup.exe\"\n\
             printf 'stub-release-manifest' > \"$dir/RELEASES\"\n",
            arg_after("--releaseDir", "dir")
        ),
    );
    write_script(
        &vendor.join("SyncReleases.exe"),
        &format!(
            "{prelude}{}printf 'synced-release-manifest' > \"$dir/RELEASES\"\n",
            arg_after("-r", "dir")
        ),
    );
    fs::write(vendor.join("Update.exe"), b"update-runtime").unwrap();

    StubTools { vendor, log }
}

/// Shell snippet appending the tool name and arguments to the log.
fn log_prelude(log: &Path) -> String {
    format!(
        r#"log="{}"
printf '%s' "${{0##*/}}" >> "$log"
for a in "$@"; do printf '\t%s' "$a" >> "$log"; done
printf '\n' >> "$log"
"#,
        log.display()
    )
}

/// Shell snippet capturing the argument following `flag` into `var`.
fn arg_after(flag: &str, var: &str) -> String {
    format!(
        r#"{var}=""
prev=""
for a in "$@"; do
  [ "$prev" = "{flag}" ] && {var}="$a"
  prev="$a"
done
"#
    )
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
