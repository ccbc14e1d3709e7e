//! Locating the Squirrel.Windows and NuGet tool binaries.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{PackagerError, Result};

/// Environment variable naming a directory that holds the tool binaries.
pub const VENDOR_DIR_ENV: &str = "SQUIRREL_VENDOR_DIR";

/// External binaries the pipeline invokes or stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Produces the package archive
    Nuget,
    /// Downloads an existing release feed
    SyncReleases,
    /// The update runtime copied into the application root
    Update,
    /// Drives releasify
    UpdateCom,
}

impl Tool {
    /// Binary file name inside a vendor directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Nuget => "nuget.exe",
            Self::SyncReleases => "SyncReleases.exe",
            Self::Update => "Update.exe",
            Self::UpdateCom => "Update.com",
        }
    }
}

/// Resolves tool binaries through a fixed cascade: an explicit vendor
/// directory, then [`VENDOR_DIR_ENV`], then a `vendor` directory next to
/// the running executable or in the crate tree, and finally the PATH.
#[derive(Debug, Clone, Default)]
pub struct Toolchain {
    vendor_dir: Option<PathBuf>,
}

impl Toolchain {
    /// Toolchain with an optional explicit vendor directory at the top of
    /// the cascade.
    pub fn new(vendor_dir: Option<PathBuf>) -> Self {
        Self { vendor_dir }
    }

    /// Locate `tool`, erroring when it is absent everywhere.
    ///
    /// Stages call this immediately before each invocation, so a binary
    /// that vanishes mid-build is still reported as missing rather than as
    /// a spawn failure.
    pub fn require(&self, tool: Tool) -> Result<PathBuf> {
        for dir in self.candidate_dirs() {
            let candidate = dir.join(tool.file_name());
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        if let Ok(found) = which::which(tool.file_name()) {
            return Ok(found);
        }
        Err(PackagerError::ToolMissing {
            tool: tool.file_name().to_owned(),
            hint: format!(
                "install the Squirrel.Windows tooling into a vendor directory and point \
                 {VENDOR_DIR_ENV} (or the vendor_dir option) at it, or add the tool to PATH"
            ),
        })
    }

    fn candidate_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some(dir) = &self.vendor_dir {
            dirs.push(dir.clone());
        }
        if let Ok(dir) = env::var(VENDOR_DIR_ENV) {
            if !dir.is_empty() {
                dirs.push(PathBuf::from(dir));
            }
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                dirs.push(dir.join("vendor"));
            }
        }
        dirs.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("vendor"));
        dirs
    }
}
