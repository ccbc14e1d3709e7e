//! Metadata resolution: caller options plus the application manifest become
//! a complete, immutable packaging record.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

pub mod defaults;
mod manifest;
mod options;
mod resolve;

pub use manifest::{Author, Manifest};
pub use options::{PackagerOptions, Secret};

/// Fully-resolved packaging metadata.
///
/// Built once per invocation by [`App::resolve`] and treated as read-only
/// by the pipeline. Serializes to the data rendered into the nuspec
/// template; signing secrets never serialize.
#[derive(Debug, Clone, Serialize)]
pub struct App {
    /// Package name
    pub name: String,
    /// Version with any pre-release suffix stripped
    pub version: String,
    /// Short description for the package metadata
    pub description: String,
    /// Copyright line
    pub copyright: String,
    /// Absolute root of the unpacked application
    pub path: PathBuf,
    /// Absolute directory receiving build artifacts
    pub out: PathBuf,
    /// Display name shown in installer UI
    pub product_name: String,
    /// Electron runtime version tag
    pub electron_version: String,
    /// Author display string
    pub authors: String,
    /// Package owners
    pub owners: String,
    /// Package title
    pub title: String,
    /// Main executable name
    pub exe: String,
    /// Package-manager icon URL
    pub icon_url: String,
    /// NuGet package identifier
    pub nuget_id: String,
    /// Icon for the generated setup executable
    pub setup_icon: Option<PathBuf>,
    /// Install-time loading animation
    pub loading_gif: PathBuf,
    /// Release feed to synchronize before building
    pub remote_releases: Option<String>,
    /// Pre-formatted signing parameter string
    #[serde(skip_serializing)]
    pub sign_with_params: Option<Secret>,
    /// Authenticode certificate path
    pub cert_path: Option<PathBuf>,
    /// Password for `cert_path`
    #[serde(skip_serializing)]
    pub cert_password: Option<Secret>,
    /// Explicit tool directory override
    #[serde(skip_serializing)]
    pub vendor_dir: Option<PathBuf>,
    /// Upper bound on each tool invocation
    #[serde(skip_serializing)]
    pub tool_timeout: Option<Duration>,
}

impl App {
    /// `resources` directory of the application.
    pub fn resources(&self) -> PathBuf {
        self.path.join("resources")
    }

    /// Packed asset archive location inside `resources`.
    pub fn asar(&self) -> PathBuf {
        self.resources().join("app.asar")
    }

    /// Name of the final setup executable: `product_name` with spaces
    /// removed, then "Setup.exe".
    pub fn setup_filename(&self) -> String {
        format!("{}Setup.exe", self.product_name.replace(' ', ""))
    }

    /// Where the finished setup executable lands.
    pub fn setup_path(&self) -> PathBuf {
        self.out.join(self.setup_filename())
    }

    /// Name of the rendered package description file.
    pub fn nuspec_filename(&self) -> String {
        format!("{}.nuspec", self.nuget_id)
    }

    /// Name of the archive the packaging tool produces.
    pub fn nupkg_filename(&self) -> String {
        format!("{}.{}.nupkg", self.nuget_id, self.version)
    }
}
