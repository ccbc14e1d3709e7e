//! Command line argument parsing.
//!
//! Every packaging option is exposed as a flag; only `--path` is required.
//! Unset flags fall back to manifest values and built-in defaults during
//! resolution.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::metadata::{PackagerOptions, Secret};

/// Create Windows installers for Electron apps with Squirrel.Windows
#[derive(Parser, Debug)]
#[command(
    name = "squirrel_packager",
    about = "Create Windows installers for Electron apps with Squirrel.Windows",
    long_about = "Creates a self-extracting Windows setup executable for an unpacked Electron
application using the Squirrel.Windows toolchain.

Packaging metadata is read from the app's package.json (inside app.asar or the
resources directory) and merged with the flags below. Flags win over manifest
values and manifest values win over built-in defaults.

Usage:
  squirrel_packager --path ./dist/MyApp-win32-x64
  squirrel_packager --path ./dist/MyApp-win32-x64 --out ./installers
  squirrel_packager --path ./dist/MyApp-win32-x64 --remote-releases https://releases.example.com/myapp

Exit code 0 = the setup executable exists in the output directory."
)]
pub struct Args {
    /// Root directory of the unpacked application
    #[arg(short = 'p', long, value_name = "DIR")]
    pub path: PathBuf,

    /// Directory that receives the built artifacts [default: parent of --path]
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Package name [default: manifest name]
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Human-readable name for installer UI and shortcuts [default: manifest productName]
    #[arg(long, value_name = "NAME")]
    pub product_name: Option<String>,

    /// Package version; any pre-release suffix is stripped [default: manifest version]
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Package description [default: manifest description]
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Author display string [default: manifest author]
    #[arg(long, value_name = "AUTHORS")]
    pub authors: Option<String>,

    /// Package owners [default: same as authors]
    #[arg(long, value_name = "OWNERS")]
    pub owners: Option<String>,

    /// Package title [default: same as product name]
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Copyright line [default: current year and owners]
    #[arg(long, value_name = "TEXT")]
    pub copyright: Option<String>,

    /// Name of the application's main executable [default: <name>.exe]
    #[arg(long, value_name = "FILE")]
    pub exe: Option<String>,

    /// NuGet package identifier [default: same as name]
    #[arg(long, value_name = "ID")]
    pub nuget_id: Option<String>,

    /// Electron runtime version tag
    #[arg(long, value_name = "VERSION")]
    pub electron_version: Option<String>,

    /// URL of the icon displayed by package managers
    #[arg(long, value_name = "URL")]
    pub icon_url: Option<String>,

    /// Icon file for the generated setup executable
    #[arg(long, value_name = "FILE")]
    pub setup_icon: Option<PathBuf>,

    /// Animation shown while the installer runs [default: bundled spinner]
    #[arg(long, value_name = "FILE")]
    pub loading_gif: Option<PathBuf>,

    /// Existing release feed to sync before building, enabling delta updates
    #[arg(long, value_name = "URL")]
    pub remote_releases: Option<String>,

    /// Pre-formatted parameter string for the signing tool
    #[arg(long, value_name = "PARAMS")]
    pub sign_with_params: Option<String>,

    /// Authenticode certificate used to sign the installer
    #[arg(long, value_name = "FILE")]
    pub cert_path: Option<PathBuf>,

    /// Password for --cert-path
    #[arg(
        long,
        value_name = "PASSWORD",
        env = "SQUIRREL_CERT_PASSWORD",
        hide_env_values = true
    )]
    pub cert_password: Option<String>,

    /// Directory holding the Squirrel.Windows and NuGet tool binaries
    #[arg(long, value_name = "DIR")]
    pub vendor_dir: Option<PathBuf>,

    /// Upper bound in seconds on each external tool invocation
    #[arg(long, value_name = "SECONDS")]
    pub tool_timeout: Option<u64>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Convert parsed flags into packaging options.
    pub fn into_options(self) -> PackagerOptions {
        PackagerOptions {
            path: Some(self.path),
            out: self.out,
            name: self.name,
            product_name: self.product_name,
            version: self.version,
            description: self.description,
            authors: self.authors,
            owners: self.owners,
            title: self.title,
            copyright: self.copyright,
            exe: self.exe,
            nuget_id: self.nuget_id,
            electron_version: self.electron_version,
            icon_url: self.icon_url,
            setup_icon: self.setup_icon,
            loading_gif: self.loading_gif,
            remote_releases: self.remote_releases,
            sign_with_params: self.sign_with_params.map(Secret::from),
            cert_path: self.cert_path,
            cert_password: self.cert_password.map(Secret::from),
            vendor_dir: self.vendor_dir,
            tool_timeout: self.tool_timeout.map(Duration::from_secs),
        }
    }
}
