//! Caller-supplied packaging options.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// A sensitive string kept out of Debug output and rendered data.
///
/// Used for certificate passwords and pre-formatted signing parameter
/// strings, which may embed a password.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a sensitive value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Read the underlying value.
    ///
    /// Call sites are limited to building the argument vector handed to the
    /// signing tool.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<String> for Secret {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Secret {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

/// Options accepted by [`create_installer`](crate::create_installer).
///
/// Only `path` is required. Every other field overrides either a manifest
/// value or a built-in fallback; unset fields are filled in during
/// resolution, caller values winning over manifest values and manifest
/// values winning over fallbacks.
///
/// # Examples
///
/// ```no_run
/// use squirrel_packager::PackagerOptions;
///
/// let mut options = PackagerOptions::new("./dist/MyApp-win32-x64");
/// options.remote_releases = Some("https://releases.example.com/myapp".into());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackagerOptions {
    /// Root directory of the unpacked application.
    ///
    /// REQUIRED. Resolution fails before touching the filesystem when unset.
    pub path: Option<PathBuf>,

    /// Directory that receives the built artifacts.
    ///
    /// Default: parent directory of `path`
    pub out: Option<PathBuf>,

    /// Package name.
    ///
    /// Default: manifest `name`
    pub name: Option<String>,

    /// Human-readable name shown in installer UI and shortcuts.
    ///
    /// Default: manifest `productName`, falling back to `name`
    pub product_name: Option<String>,

    /// Version string. Any pre-release suffix after the first hyphen is
    /// stripped during resolution.
    ///
    /// Default: manifest `version`
    pub version: Option<String>,

    /// Brief description used in the package metadata.
    ///
    /// Default: manifest `description`, falling back to empty
    pub description: Option<String>,

    /// Author display string.
    ///
    /// Default: manifest author name, falling back to empty
    pub authors: Option<String>,

    /// Package owners.
    ///
    /// Default: `authors`
    pub owners: Option<String>,

    /// Package title.
    ///
    /// Default: `product_name`
    pub title: Option<String>,

    /// Copyright line.
    ///
    /// Default: current four-digit year followed by `owners`
    pub copyright: Option<String>,

    /// Name of the application's main executable.
    ///
    /// Default: `name` + ".exe"
    pub exe: Option<String>,

    /// NuGet package identifier.
    ///
    /// Default: manifest `nugetId`, falling back to `name`
    pub nuget_id: Option<String>,

    /// Electron runtime version tag.
    ///
    /// Default: a fixed fallback version
    pub electron_version: Option<String>,

    /// URL of the icon displayed by package managers.
    ///
    /// Default: manifest `iconUrl`, falling back to a fixed URL
    pub icon_url: Option<String>,

    /// Icon file for the generated setup executable.
    ///
    /// Default: None (the release tool's stock icon)
    pub setup_icon: Option<PathBuf>,

    /// Animation shown while the installer runs.
    ///
    /// Default: manifest `loadingGif`, falling back to the bundled spinner
    pub loading_gif: Option<PathBuf>,

    /// URL of an existing release feed to synchronize before building, so
    /// the release tool can produce delta updates.
    ///
    /// Default: None (no sync stage)
    pub remote_releases: Option<String>,

    /// Pre-formatted parameter string for the signing tool.
    ///
    /// Takes precedence over `cert_path`/`cert_password`.
    ///
    /// Default: None
    pub sign_with_params: Option<Secret>,

    /// Path to an Authenticode certificate.
    ///
    /// Only used together with `cert_password`.
    ///
    /// Default: None (unsigned)
    pub cert_path: Option<PathBuf>,

    /// Password for `cert_path`.
    ///
    /// Default: None
    pub cert_password: Option<Secret>,

    /// Directory holding the Squirrel.Windows and NuGet tool binaries.
    ///
    /// Default: None (probe `SQUIRREL_VENDOR_DIR`, bundled locations, PATH)
    pub vendor_dir: Option<PathBuf>,

    /// Upper bound on each external tool invocation.
    ///
    /// Default: None (tools may run indefinitely)
    pub tool_timeout: Option<Duration>,
}

impl PackagerOptions {
    /// Options for an application root with everything else defaulted.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}
