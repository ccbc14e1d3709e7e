//! Built-in fallback values for unresolved metadata fields.

use std::path::{Path, PathBuf};

/// Icon URL used when neither the caller nor the manifest supplies one.
pub const ICON_URL: &str =
    "https://raw.githubusercontent.com/atom/electron/master/atom/browser/resources/win/atom.ico";

/// Electron version tag used when the caller supplies none.
pub const ELECTRON_VERSION: &str = "0.29.2";

/// Path of the bundled install spinner animation.
///
/// Looks next to the running executable first so packaged distributions
/// work, then falls back to the crate tree for development builds.
pub fn loading_gif() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let local = dir.join("resources").join("install-spinner.gif");
            if local.is_file() {
                return local;
            }
        }
    }
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("install-spinner.gif")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_spinner_exists() {
        assert!(loading_gif().is_file());
    }
}
