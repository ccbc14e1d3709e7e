//! Squirrel.Windows installer builder for Electron applications
//!
//! This library turns an unpacked Electron application directory into a
//! self-extracting Windows setup executable:
//! - resolves packaging metadata from the app manifest (packed `app.asar`
//!   or loose `package.json`) through cascading defaults
//! - stages a NuGet package description and packs the application
//! - optionally synchronizes an existing release feed for delta updates
//! - releasifies the package into a branded `Setup.exe`
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod asar;
pub mod cli;
pub mod error;
pub mod metadata;
pub mod pipeline;

// Re-export commonly used types
pub use error::{PackagerError, Result};
pub use metadata::{App, PackagerOptions, Secret};

/// Resolve packaging metadata and run the full build pipeline.
///
/// Returns the resolved record so callers can read the derived paths,
/// [`App::setup_path`] in particular.
///
/// # Examples
///
/// ```no_run
/// # async fn build() -> squirrel_packager::Result<()> {
/// use squirrel_packager::PackagerOptions;
///
/// let options = PackagerOptions::new("./dist/MyApp-win32-x64");
/// let app = squirrel_packager::create_installer(options).await?;
/// println!("installer at {}", app.setup_path().display());
/// # Ok(())
/// # }
/// ```
pub async fn create_installer(options: PackagerOptions) -> Result<App> {
    let app = App::resolve(options).await?;
    pipeline::build(&app).await?;
    Ok(app)
}
