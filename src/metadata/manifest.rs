//! Application manifest loading and parsing.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::asar::Archive;
use crate::error::{PackagerError, Result};

/// Author field of a `package.json`. npm accepts both an object carrying a
/// `name` and a plain string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Author {
    /// `{ "name": "...", ... }`
    Entry {
        /// Display name of the author
        name: String,
    },
    /// `"Name <email>"` shorthand
    Plain(String),
}

impl Author {
    /// Display name regardless of the manifest's spelling.
    pub fn name(&self) -> &str {
        match self {
            Self::Entry { name } => name,
            Self::Plain(name) => name,
        }
    }
}

/// The subset of `package.json` recognized during resolution.
///
/// Unknown fields are ignored. Packaging-specific fields accept both
/// snake_case and the camelCase spelling conventional in npm manifests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Package name
    pub name: Option<String>,
    /// Package version, possibly with a pre-release suffix
    pub version: Option<String>,
    /// Short package description
    pub description: Option<String>,
    /// Package author
    pub author: Option<Author>,
    /// Display name shown in installer UI
    #[serde(alias = "productName")]
    pub product_name: Option<String>,
    /// Icon URL for package managers
    #[serde(alias = "iconUrl")]
    pub icon_url: Option<String>,
    /// Install-time loading animation
    #[serde(alias = "loadingGif")]
    pub loading_gif: Option<String>,
    /// NuGet package identifier override
    #[serde(alias = "nugetId")]
    pub nuget_id: Option<String>,
}

impl Manifest {
    /// Load the manifest for the application rooted at `app_root`.
    ///
    /// A packed archive wins when present: `resources/app.asar` commits the
    /// load to the archived `package.json`, and a corrupt archive is an
    /// error rather than a reason to fall back. Without an archive the
    /// loose `resources/app/package.json` is read.
    pub async fn load(app_root: &Path) -> Result<Self> {
        let resources = app_root.join("resources");
        let archive_path = resources.join("app.asar");

        let raw = if archive_path.is_file() {
            read_archived(&archive_path).await
        } else {
            tokio::fs::read(resources.join("app").join("package.json")).await
        }
        .map_err(|e| manifest_not_found(app_root, e))?;

        serde_json::from_slice(&raw).map_err(|e| manifest_not_found(app_root, e))
    }
}

async fn read_archived(archive_path: &Path) -> std::io::Result<Vec<u8>> {
    let archive = Archive::open(archive_path).await?;
    archive.read("package.json").await
}

fn manifest_not_found(app_root: &Path, reason: impl fmt::Display) -> PackagerError {
    PackagerError::ManifestNotFound {
        path: app_root.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asar::testutil::write_archive;

    fn loose_manifest(root: &Path, body: &str) {
        let app = root.join("resources").join("app");
        std::fs::create_dir_all(&app).unwrap();
        std::fs::write(app.join("package.json"), body).unwrap();
    }

    #[tokio::test]
    async fn reads_loose_manifest() {
        let dir = tempfile::tempdir().unwrap();
        loose_manifest(
            dir.path(),
            r#"{
                "name": "myapp",
                "version": "1.0.0",
                "productName": "My App",
                "author": { "name": "Arlo Basil", "email": "arlo@example.com" },
                "main": "index.js"
            }"#,
        );

        let manifest = Manifest::load(dir.path()).await.unwrap();
        assert_eq!(manifest.name.as_deref(), Some("myapp"));
        assert_eq!(manifest.product_name.as_deref(), Some("My App"));
        assert_eq!(
            manifest.author.as_ref().map(Author::name),
            Some("Arlo Basil")
        );
    }

    #[tokio::test]
    async fn archive_wins_over_loose_manifest() {
        let dir = tempfile::tempdir().unwrap();
        loose_manifest(dir.path(), r#"{"name": "loose"}"#);
        write_archive(
            &dir.path().join("resources").join("app.asar"),
            &[("package.json", br#"{"name": "packed", "version": "2.0.0"}"#)],
        );

        let manifest = Manifest::load(dir.path()).await.unwrap();
        assert_eq!(manifest.name.as_deref(), Some("packed"));
    }

    #[tokio::test]
    async fn corrupt_archive_does_not_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        loose_manifest(dir.path(), r#"{"name": "loose"}"#);
        std::fs::write(dir.path().join("resources").join("app.asar"), [0u8; 24]).unwrap();

        let err = Manifest::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, PackagerError::ManifestNotFound { .. }));
    }

    #[tokio::test]
    async fn missing_both_sources_is_manifest_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(dir.path()).await.unwrap_err();
        match err {
            PackagerError::ManifestNotFound { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn author_accepts_plain_string() {
        let dir = tempfile::tempdir().unwrap();
        loose_manifest(dir.path(), r#"{"author": "Jo Doe <jo@example.com>"}"#);

        let manifest = Manifest::load(dir.path()).await.unwrap();
        assert_eq!(
            manifest.author.as_ref().map(Author::name),
            Some("Jo Doe <jo@example.com>")
        );
    }
}
