//! Cascading-default resolution of the packaging record.

use std::path::{Path, PathBuf};

use chrono::Local;
use path_absolutize::Absolutize;
use url::Url;

use super::{App, Manifest, PackagerOptions, defaults};
use crate::error::{PackagerError, Result};

impl App {
    /// Resolve caller options into a complete record.
    ///
    /// `options.path` is required and checked before anything touches the
    /// filesystem. Loading the manifest is the single suspension point;
    /// the merge itself is pure. Caller values win over manifest values,
    /// manifest values win over built-in fallbacks.
    pub async fn resolve(mut options: PackagerOptions) -> Result<Self> {
        let raw_path = options.path.take().ok_or_else(|| {
            PackagerError::configuration("`path` to the application directory is required")
        })?;
        let path = absolute(&raw_path)?;

        let manifest = Manifest::load(&path).await?;
        Self::merge(path, options, manifest)
    }

    /// Ordered merge of already-loaded inputs. Field order matters: later
    /// fields default from earlier ones (owners from authors, title from
    /// product_name, copyright from owners).
    fn merge(path: PathBuf, options: PackagerOptions, manifest: Manifest) -> Result<Self> {
        let name = options
            .name
            .or(manifest.name)
            .ok_or_else(|| PackagerError::configuration("no `name` in options or manifest"))?;
        let raw_version = options
            .version
            .or(manifest.version)
            .ok_or_else(|| PackagerError::configuration("no `version` in options or manifest"))?;

        let product_name = options
            .product_name
            .or(manifest.product_name)
            .unwrap_or_else(|| name.clone());
        let icon_url = options
            .icon_url
            .or(manifest.icon_url)
            .unwrap_or_else(|| defaults::ICON_URL.to_owned());
        let authors = options
            .authors
            .or_else(|| manifest.author.as_ref().map(|a| a.name().to_owned()))
            .unwrap_or_default();
        let exe = options.exe.unwrap_or_else(|| format!("{name}.exe"));
        let loading_gif = options
            .loading_gif
            .or_else(|| manifest.loading_gif.map(PathBuf::from))
            .unwrap_or_else(defaults::loading_gif);
        let owners = options.owners.unwrap_or_else(|| authors.clone());
        let title = options.title.unwrap_or_else(|| product_name.clone());
        let copyright = options
            .copyright
            .unwrap_or_else(|| format!("{} {owners}", Local::now().format("%Y")));
        let version = strip_prerelease(&raw_version);

        let description = options
            .description
            .or(manifest.description)
            .unwrap_or_default();
        let nuget_id = options
            .nuget_id
            .or(manifest.nuget_id)
            .unwrap_or_else(|| name.clone());
        let electron_version = options
            .electron_version
            .unwrap_or_else(|| defaults::ELECTRON_VERSION.to_owned());

        let out = match options.out {
            Some(dir) => absolute(&dir)?,
            None => path.parent().map(Path::to_path_buf).ok_or_else(|| {
                PackagerError::configuration(format!(
                    "cannot derive an output directory from {}",
                    path.display()
                ))
            })?,
        };

        if let Some(remote) = &options.remote_releases {
            Url::parse(remote).map_err(|e| {
                PackagerError::configuration(format!("invalid `remote_releases` URL {remote}: {e}"))
            })?;
        }

        Ok(Self {
            name,
            version,
            description,
            copyright,
            path,
            out,
            product_name,
            electron_version,
            authors,
            owners,
            title,
            exe,
            icon_url,
            nuget_id,
            setup_icon: options.setup_icon,
            loading_gif,
            remote_releases: options.remote_releases,
            sign_with_params: options.sign_with_params,
            cert_path: options.cert_path,
            cert_password: options.cert_password,
            vendor_dir: options.vendor_dir,
            tool_timeout: options.tool_timeout,
        })
    }
}

fn strip_prerelease(version: &str) -> String {
    match version.split_once('-') {
        Some((base, _)) => base.to_owned(),
        None => version.to_owned(),
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .map_err(|e| {
            PackagerError::configuration(format!("cannot absolutize {}: {e}", path.display()))
        })?
        .into_owned())
}
