//! Nuspec template and rendering.

use handlebars::Handlebars;

use crate::error::{PackagerError, Result};
use crate::metadata::App;

/// Package description handed to the packaging tool. Placeholders are
/// filled from the serialized record; the default escape function keeps
/// the output valid XML. The files section packs the whole application
/// tree under the layout Squirrel.Windows expects.
pub const NUSPEC_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package>
  <metadata>
    <id>{{nuget_id}}</id>
    <title>{{title}}</title>
    <version>{{version}}</version>
    <authors>{{authors}}</authors>
    <owners>{{owners}}</owners>
    <iconUrl>{{icon_url}}</iconUrl>
    <requireLicenseAcceptance>false</requireLicenseAcceptance>
    <description>{{description}}</description>
    <copyright>{{copyright}}</copyright>
  </metadata>
  <files>
    <file src="**" target="lib\net45\" exclude="*.nuspec" />
  </files>
</package>
"#;

/// Render the package description for `app`.
pub fn render_nuspec(app: &App) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string("nuspec", NUSPEC_TEMPLATE)
        .map_err(|e| PackagerError::packaging(format!("failed to register nuspec template: {e}")))?;
    handlebars
        .render("nuspec", app)
        .map_err(|e| PackagerError::packaging(format!("failed to render nuspec template: {e}")))
}
