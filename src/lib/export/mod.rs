//! Hand the configuration to a site generator running in another process.

use std::{fs, path::Path};

use color_eyre::Section;
use tracing::debug;

use crate::config::SiteConfig;

/// Render the configuration as JSON.
pub fn to_json(config: &SiteConfig, pretty: bool) -> color_eyre::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)
    } else {
        serde_json::to_string(config)
    };
    json.with_note(|| "While serializing the site configuration.")
}

/// Write the configuration as JSON, followed by a newline, to `path`.
pub fn write_json(config: &SiteConfig, path: &Path, pretty: bool) -> color_eyre::Result<()> {
    let mut json = to_json(config, pretty)?;
    json.push('\n');

    fs::write(path, &json).with_note(|| format!("While writing {}", path.display()))?;
    debug!(path = %path.display(), bytes = json.len(), "wrote site configuration");

    Ok(())
}
