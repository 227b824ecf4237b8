pub mod schema;
pub mod watcher;

pub use schema::{DashboardConfig, ThemeConfig, WidgetConfig, WidgetKind, WindowConfig};
pub use watcher::ConfigWatcher;

use dial_core::{DialError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `DashboardConfig::default()`
/// if the file doesn't exist so the dashboard always has something to show.
pub fn load(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(DashboardConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    parse(&raw)
}

/// Parse a TOML document into a [`DashboardConfig`].
pub fn parse(raw: &str) -> Result<DashboardConfig> {
    let config: DashboardConfig =
        toml::from_str(raw).map_err(|e| DialError::Config(format!("TOML parse error: {e}")))?;

    for (index, widget) in config.widgets.iter().enumerate() {
        if !widget.is_configured() {
            tracing::warn!(index, kind = ?widget.kind, "widget has no metric configured");
        }
    }

    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("dials").join("dials.toml")
}
