pub mod schema;
pub mod watcher;

pub use schema::{LuxConfig, SamplerConfig, ThemeConfig, WindowConfig};
pub use watcher::spawn_watcher;

use lux_core::{LuxError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `LuxConfig::default()` if
/// the file doesn't exist so the meter always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<LuxConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(LuxConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| LuxError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Like [`load`], but a file that can't be read or parsed logs a warning and
/// yields defaults instead of an error.
pub fn load_or_default(path: impl AsRef<Path>) -> LuxConfig {
    load(path).unwrap_or_else(|e| {
        tracing::warn!("{e}; using defaults");
        LuxConfig::default()
    })
}

/// Parse TOML text into a [`LuxConfig`], normalising out-of-range values.
pub fn parse(raw: &str) -> Result<LuxConfig> {
    let config: LuxConfig =
        toml::from_str(raw).map_err(|e| LuxError::Config(format!("TOML parse error: {e}")))?;
    Ok(config.normalized())
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("luxmeter").join("luxmeter.toml")
}
