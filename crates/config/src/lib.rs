pub mod schema;

pub use schema::{ThemeConfig, TtyloadConfig};

use std::path::{Path, PathBuf};
use ttyload_core::{LoadError, Result};

/// Load configuration from a TOML file.  Returns `TtyloadConfig::default()`
/// if the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<TtyloadConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(TtyloadConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<TtyloadConfig> {
    let config: TtyloadConfig = toml::from_str(raw)
        .map_err(|e| LoadError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
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
    base.join("ttyload").join("ttyload.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/nonexistent/ttyload/ttyload.toml").unwrap();
        assert_eq!(cfg.interval_secs, 4);
        assert!(!cfg.monochrome);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = parse("interval_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }

    #[test]
    fn negative_threshold_in_file_is_rejected() {
        let err = parse("threshold = -1.0").unwrap_err();
        assert!(err.to_string().contains("threshold"), "{err}");
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        assert!(default_path().ends_with("ttyload/ttyload.toml"));
    }
}
