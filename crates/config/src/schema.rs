use serde::{Deserialize, Serialize};
use std::time::Duration;
use ttyload_core::{LoadError, Result};

/// Root configuration structure parsed from `ttyload.toml`.
///
/// Command-line flags are layered on top of this after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtyloadConfig {
    /// Seconds between samples.  Values below 1 are clamped to 1.
    pub interval_secs: u64,
    /// Encode series as digits instead of ANSI colors.
    pub monochrome: bool,
    /// Terminal height override; `None` = auto-detect.
    pub rows: Option<u16>,
    /// Terminal width override; `None` = auto-detect.
    pub cols: Option<u16>,
    /// Load value marked by the dashed guideline; `None` = core count.
    pub threshold: Option<f64>,
    /// Series colors.
    pub theme: ThemeConfig,
}

impl Default for TtyloadConfig {
    fn default() -> Self {
        Self {
            interval_secs: 4,
            monochrome:    false,
            rows:          None,
            cols:          None,
            threshold:     None,
            theme:         ThemeConfig::default(),
        }
    }
}

impl TtyloadConfig {
    /// Sampling interval with the 1-second floor applied.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    /// Reject values the graph cannot use.  A load threshold must be a
    /// finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        match self.threshold {
            Some(t) if !t.is_finite() || t < 0.0 => Err(LoadError::Config(format!(
                "threshold must be a finite, non-negative load (got {t})"
            ))),
            _ => Ok(()),
        }
    }
}

/// Colors for the colored palette (hex `#RRGGBB` or an ANSI color name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// 1-minute series.
    pub one: String,
    /// 5-minute series.
    pub five: String,
    /// 15-minute series.
    pub fifteen: String,
    /// Threshold guideline (the all-series combination).
    pub threshold: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            one:       "red".to_string(),
            five:      "green".to_string(),
            fifteen:   "blue".to_string(),
            threshold: "white".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let cfg: TtyloadConfig = toml::from_str(
            r##"
            monochrome = true
            threshold = 2.5

            [theme]
            one = "#ff8800"
            "##,
        )
        .unwrap();

        assert!(cfg.monochrome);
        assert_eq!(cfg.threshold, Some(2.5));
        assert_eq!(cfg.interval_secs, 4);
        assert_eq!(cfg.theme.one, "#ff8800");
        assert_eq!(cfg.theme.five, "green");
    }

    #[test]
    fn threshold_must_be_finite_and_non_negative() {
        for bad in [f64::NAN, f64::INFINITY, -0.5] {
            let cfg = TtyloadConfig { threshold: Some(bad), ..Default::default() };
            assert!(matches!(cfg.validate(), Err(LoadError::Config(_))), "{bad}");
        }
        for good in [None, Some(0.0), Some(3.5)] {
            let cfg = TtyloadConfig { threshold: good, ..Default::default() };
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn interval_is_clamped_to_one_second() {
        let cfg = TtyloadConfig { interval_secs: 0, ..Default::default() };
        assert_eq!(cfg.interval(), Duration::from_secs(1));

        let cfg = TtyloadConfig { interval_secs: 10, ..Default::default() };
        assert_eq!(cfg.interval(), Duration::from_secs(10));
    }
}
