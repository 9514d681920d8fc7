use crate::LoadSource;
use std::path::{Path, PathBuf};
use ttyload_core::{LoadError, Result, Sample};

/// Kernel load-average file on Linux.
pub const PROC_LOADAVG: &str = "/proc/loadavg";

/// Reads the 1/5/15-minute load averages from a `/proc/loadavg`-style file.
#[derive(Debug, Clone)]
pub struct ProcLoadAvg {
    path: PathBuf,
}

impl ProcLoadAvg {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ProcLoadAvg {
    fn default() -> Self {
        Self::new(PROC_LOADAVG)
    }
}

impl LoadSource for ProcLoadAvg {
    fn next_sample(&mut self) -> Result<Sample> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            LoadError::Source(format!("cannot read '{}': {e}", self.path.display()))
        })?;
        parse_loadavg(&raw).map(Sample::now)
    }
}

/// Parse the first three whitespace-separated fields of a loadavg line,
/// e.g. `"0.52 0.58 0.59 1/467 12345"`.
pub fn parse_loadavg(raw: &str) -> Result<[f64; 3]> {
    let mut fields = raw.split_whitespace();
    let mut values = [0.0; 3];

    for (slot, name) in values.iter_mut().zip(["1-minute", "5-minute", "15-minute"]) {
        let field = fields
            .next()
            .ok_or_else(|| LoadError::Source(format!("missing {name} load field in {raw:?}")))?;
        let value: f64 = field
            .parse()
            .map_err(|e| LoadError::Source(format!("bad {name} load {field:?}: {e}")))?;
        if !value.is_finite() || value < 0.0 {
            return Err(LoadError::Source(format!("bad {name} load {field:?}: out of range")));
        }
        *slot = value;
    }

    Ok(values)
}
