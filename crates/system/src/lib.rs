pub mod cpu;
pub mod loadavg;

pub use cpu::core_count;
pub use loadavg::ProcLoadAvg;

use sysinfo::System;
use ttyload_core::{Result, Sample};

/// Produces one [`Sample`] per tick.
///
/// An error means the source is unreadable or malformed; the frame loop
/// treats it as fatal and does not retry.
pub trait LoadSource {
    fn next_sample(&mut self) -> Result<Sample>;
}

impl<S: LoadSource + ?Sized> LoadSource for Box<S> {
    fn next_sample(&mut self) -> Result<Sample> {
        (**self).next_sample()
    }
}

/// Load averages as reported by `sysinfo` (used where `/proc` is absent).
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoLoad;

impl LoadSource for SysinfoLoad {
    fn next_sample(&mut self) -> Result<Sample> {
        let load = System::load_average();
        Ok(Sample::now([load.one, load.five, load.fifteen]))
    }
}

/// The platform's preferred load source: `/proc/loadavg` when it exists,
/// `sysinfo` otherwise.
pub fn default_source() -> Box<dyn LoadSource> {
    let proc = ProcLoadAvg::default();
    if proc.path().exists() {
        tracing::debug!("Reading load from {}", proc.path().display());
        Box::new(proc)
    } else {
        tracing::info!("{} not found; using sysinfo load averages", proc.path().display());
        Box::new(SysinfoLoad)
    }
}

/// Machine hostname for the header line.
pub fn host_name() -> String {
    System::host_name()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
