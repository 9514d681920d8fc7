pub mod error;
pub mod sample;
pub mod window;

pub use error::{LoadError, Result};
pub use sample::{Sample, SeriesId};
pub use window::SampleWindow;
