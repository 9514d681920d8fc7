use ttyload_core::{Sample, SampleWindow, SeriesId};

/// Row position of each series for one sample, `0` = top of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heights([usize; 3]);

impl Heights {
    pub const fn new(rows: [usize; 3]) -> Self {
        Self(rows)
    }

    #[inline]
    pub fn get(&self, series: SeriesId) -> usize {
        self.0[series.index()]
    }
}

/// Load values are compared in integer millionths so that two-decimal
/// inputs divide exactly.
pub const FIXED_SCALE: f64 = 1_000_000.0;

/// Largest representable load; keeps `max * grid_height` products far from
/// `i128` overflow.
pub const MAX_FIXED_LOAD: f64 = 1e12;

/// `value` as a whole number of millionths, rounded to nearest.
/// Negative and non-finite values count as zero; huge ones saturate at
/// `MAX_FIXED_LOAD`.
pub fn to_fixed(value: f64) -> i128 {
    if value.is_finite() && value > 0.0 {
        (value.min(MAX_FIXED_LOAD) * FIXED_SCALE).round() as i128
    } else {
        0
    }
}

/// Vertical scale for one frame.
///
/// Fitted to the whole visible window each frame, so the axis jumps when an
/// old peak scrolls out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    max_value:   f64,
    grid_height: usize,
}

impl Scale {
    pub fn new(max_value: f64, grid_height: usize) -> Self {
        Self {
            max_value: if max_value.is_finite() { max_value.max(0.0) } else { 0.0 },
            grid_height,
        }
    }

    /// Scale whose top row is the window's largest value.
    pub fn fit(window: &SampleWindow, grid_height: usize) -> Self {
        Self::new(window.max_value(), grid_height)
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn grid_height(&self) -> usize {
        self.grid_height
    }

    /// Row for `value`: `floor(grid_height * (max - value) / max)`.
    ///
    /// Computed in fixed point; the numerator is non-negative, so integer
    /// division truncates toward zero.  A zero scale puts everything on the
    /// bottom row.
    pub fn height(&self, value: f64) -> usize {
        let max = to_fixed(self.max_value);
        if max == 0 {
            return self.grid_height;
        }
        let value = to_fixed(value).min(max);
        let rows = self.grid_height as i128 * (max - value) / max;
        (rows as usize).min(self.grid_height)
    }

    pub fn heights(&self, sample: &Sample) -> Heights {
        Heights(SeriesId::PRIORITY.map(|s| self.height(sample.value(s))))
    }

    /// Load value implied by `row`: `max * (grid_height - row) / grid_height`.
    pub fn row_value(&self, row: usize) -> f64 {
        if self.grid_height == 0 {
            return 0.0;
        }
        let gh = self.grid_height as f64;
        self.max_value * (gh - row as f64) / gh
    }
}
