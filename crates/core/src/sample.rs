use chrono::{DateTime, Local};

/// One of the three tracked load averages.
///
/// Declaration order is priority order: when two series want the same grid
/// cell, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeriesId {
    /// 1-minute load average.
    One,
    /// 5-minute load average.
    Five,
    /// 15-minute load average.
    Fifteen,
}

impl SeriesId {
    /// All series, highest priority first.
    pub const PRIORITY: [SeriesId; 3] = [SeriesId::One, SeriesId::Five, SeriesId::Fifteen];

    /// Position of this series inside a sample's value triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            SeriesId::One => 0,
            SeriesId::Five => 1,
            SeriesId::Fifteen => 2,
        }
    }

    /// Human label used in the legend, e.g. `"5 min"`.
    pub const fn label(self) -> &'static str {
        match self {
            SeriesId::One => "1 min",
            SeriesId::Five => "5 min",
            SeriesId::Fifteen => "15 min",
        }
    }
}

/// A single time-stamped observation of the 1/5/15-minute load averages.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: [f64; 3],
    time:   DateTime<Local>,
}

impl Sample {
    /// Build a sample.  Negative or non-finite inputs are stored as `0.0`,
    /// a load average can never be below zero.
    pub fn new(values: [f64; 3], time: DateTime<Local>) -> Self {
        Self {
            values: values.map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 }),
            time,
        }
    }

    /// Sample stamped with the current local time.
    pub fn now(values: [f64; 3]) -> Self {
        Self::new(values, Local::now())
    }

    #[inline]
    pub fn value(&self, series: SeriesId) -> f64 {
        self.values[series.index()]
    }

    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    /// Largest of the three series values.
    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn time(&self) -> DateTime<Local> {
        self.time
    }
}
