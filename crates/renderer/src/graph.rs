use crate::compositor::{compose, Cell};
use crate::glyph::claim;
use crate::scale::Scale;
use crate::threshold;
use ttyload_core::{SampleWindow, SeriesId};
use ttyload_theme::StyleTag;

/// Columns reserved per time-axis mark.
pub const CLOCK_WIDTH: usize = 7;

/// Legend entries, in display order.
pub const LEGEND: [(SeriesId, StyleTag); 3] = [
    (SeriesId::One, StyleTag::One),
    (SeriesId::Five, StyleTag::Five),
    (SeriesId::Fifteen, StyleTag::Fifteen),
];

/// One rendered graph line: the axis label followed by one cell per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRow {
    pub label: String,
    pub cells: Vec<Cell>,
}

/// Everything the painter needs for one frame, minus the header.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphFrame {
    pub max_value:     f64,
    pub threshold_row: Option<usize>,
    /// `grid_height + 1` rows, top (max value) to bottom (zero).
    pub rows:          Vec<GraphRow>,
    /// `HH:MM` marks under the columns, no gutter.
    pub time_axis:     String,
}

/// Turns the sample window into a grid of styled glyphs each frame.
#[derive(Debug, Clone)]
pub struct GraphRenderer {
    grid_height: usize,
    threshold:   f64,
}

impl GraphRenderer {
    pub fn new(grid_height: usize, threshold: f64) -> Self {
        Self { grid_height, threshold }
    }

    pub fn render(&self, window: &SampleWindow) -> GraphFrame {
        let scale = Scale::fit(window, self.grid_height);
        let threshold_row = threshold::locate(&scale, self.threshold);

        // heights depend on this frame's maximum, so they are never cached
        let columns: Vec<_> = window
            .iter_with_prev()
            .map(|(prev, cur)| (prev.map(|p| scale.heights(p)), scale.heights(cur)))
            .collect();

        tracing::debug!(
            max = scale.max_value(),
            ?threshold_row,
            columns = columns.len(),
            "rendering frame"
        );

        let rows = (0..=self.grid_height)
            .map(|row| GraphRow {
                label: format!("{:>6.2}", scale.row_value(row)),
                cells: columns
                    .iter()
                    .map(|(prev, cur)| compose(claim(row, cur, prev.as_ref(), threshold_row)))
                    .collect(),
            })
            .collect();

        GraphFrame {
            max_value: scale.max_value(),
            threshold_row,
            rows,
            time_axis: time_axis(window),
        }
    }
}

/// Clock marks every [`CLOCK_WIDTH`] columns, starting at the oldest sample.
/// A mark that would run past the newest column is dropped.
pub fn time_axis(window: &SampleWindow) -> String {
    let columns = window.len();
    let mut line = String::with_capacity(columns);

    for (col, sample) in window.iter().enumerate().step_by(CLOCK_WIDTH) {
        let mark = sample.time().format("%H:%M").to_string();
        if col + mark.len() > columns {
            break;
        }
        line.push_str(&format!("{mark:<width$}", width = CLOCK_WIDTH));
    }

    line.truncate(line.trim_end().len());
    line
}
