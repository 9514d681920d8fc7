use ttyload_config::TtyloadConfig;
use ttyload_core::{LoadError, Result};

/// Rows outside the graph: header + blank above, time axis + legend (3)
/// below.  One more row is kept free for the cursor.
pub const HEIGHT_PAD: u16 = 7;
/// Columns outside the graph: label gutter plus right margin.
pub const WIDTH_PAD: u16 = 14;

pub const MIN_ROWS: u16 = HEIGHT_PAD + 6;
pub const MIN_COLS: u16 = WIDTH_PAD + 6;

/// Graph body size in cells, fixed for the lifetime of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// One column per sample (the window capacity).
    pub grid_width:  usize,
    /// Index of the zero row; the graph draws `grid_height + 1` rows.
    pub grid_height: usize,
}

impl Geometry {
    /// Derive the graph size from a terminal of `rows` × `cols`.
    pub fn from_terminal(rows: u16, cols: u16) -> Result<Self> {
        if rows < MIN_ROWS {
            return Err(LoadError::Geometry(format!(
                "ttyload requires at least {MIN_ROWS} rows to run (have {rows})"
            )));
        }
        if cols < MIN_COLS {
            return Err(LoadError::Geometry(format!(
                "ttyload requires at least {MIN_COLS} cols to run (have {cols})"
            )));
        }

        Ok(Self {
            grid_width:  usize::from(cols - WIDTH_PAD),
            grid_height: usize::from(rows - HEIGHT_PAD - 1),
        })
    }

    /// Terminal size from the config overrides, probing the terminal for
    /// whichever dimension is not overridden.
    pub fn detect(config: &TtyloadConfig) -> Result<Self> {
        let (rows, cols) = match (config.rows, config.cols) {
            (Some(rows), Some(cols)) => (rows, cols),
            (rows, cols) => {
                let (term_cols, term_rows) = crossterm::terminal::size().map_err(|e| {
                    LoadError::Terminal(format!("cannot detect terminal size: {e}"))
                })?;
                (rows.unwrap_or(term_rows), cols.unwrap_or(term_cols))
            }
        };

        Self::from_terminal(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_terminal_gives_small_grid() {
        let g = Geometry::from_terminal(MIN_ROWS, MIN_COLS).unwrap();
        assert_eq!(g, Geometry { grid_width: 6, grid_height: 5 });
    }

    #[test]
    fn standard_terminal() {
        let g = Geometry::from_terminal(24, 80).unwrap();
        assert_eq!(g.grid_width, 66);
        assert_eq!(g.grid_height, 16);
    }

    #[test]
    fn undersized_terminal_is_rejected() {
        let err = Geometry::from_terminal(MIN_ROWS - 1, 80).unwrap_err();
        assert_eq!(err.to_string(), "ttyload requires at least 13 rows to run (have 12)");

        let err = Geometry::from_terminal(24, MIN_COLS - 1).unwrap_err();
        assert!(matches!(err, LoadError::Geometry(_)));
    }

    #[test]
    fn overrides_skip_probing() {
        let config = TtyloadConfig { rows: Some(30), cols: Some(100), ..Default::default() };
        let g = Geometry::detect(&config).unwrap();
        assert_eq!(g, Geometry { grid_width: 86, grid_height: 22 });
    }
}
