use crate::scale::Heights;
use ttyload_core::SeriesId;

/// Connector pieces a series can leave in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// `─` flat run, or the first column.
    Horizontal,
    /// `╭` the point this column rose to.
    Rising,
    /// `╰` the point this column fell to.
    Falling,
    /// `╮` the previous, higher point where a fall starts.
    FallCorner,
    /// `╯` the previous, lower point where a rise starts.
    RiseCorner,
    /// `│` between the previous and the current point.
    Vertical,
    /// `╍` threshold guideline.
    Threshold,
}

impl Glyph {
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Horizontal => '─',
            Glyph::Rising => '╭',
            Glyph::Falling => '╰',
            Glyph::FallCorner => '╮',
            Glyph::RiseCorner => '╯',
            Glyph::Vertical => '│',
            Glyph::Threshold => '╍',
        }
    }
}

/// Glyph one series contributes at `row`, given its height in this column
/// and in the previous one.  Rows grow downward.
pub fn select(row: usize, height: usize, prev: Option<usize>) -> Option<Glyph> {
    let Some(prev) = prev else {
        return (row == height).then_some(Glyph::Horizontal);
    };

    if row == height {
        Some(if prev == height {
            Glyph::Horizontal
        } else if prev > height {
            Glyph::Rising
        } else {
            Glyph::Falling
        })
    } else if row < height {
        if row == prev {
            Some(Glyph::FallCorner)
        } else if row > prev {
            Some(Glyph::Vertical)
        } else {
            None
        }
    } else if row == prev {
        Some(Glyph::RiseCorner)
    } else if row < prev {
        Some(Glyph::Vertical)
    } else {
        None
    }
}

/// Who owns a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The highest-priority series with a glyph here.
    Series(SeriesId, Glyph),
    /// No series, but this is the threshold row.
    Threshold,
    Empty,
}

/// Resolve a cell: series are tried in priority order and the first glyph
/// wins; otherwise the threshold row, otherwise nothing.
///
/// Two series can therefore never share a cell.
pub fn claim(
    row: usize,
    current: &Heights,
    prev: Option<&Heights>,
    threshold_row: Option<usize>,
) -> Claim {
    SeriesId::PRIORITY
        .iter()
        .find_map(|&series| {
            select(row, current.get(series), prev.map(|p| p.get(series)))
                .map(|glyph| Claim::Series(series, glyph))
        })
        .unwrap_or(if threshold_row == Some(row) {
            Claim::Threshold
        } else {
            Claim::Empty
        })
}
