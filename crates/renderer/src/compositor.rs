use crate::glyph::{Claim, Glyph};
use ttyload_core::SeriesId;
use ttyload_theme::StyleTag;

/// One graph cell ready for the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub tag:   StyleTag,
}

impl Cell {
    pub const BLANK: Cell = Cell { glyph: ' ', tag: StyleTag::Blank };
}

/// Map a cell's owner to its glyph and style tag.
///
/// The threshold overlay is drawn in the all-series style.
pub fn compose(claim: Claim) -> Cell {
    match claim {
        Claim::Series(series, glyph) => Cell {
            glyph: glyph.as_char(),
            tag:   StyleTag::series(series),
        },
        Claim::Threshold => Cell {
            glyph: Glyph::Threshold.as_char(),
            tag:   SeriesId::PRIORITY
                .iter()
                .fold(StyleTag::Blank, |tag, s| tag.union(StyleTag::series(*s))),
        },
        Claim::Empty => Cell::BLANK,
    }
}
