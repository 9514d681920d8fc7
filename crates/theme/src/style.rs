use crate::colors::Color;
use ttyload_core::SeriesId;

/// Closed set of cell styles: every subset of the three series.
///
/// The discriminant is the series bitmask (`One = 1`, `Five = 2`,
/// `Fifteen = 4`), which is also the digit the monochrome palette prints.
/// Pair tags are never produced by the graph today but every palette must
/// still define them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StyleTag {
    Blank       = 0,
    One         = 1,
    Five        = 2,
    OneFive     = 3,
    Fifteen     = 4,
    OneFifteen  = 5,
    FiveFifteen = 6,
    All         = 7,
}

impl StyleTag {
    /// Every tag, in bitmask order.
    pub const ALL_TAGS: [StyleTag; 8] = [
        StyleTag::Blank,
        StyleTag::One,
        StyleTag::Five,
        StyleTag::OneFive,
        StyleTag::Fifteen,
        StyleTag::OneFifteen,
        StyleTag::FiveFifteen,
        StyleTag::All,
    ];

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Tag for the given bitmask; bits above the low three are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL_TAGS[(bits & 0b111) as usize]
    }

    pub const fn series(series: SeriesId) -> Self {
        match series {
            SeriesId::One => StyleTag::One,
            SeriesId::Five => StyleTag::Five,
            SeriesId::Fifteen => StyleTag::Fifteen,
        }
    }

    #[must_use]
    pub const fn union(self, other: StyleTag) -> Self {
        Self::from_bits(self.bits() | other.bits())
    }
}

/// How a styled cell is actually shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Nothing drawn: the cell is a space.
    Blank,
    /// Draw the glyph in this colour.
    Fg(Color),
    /// Draw this character instead of the glyph (monochrome mode).
    Char(char),
}

impl Style {
    /// The character to print for `glyph` under this style.
    pub fn apply(self, glyph: char) -> char {
        match self {
            Style::Blank => ' ',
            Style::Fg(_) => glyph,
            Style::Char(c) => c,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Style::Fg(c) => Some(c),
            _ => None,
        }
    }
}
