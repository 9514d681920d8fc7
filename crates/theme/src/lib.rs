pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{Style, StyleTag};

use ttyload_config::{ThemeConfig, TtyloadConfig};

/// Compiled palette: a total mapping from every [`StyleTag`] to a [`Style`].
///
/// Calling [`Palette::from_config`] is infallible — invalid color strings fall
/// back to the default ANSI colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    styles: [Style; 8],
}

impl Palette {
    /// Default colored palette: red/green/blue singles, their mixes for pairs,
    /// white for the combination of all three.
    pub fn colored() -> Self {
        Self {
            styles: [
                Style::Blank,
                Style::Fg(Color::Red),
                Style::Fg(Color::Green),
                Style::Fg(Color::Yellow),
                Style::Fg(Color::Blue),
                Style::Fg(Color::Magenta),
                Style::Fg(Color::Cyan),
                Style::Fg(Color::White),
            ],
        }
    }

    /// Digits `1`–`7` stand in for colors (the tag's bitmask).
    pub fn monochrome() -> Self {
        let mut styles = [Style::Blank; 8];
        for tag in &StyleTag::ALL_TAGS[1..] {
            styles[tag.bits() as usize] = Style::Char(char::from(b'0' + tag.bits()));
        }
        Self { styles }
    }

    /// Colored palette with the singles and the all-series color taken from
    /// the `[theme]` table.  Pair colors keep their defaults.
    pub fn themed(cfg: &ThemeConfig) -> Self {
        let mut palette = Self::colored();
        let overrides = [
            (StyleTag::One, &cfg.one),
            (StyleTag::Five, &cfg.five),
            (StyleTag::Fifteen, &cfg.fifteen),
            (StyleTag::All, &cfg.threshold),
        ];
        for (tag, spec) in overrides {
            match Color::parse(spec) {
                Some(color) => palette.styles[tag.bits() as usize] = Style::Fg(color),
                None => tracing::warn!("Invalid color '{spec}' for {tag:?}; using default."),
            }
        }
        palette
    }

    /// Build the palette selected by the configuration.
    pub fn from_config(cfg: &TtyloadConfig) -> Self {
        if cfg.monochrome {
            Self::monochrome()
        } else {
            Self::themed(&cfg.theme)
        }
    }

    #[inline]
    pub fn style(&self, tag: StyleTag) -> Style {
        self.styles[tag.bits() as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}
