/// A terminal foreground colour.
///
/// The eight named variants map to the basic ANSI palette so the default
/// theme looks right on any terminal; `Rgb` is used for hex overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Parse a CSS-style hex color string (`#RRGGBB`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        Some(Self::Rgb {
            r: byte(&hex[0..2])?,
            g: byte(&hex[2..4])?,
            b: byte(&hex[4..6])?,
        })
    }

    /// Parse either an ANSI color name (`"red"`, `"Cyan"`) or a hex string.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        match spec.to_ascii_lowercase().as_str() {
            "red"     => Some(Self::Red),
            "green"   => Some(Self::Green),
            "yellow"  => Some(Self::Yellow),
            "blue"    => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan"    => Some(Self::Cyan),
            "white"   => Some(Self::White),
            _         => Self::from_hex(spec),
        }
    }

    /// Convert to a [`crossterm::style::Color`] for painting.
    #[inline]
    pub fn to_crossterm(self) -> crossterm::style::Color {
        use crossterm::style::Color as Ct;
        match self {
            Self::Red          => Ct::Red,
            Self::Green        => Ct::Green,
            Self::Yellow       => Ct::Yellow,
            Self::Blue         => Ct::Blue,
            Self::Magenta      => Ct::Magenta,
            Self::Cyan         => Ct::Cyan,
            Self::White        => Ct::White,
            Self::Rgb { r, g, b } => Ct::Rgb { r, g, b },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_six_digits() {
        assert_eq!(
            Color::from_hex("#1e1e2e"),
            Some(Color::Rgb { r: 0x1e, g: 0x1e, b: 0x2e })
        );
        assert_eq!(Color::from_hex("1e1e2e"), Color::from_hex("#1e1e2e"));
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Color::parse("Magenta"), Some(Color::Magenta));
        assert_eq!(Color::parse(" red "), Some(Color::Red));
        assert_eq!(Color::parse("mauve"), None);
    }
}
