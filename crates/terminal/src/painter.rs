use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use ttyload_core::Sample;
use ttyload_renderer::{GraphFrame, LEGEND};
use ttyload_theme::{Color, Palette};

/// Spaces between the axis label and the first graph column.
const LABEL_GAP: &str = "   ";
/// Width of `"{label:>6.2}"` plus [`LABEL_GAP`].
pub const GUTTER: usize = 9;

/// Header line: host, current load averages, sample time and version.
pub fn header_line(host: &str, sample: &Sample) -> String {
    let [l1, l5, l15] = sample.values();
    format!(
        "{host}   {l1:.2}, {l5:.2}, {l15:.2}   {}       ttyload, v{}",
        sample.time().format("%H:%M:%S"),
        env!("CARGO_PKG_VERSION"),
    )
}

/// Writes frames to a terminal-like sink, repainting from the home position.
///
/// Lines end in `\r\n` because the terminal is in raw mode.
pub struct Painter<W: Write> {
    out:     W,
    palette: Palette,
    current: Option<Color>,
}

impl<W: Write> Painter<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette, current: None }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn paint(&mut self, header: &str, frame: &GraphFrame) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0))?;
        self.line(header)?;
        self.end_line()?;

        for row in &frame.rows {
            queue!(self.out, Print(&row.label), Print(LABEL_GAP))?;
            for cell in &row.cells {
                let style = self.palette.style(cell.tag);
                self.put(style.apply(cell.glyph), style.color())?;
            }
            self.end_line()?;
        }

        queue!(self.out, Print(" ".repeat(GUTTER)), Print(&frame.time_axis))?;
        self.end_line()?;

        self.legend()?;
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        self.out.flush()
    }

    fn legend(&mut self) -> io::Result<()> {
        self.line("  Legend:")?;
        self.end_line()?;

        queue!(self.out, Print("    "))?;
        for (i, (series, tag)) in LEGEND.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            queue!(self.out, Print(sep), Print(series.label()), Print(": "))?;
            let style = self.palette.style(*tag);
            self.put(style.apply('*'), style.color())?;
        }
        self.end_line()
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        self.end_line()
    }

    fn put(&mut self, ch: char, color: Option<Color>) -> io::Result<()> {
        if color != self.current {
            match color {
                Some(c) => queue!(self.out, SetForegroundColor(c.to_crossterm()))?,
                None => queue!(self.out, ResetColor)?,
            }
            self.current = color;
        }
        queue!(self.out, Print(ch))
    }

    fn end_line(&mut self) -> io::Result<()> {
        if self.current.take().is_some() {
            queue!(self.out, ResetColor)?;
        }
        queue!(self.out, Clear(ClearType::UntilNewLine), Print("\r\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use ttyload_core::SampleWindow;
    use ttyload_renderer::GraphRenderer;

    fn frame() -> GraphFrame {
        let mut window = SampleWindow::new(4);
        window.push(Sample::now([2.0, 1.0, 0.0]));
        window.push(Sample::now([2.0, 1.0, 0.0]));
        GraphRenderer::new(4, 1.0).render(&window)
    }

    fn paint(palette: Palette) -> String {
        let mut painter = Painter::new(Vec::new(), palette);
        painter.paint("host   header", &frame()).unwrap();
        String::from_utf8(painter.get_ref().clone()).unwrap()
    }

    #[test]
    fn header_formats_loads_and_time() {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        let sample = Sample::new([0.5, 1.0, 12.345], time);
        let header = header_line("box", &sample);
        assert!(header.starts_with("box   0.50, 1.00, 12.35   09:05:07"), "{header}");
        assert!(header.ends_with(&format!("ttyload, v{}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn monochrome_prints_digits_without_escapes_for_color() {
        let out = paint(Palette::monochrome());
        // One on row 0, Five on row 2, Fifteen on row 4
        assert!(out.contains("  2.00   11"), "{out:?}");
        assert!(out.contains("  1.00   22"), "{out:?}");
        assert!(out.contains("  0.00   44"), "{out:?}");
        assert!(out.contains("1 min: 1, 5 min: 2, 15 min: 4"), "{out:?}");
        assert!(!out.contains("\x1b[38"), "{out:?}");
    }

    #[test]
    fn colored_prints_glyphs_with_color_changes() {
        let out = paint(Palette::colored());
        assert!(out.contains("──"), "{out:?}");
        assert!(out.contains("\x1b[38"), "{out:?}");
        assert!(out.contains("  Legend:"), "{out:?}");
    }

    #[test]
    fn every_line_ends_with_crlf() {
        let out = paint(Palette::monochrome());
        // header, blank, 5 graph rows, time axis, legend title, blank, legend
        assert_eq!(out.matches("\r\n").count(), 11);
    }
}
