//! Terminal front-end for `ttyload`.
//!
//! Owns the frame loop and the terminal:
//! - samples the load source once per tick
//! - renders the window through `ttyload-renderer`
//! - paints the result with crossterm and polls the keyboard for exit

pub mod geometry;
pub mod painter;

pub use geometry::Geometry;
pub use painter::{header_line, Painter};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};
use ttyload_config::TtyloadConfig;
use ttyload_core::{Result, SampleWindow};
use ttyload_renderer::GraphRenderer;
use ttyload_system::{core_count, default_source, host_name, LoadSource};
use ttyload_theme::Palette;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run the dashboard on the current terminal until an exit key is pressed.
pub async fn run(config: TtyloadConfig) -> Result<()> {
    config.validate()?;
    let geometry = Geometry::detect(&config)?;
    let threshold = config.threshold.unwrap_or_else(|| core_count() as f64);
    let interval = config.interval();

    info!(
        width = geometry.grid_width,
        height = geometry.grid_height,
        interval_secs = interval.as_secs(),
        threshold,
        monochrome = config.monochrome,
        "starting dashboard"
    );

    let mut dashboard = Dashboard {
        source:   default_source(),
        exit:     KeyboardExit,
        painter:  Painter::new(io::stdout(), Palette::from_config(&config)),
        renderer: GraphRenderer::new(geometry.grid_height, threshold),
        window:   SampleWindow::new(geometry.grid_width),
        host:     host_name(),
        interval,
    };

    let guard = TerminalGuard::enter()?;
    let result = dashboard.run().await;
    drop(guard);

    let frames = result?;
    info!("exiting after {frames} frames");
    Ok(())
}

// ── Exit polling ──────────────────────────────────────────────────────────────

/// Non-blocking check made before every frame.
pub trait ExitSignal {
    fn exit_requested(&mut self) -> Result<bool>;
}

/// Exits on Escape, `q` or Ctrl-C (raw mode swallows SIGINT).
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardExit;

impl ExitSignal for KeyboardExit {
    fn exit_requested(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if is_exit_key(&key) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

fn is_exit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Everything one frame needs, owned by the single loop.
pub struct Dashboard<S, E, W: Write> {
    pub source:   S,
    pub exit:     E,
    pub painter:  Painter<W>,
    pub renderer: GraphRenderer,
    pub window:   SampleWindow,
    pub host:     String,
    pub interval: Duration,
}

impl<S: LoadSource, E: ExitSignal, W: Write> Dashboard<S, E, W> {
    /// Loop until exit is requested; returns the number of frames drawn.
    ///
    /// Ticks are scheduled at fixed multiples of the interval from the start,
    /// so a slow frame is followed immediately by the next one instead of
    /// pushing the whole schedule back.  A failing load source ends the loop.
    pub async fn run(&mut self) -> Result<u64> {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

        let mut frames = 0;
        loop {
            if self.exit.exit_requested()? {
                debug!("exit requested");
                break;
            }
            self.frame()?;
            frames += 1;
            ticker.tick().await;
        }
        Ok(frames)
    }

    /// Sample, render and paint one frame.
    pub fn frame(&mut self) -> Result<()> {
        let sample = self.source.next_sample()?;
        let header = header_line(&self.host, &sample);
        self.window.push(sample);

        let frame = self.renderer.render(&self.window);
        self.painter.paint(&header, &frame)?;
        Ok(())
    }
}

// ── Terminal lifecycle ────────────────────────────────────────────────────────

/// Raw mode + alternate screen for as long as the guard lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use ttyload_core::{LoadError, Sample};

    /// Replays fixed samples, then fails.
    struct Scripted(VecDeque<[f64; 3]>);

    impl LoadSource for Scripted {
        fn next_sample(&mut self) -> Result<Sample> {
            self.0
                .pop_front()
                .map(Sample::now)
                .ok_or_else(|| LoadError::Source("script exhausted".into()))
        }
    }

    /// Requests exit once `frames` checks have passed.
    struct AfterChecks(u32);

    impl ExitSignal for AfterChecks {
        fn exit_requested(&mut self) -> Result<bool> {
            if self.0 == 0 {
                return Ok(true);
            }
            self.0 -= 1;
            Ok(false)
        }
    }

    fn dashboard(
        samples: &[[f64; 3]],
        frames: u32,
        width: usize,
    ) -> Dashboard<Scripted, AfterChecks, Vec<u8>> {
        Dashboard {
            source:   Scripted(samples.iter().copied().collect()),
            exit:     AfterChecks(frames),
            painter:  Painter::new(Vec::new(), Palette::monochrome()),
            renderer: GraphRenderer::new(6, 2.0),
            window:   SampleWindow::new(width),
            host:     "test".into(),
            interval: Duration::from_secs(4),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn draws_until_exit_and_sleeps_per_frame() {
        let samples = [[1.0, 0.5, 0.25], [2.0, 1.0, 0.5], [4.0, 2.0, 1.0]];
        let mut dash = dashboard(&samples, 3, 2);

        let start = Instant::now();
        let frames = dash.run().await.unwrap();

        assert_eq!(frames, 3);
        // three frames, three full intervals
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(12) && elapsed < Duration::from_secs(13));
        // window is two columns wide: the first sample scrolled out
        let kept: Vec<f64> = dash.window.iter().map(|s| s.values()[0]).collect();
        assert_eq!(kept, vec![2.0, 4.0]);

        let out = String::from_utf8(dash.painter.get_ref().clone()).unwrap();
        assert!(out.contains("test   4.00, 2.00, 1.00"), "{out:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn exit_before_first_frame_draws_nothing() {
        let mut dash = dashboard(&[[1.0; 3]], 0, 4);
        assert_eq!(dash.run().await.unwrap(), 0);
        assert!(dash.window.is_empty());
        assert!(dash.painter.get_ref().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn source_failure_is_fatal() {
        let mut dash = dashboard(&[[1.0; 3]], 10, 4);
        let err = dash.run().await.unwrap_err();
        assert!(matches!(err, LoadError::Source(_)), "{err}");
        assert_eq!(dash.window.len(), 1);
    }

    #[test]
    fn exit_keys() {
        let press = |code, modifiers| KeyEvent::new(code, modifiers);
        assert!(is_exit_key(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_exit_key(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_exit_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_exit_key(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_exit_key(&press(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
