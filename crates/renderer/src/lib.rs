//! Graph engine for the load dashboard.
//!
//! Each frame the sample window is re-fitted to its own maximum
//! ([`scale`]), the threshold guideline row is located ([`threshold`]), and
//! every cell is resolved to a connector glyph and style tag
//! ([`glyph`], [`compositor`]).  [`graph::GraphRenderer`] ties it together.

pub mod compositor;
pub mod glyph;
pub mod graph;
pub mod scale;
pub mod threshold;

pub use compositor::Cell;
pub use glyph::{Claim, Glyph};
pub use graph::{GraphFrame, GraphRenderer, GraphRow, CLOCK_WIDTH, LEGEND};
pub use scale::{Heights, Scale};
