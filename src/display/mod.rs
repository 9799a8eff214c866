//! Display surface module
//!
//! Sinks accept one rendered Markdown block at a time and present it.
//! The terminal sink does rich rendering with a plain fallback; the
//! capture sink records blocks for inspection in tests.

mod color;
mod sink;

pub use color::ColorMode;
pub use sink::{CaptureSink, Sink, TerminalSink};
