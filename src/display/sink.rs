//! Sink implementations for rendered Markdown

use termimad::MadSkin;

use crate::display::ColorMode;
use crate::error::Result;

/// A surface that accepts one rendered Markdown block at a time
pub trait Sink {
    fn display(&mut self, markdown: &str) -> Result<()>;
}

/// Terminal sink: rich rendering when enabled, plain stdout otherwise
pub struct TerminalSink {
    rich: bool,
}

impl TerminalSink {
    /// `rich` comes from config; the color mode can still veto it
    pub fn new(rich: bool, color: ColorMode) -> Self {
        Self {
            rich: rich && color.enabled(),
        }
    }
}

impl Sink for TerminalSink {
    fn display(&mut self, markdown: &str) -> Result<()> {
        // The &nbsp; indentation is a Markdown-surface convention; the
        // terminal gets real spaces.
        let text = markdown.replace("&nbsp;", " ");

        if self.rich {
            if let Err(e) = print_rich(&text) {
                eprintln!(
                    "Warning: Terminal rendering failed ({}), using plain output",
                    e
                );
                println!("{}", text);
            }
        } else {
            println!("{}", text);
        }

        Ok(())
    }
}

/// Print with termimad styling
fn print_rich(text: &str) -> std::result::Result<(), termimad::Error> {
    let skin = card_skin();
    skin.print_text(text);
    Ok(())
}

/// Termimad skin tuned for signature cards
fn card_skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();

    // Card heading (level 3)
    skin.headers[2].set_fg(Yellow);
    skin.headers[2].add_attr(Attribute::Bold);

    // Parameter names arrive as bold spans
    skin.bold.set_fg(Cyan);
    skin.bold.add_attr(Attribute::Bold);

    skin.inline_code.set_fg(Green);
    skin.italic.add_attr(Attribute::Italic);

    skin
}

/// In-memory sink that records displayed blocks
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct CaptureSink {
    blocks: Vec<String>,
}

#[allow(dead_code)]
impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }
}

impl Sink for CaptureSink {
    fn display(&mut self, markdown: &str) -> Result<()> {
        self.blocks.push(markdown.to_string());
        Ok(())
    }
}
