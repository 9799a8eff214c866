use std::fs;
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::display::{ColorMode, Sink, TerminalSink};
use crate::error::{Result, SigcardError};
use crate::inspect;
use crate::models::Callable;
use crate::renderer::Renderer;

/// Render a signature card and display it
pub fn run(
    decl: Option<String>,
    json: Option<PathBuf>,
    config_path: Option<PathBuf>,
    color: ColorMode,
) -> Result<()> {
    let config = load_config(config_path)?;

    let callable = resolve_callable(decl, json)?;

    let renderer = Renderer::new();
    let markdown = renderer.render(&callable);

    let mut sink = TerminalSink::new(config.display.rich, color);
    sink.display(&markdown)
}

/// Build the descriptor from whichever input was given
fn resolve_callable(decl: Option<String>, json: Option<PathBuf>) -> Result<Callable> {
    match (decl, json) {
        (_, Some(path)) => {
            let document = fs::read_to_string(&path)?;
            inspect::json::from_str(&document)
        }
        (Some(decl), None) => inspect::text::parse(&decl),
        (None, None) => Err(SigcardError::Config(
            "nothing to display: pass a declaration or --json <file>".to_string(),
        )),
    }
}

/// Explicit config paths must load; the default path is optional
fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => config::load(&path),
        None => {
            let default_path = PathBuf::from("sigcard.toml");
            if default_path.exists() {
                config::load(&default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
