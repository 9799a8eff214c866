//! Markdown renderer module
//!
//! Renders a callable descriptor as a signature card: a level-3 heading
//! with the callable name, then one emphasized line per parameter in
//! declaration order.

use crate::models::{Callable, Parameter};

/// Indentation prefix for parameter lines, non-breaking so Markdown
/// surfaces keep the alignment
const INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;";

/// Markdown renderer for signature cards
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a complete signature card to Markdown
    pub fn render(&self, callable: &Callable) -> String {
        let mut output = String::new();

        output.push_str(&format!("### {}\n\n", callable.name));

        for parameter in &callable.parameters {
            output.push_str(&self.render_parameter(parameter));
        }

        output
    }

    /// Render a single parameter line
    fn render_parameter(&self, parameter: &Parameter) -> String {
        let annotation = match &parameter.annotation {
            Some(annotation) => format!(": {}", annotation),
            None => String::new(),
        };

        // "*" marks a required parameter, one with no default to fall
        // back on.
        let default = match &parameter.default {
            Some(default) => format!(" = {}", default),
            None => " *".to_string(),
        };

        format!(
            "{}**{}**{}{}\n\n",
            INDENT, parameter.name, annotation, default
        )
    }
}
