//! JSON signature descriptor adapter
//!
//! Reads the descriptor document an external reflection facility emits:
//! an optional declared name, an optional textual representation of the
//! callable, and the ordered parameter list.

use serde::Deserialize;

use crate::error::Result;
use crate::models::{Callable, Parameter};

#[derive(Debug, Deserialize)]
struct Descriptor {
    name: Option<String>,
    repr: Option<String>,
    #[serde(default)]
    parameters: Vec<Parameter>,
}

/// Build a callable descriptor from a JSON document
pub fn from_str(document: &str) -> Result<Callable> {
    let descriptor: Descriptor = serde_json::from_str(document)?;
    Ok(resolve(descriptor))
}

/// Resolve the display name: declared name first, then the textual
/// representation, then a placeholder
fn resolve(descriptor: Descriptor) -> Callable {
    let name = descriptor
        .name
        .or(descriptor.repr)
        .unwrap_or_else(|| "<callable>".to_string());

    Callable {
        name,
        parameters: descriptor.parameters,
    }
}
