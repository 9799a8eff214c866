//! Signature adapters module
//!
//! Produces Callable descriptors from the inputs a static binary can
//! receive:
//! - text: parse a textual signature declaration
//! - json: read a descriptor document emitted by an external reflection
//!   facility

pub mod json;
pub mod text;
