//! Data models module
//!
//! Defines descriptor models for callables and their formal parameters.
//! Includes Callable and Parameter.

pub mod callable;

pub use callable::{Callable, Parameter};
