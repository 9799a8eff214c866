//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - show: Render a signature card and display it

pub mod config;
pub mod show;
