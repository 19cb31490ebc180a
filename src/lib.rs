//! Tree Limited - print a depth-limited directory tree
//!
//! This crate provides:
//! - A renderer producing ASCII-art tree lines for a directory
//! - Preset and user-defined exclusion of names from expansion
//! - Optional TOML configuration of defaults

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use tree::{render, render_to_string, ExclusionGroup, ExclusionSet, TreeOptions};
