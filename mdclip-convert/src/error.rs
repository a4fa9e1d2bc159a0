//! Error types for conversion collaborators
//!
//! The core pipeline never fails; these errors belong to the seams around it
//! (math rendering, theme selection).

use std::fmt;

/// Errors that can occur at the edges of the conversion pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// An external renderer (math, diagram) failed for one span
    Render(String),
    /// A theme name did not match any known theme
    Theme(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Render(msg) => write!(f, "Render error: {msg}"),
            ConvertError::Theme(name) => write!(f, "Unknown theme '{name}'"),
        }
    }
}

impl std::error::Error for ConvertError {}
