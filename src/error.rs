//! Crate-level error types.

use std::fmt;

/// Errors produced by the mappa crate.
///
/// Nothing in the interactive core is fatal — these only arise from
/// fallible setup paths (parsing a viewport attribute, loading a catalog
/// or options file).
#[derive(Debug)]
pub enum MappaError {
    /// A viewport attribute string did not parse as four numbers.
    ViewportParse(String),
    /// Region catalog JSON parsing failure.
    CatalogParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for MappaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewportParse(msg) => {
                write!(f, "viewport parse error: {msg}")
            }
            Self::CatalogParse(msg) => {
                write!(f, "catalog parse error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MappaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MappaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
