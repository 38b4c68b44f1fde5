//! Reading syntax trees produced by an external parser

use std::{fmt, path::Path};
use tracing::debug;

use crate::language::Module;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// Read a file and return an owned String. The caller keeps ownership so
/// that the Module returned by parse() below can be borrowed from for as long
/// as a projection of it is alive.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Decode a syntax tree serialized in the shape of Python's `ast` module:
/// every node an object whose `_type` field names its kind. Positions and
/// expression contexts are ignored.
pub fn parse<'i>(filename: &'i Path, content: &str) -> Result<Module, LoadingError<'i>> {
    match serde_json::from_str::<Module>(content) {
        Ok(module) => {
            debug!(
                "Loaded {} top-level statement{}",
                module
                    .body
                    .len(),
                if module
                    .body
                    .len()
                    == 1
                {
                    ""
                } else {
                    "s"
                }
            );
            Ok(module)
        }
        Err(error) => {
            debug!(?error);
            Err(LoadingError {
                problem: "Invalid syntax tree".to_string(),
                details: error.to_string(),
                filename,
            })
        }
    }
}
