//! Error types for the rendering core.
//!
//! Soft lookups never produce an error (they yield a Null entity instead),
//! so everything here is raised by strict accessors, geometry validation,
//! collaborator misuse or the terminal writer.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    #[error("Invalid geometry for '{name}': {width}x{height}")]
    InvalidGeometry { name: String, width: i32, height: i32 },

    #[error("'{name}' is a {found}, expected a {expected}")]
    ModelKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to write to terminal: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Whether this is a strict-lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::not_found("group", "sidebar");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "group 'sidebar' not found");
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_not_found());
    }
}
