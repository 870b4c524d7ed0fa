//! Typed error handling for litscan.
//!
//! Provides structured errors that library consumers can match on. Only a
//! failure to resolve the scan root is fatal; everything else is absorbed,
//! logged, and reported as a skipped contribution so a single bad file or
//! directory never suppresses findings from the rest of the tree.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for litscan operations.
#[derive(Error, Debug)]
pub enum LitscanError {
    /// The root of the path specification is unreadable or does not exist.
    #[error("cannot resolve scan root {path}: {message}")]
    Root { path: PathBuf, message: String },

    /// I/O error when reading a file or directory.
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Syntax error when parsing Rust source.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Malformed exclusion pattern.
    #[error("invalid exclusion pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },
}

impl LitscanError {
    /// Create a fatal root-resolution error.
    pub fn root(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Root {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a parse error for one source file.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an exclusion-pattern error.
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Check if this error lets the scan continue with partial results.
    ///
    /// Only root resolution failures abort a scan.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Root { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Root { path, .. } => Some(path),
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => Some(path),
            Self::Pattern { .. } => None,
        }
    }
}

/// Convenience type alias for litscan results.
pub type LitscanResult<T> = Result<T, LitscanError>;
