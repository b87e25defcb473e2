//! Error types for umldoc operations.
//!
//! This module provides the main error type [`UmldocError`] which wraps the
//! error conditions that can occur around rendering. Rendering itself is
//! infallible; errors arise only from model construction and from flushing
//! the finished text to a sink.

use std::io;

use thiserror::Error;

use umldoc_core::ModelError;

/// The main error type for umldoc operations.
#[derive(Debug, Error)]
pub enum UmldocError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}
