//! Error types for Trackplan operations.
//!
//! This module provides the main error type [`TrackplanError`]. Every failure
//! is local to one operation: a failed import leaves the diagram state as it
//! was, and a failed layout emits no scene.

use std::io;

use thiserror::Error;

use crate::extract::AcquisitionError;

/// The main error type for Trackplan operations.
#[derive(Debug, Error)]
pub enum TrackplanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// No fragment source can read the requested document.
    #[error("No text extractor available for `{0}`")]
    SourceUnavailable(String),

    /// The document could not be read into text fragments.
    #[error("Document import failed: {0}")]
    Acquisition(#[from] AcquisitionError),

    /// Layout was requested without any marker to place.
    #[error("Add at least one marker to render")]
    NoMarkers,

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for TrackplanError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
