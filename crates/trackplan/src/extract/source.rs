//! Document acquisition.
//!
//! Trackplan does not read page-based document containers itself. A
//! [`FragmentSource`] hands over the text layer of a document as one list of
//! [`TextFragment`]s per page. [`JsonFragmentSource`] reads the JSON dumps
//! written by external text-layer extractors:
//!
//! ```json
//! { "pages": [ [ { "text": "47.250km", "x": 212.0, "y": 640.5 } ] ] }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use trackplan_core::fragment::TextFragment;

use crate::TrackplanError;

/// Errors raised while reading a document's text layer.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fragment dump: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A provider of per-page text fragments.
pub trait FragmentSource {
    /// Short description used in logs.
    fn name(&self) -> String;

    /// Returns every page's fragments, in page order.
    ///
    /// # Errors
    ///
    /// Returns [`AcquisitionError`] if the document cannot be read.
    fn pages(&self) -> Result<Vec<Vec<TextFragment>>, AcquisitionError>;
}

#[derive(Debug, Deserialize)]
struct FragmentDump {
    pages: Vec<Vec<TextFragment>>,
}

/// Reads a JSON fragment dump from disk.
#[derive(Debug, Clone)]
pub struct JsonFragmentSource {
    path: PathBuf,
}

impl JsonFragmentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses a dump held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`AcquisitionError::Malformed`] if `json` is not a fragment dump.
    pub fn parse(json: &str) -> Result<Vec<Vec<TextFragment>>, AcquisitionError> {
        let dump: FragmentDump = serde_json::from_str(json)?;
        Ok(dump.pages)
    }
}

impl FragmentSource for JsonFragmentSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn pages(&self) -> Result<Vec<Vec<TextFragment>>, AcquisitionError> {
        let content = fs::read_to_string(&self.path).map_err(|source| AcquisitionError::Read {
            path: self.path.clone(),
            source,
        })?;
        Self::parse(&content)
    }
}

/// Pages already held in memory.
#[derive(Debug, Clone, Default)]
pub struct PageFragments {
    pages: Vec<Vec<TextFragment>>,
}

impl PageFragments {
    pub fn new(pages: Vec<Vec<TextFragment>>) -> Self {
        Self { pages }
    }
}

impl FragmentSource for PageFragments {
    fn name(&self) -> String {
        "in-memory pages".to_string()
    }

    fn pages(&self) -> Result<Vec<Vec<TextFragment>>, AcquisitionError> {
        Ok(self.pages.clone())
    }
}

/// Picks a fragment source for a document path by its extension.
///
/// # Errors
///
/// Returns [`TrackplanError::SourceUnavailable`] for formats without a text
/// layer reader, such as `.pdf`, which must first be dumped to JSON by an
/// external extractor.
pub fn open_source(path: impl AsRef<Path>) -> Result<Box<dyn FragmentSource>, TrackplanError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            info!(path = path.display().to_string(); "Reading fragment dump");
            Ok(Box::new(JsonFragmentSource::new(path)))
        }
        other => {
            debug!(path = path.display().to_string(), extension:? = other; "No fragment source for document");
            Err(TrackplanError::SourceUnavailable(path.display().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_dump() {
        let pages = JsonFragmentSource::parse(
            r#"{"pages": [[{"text": "47.250km", "x": 212.0, "y": 640.5}], []]}"#,
        )
        .unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0][0].text(), "47.250km");
        assert_eq!(pages[0][0].y(), 640.5);
        assert!(pages[1].is_empty());
    }

    #[test]
    fn test_parse_malformed_dump() {
        let err = JsonFragmentSource::parse(r#"{"pages": [[{"text": 5}]]}"#).unwrap_err();
        assert!(matches!(err, AcquisitionError::Malformed(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let source = JsonFragmentSource::new("/nonexistent/trackplan/fragments.json");
        let err = source.pages().unwrap_err();
        assert!(matches!(err, AcquisitionError::Read { .. }));
    }

    #[test]
    fn test_read_dump_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"pages": [[{{"text": "Up Main", "x": 1, "y": 2}}]]}}"#).unwrap();

        let source = open_source(file.path()).unwrap();
        let pages = source.pages().unwrap();
        assert_eq!(pages[0][0].text(), "Up Main");
    }

    #[test]
    fn test_pdf_has_no_source() {
        let err = open_source("notice.pdf").err().unwrap();
        assert!(matches!(err, TrackplanError::SourceUnavailable(_)));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(open_source("DUMP.JSON").is_ok());
    }
}
