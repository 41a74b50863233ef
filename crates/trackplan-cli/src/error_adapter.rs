//! Error adapter for converting TrackplanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Recoverable
//! conditions carry a help line telling the user what to change.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use trackplan::TrackplanError;

/// Adapter for [`TrackplanError`] values.
pub struct ErrorAdapter<'a>(pub &'a TrackplanError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TrackplanError::Io(_) => "trackplan::io",
            TrackplanError::Config(_) => "trackplan::config",
            TrackplanError::SourceUnavailable(_) => "trackplan::source_unavailable",
            TrackplanError::Acquisition(_) => "trackplan::acquisition",
            TrackplanError::NoMarkers => "trackplan::no_markers",
            TrackplanError::Export(_) => "trackplan::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TrackplanError::Config(_) => "check the configuration file passed with --config",
            TrackplanError::SourceUnavailable(_) => {
                "dump the document's text layer to a JSON fragment file and import that instead"
            }
            TrackplanError::Acquisition(_) => {
                "a fragment dump is a JSON object with a `pages` array of {text, x, y} lists"
            }
            TrackplanError::NoMarkers => {
                "add `km,label,side,icon` lines such as `47.250,Home signal,top,signal` to the markers field"
            }
            TrackplanError::Io(_) | TrackplanError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &TrackplanError) -> String {
        ErrorAdapter(err).code().unwrap().to_string()
    }

    #[test]
    fn test_codes_per_variant() {
        assert_eq!(code(&TrackplanError::NoMarkers), "trackplan::no_markers");
        assert_eq!(
            code(&TrackplanError::SourceUnavailable("notice.pdf".to_string())),
            "trackplan::source_unavailable"
        );
        assert_eq!(
            code(&TrackplanError::Config("bad".to_string())),
            "trackplan::config"
        );
    }

    #[test]
    fn test_help_for_recoverable_errors() {
        let err = TrackplanError::NoMarkers;
        let adapter = ErrorAdapter(&err);
        assert!(adapter.help().unwrap().to_string().contains("47.250"));

        let err = TrackplanError::Io(std::io::Error::other("disk full"));
        assert!(ErrorAdapter(&err).help().is_none());
    }

    #[test]
    fn test_graphical_report_carries_code_and_help() {
        let err = TrackplanError::NoMarkers;
        let mut report = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut report, &ErrorAdapter(&err))
            .unwrap();

        assert!(report.contains("trackplan::no_markers"));
        assert!(report.contains("Add at least one marker to render"));
        assert!(report.contains("47.250"));
    }
}
