//! Heuristic extraction of track data from document text layers.
//!
//! The pipeline runs in two stages:
//!
//! 1. Each page's fragments are rebuilt into reading-order [`Line`]s
//!    ([`reconstruct_lines`]) and the pages are concatenated in page order.
//! 2. The summary extractor ([`extract_summary`]) and the marker detector and
//!    classifier ([`extract_markers`]) run over the whole line corpus.
//!
//! Extraction is best-effort. Its output fills editable fields that the user
//! reviews before rendering.

mod lines;
mod markers;
mod source;
mod summary;

pub use lines::{quantize_y, reconstruct_lines};
pub use markers::{MarkerCandidate, classify, extract_markers, match_line};
pub use source::{
    AcquisitionError, FragmentSource, JsonFragmentSource, PageFragments, open_source,
};
pub use summary::{ExtractedSummary, extract_summary};

use log::info;

use trackplan_core::{
    fragment::{Line, TextFragment},
    marker::Marker,
};

/// Maximum number of lines shown by [`ExtractionReport::text_dump`].
const TEXT_DUMP_LINES: usize = 80;

/// Diagnostics about one extraction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    total_fragments: usize,
    lines_by_page: Vec<Vec<Line>>,
}

impl ExtractionReport {
    pub fn page_count(&self) -> usize {
        self.lines_by_page.len()
    }

    pub fn total_fragments(&self) -> usize {
        self.total_fragments
    }

    /// Average fragments per page, rounded, or `0` for an empty document.
    pub fn average_fragments_per_page(&self) -> usize {
        match self.page_count() {
            0 => 0,
            pages => (self.total_fragments as f64 / pages as f64).round() as usize,
        }
    }

    /// The first lines of one page as plain text, one line per row.
    ///
    /// Returns an empty string for an out-of-range page.
    pub fn text_dump(&self, page: usize) -> String {
        self.lines_by_page
            .get(page)
            .map(|lines| {
                lines
                    .iter()
                    .map(|line| line.joined().trim().to_string())
                    .filter(|text| !text.is_empty())
                    .take(TEXT_DUMP_LINES)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }
}

/// The complete result of one extraction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    summary: ExtractedSummary,
    markers: Vec<Marker>,
    report: ExtractionReport,
}

impl Extraction {
    pub fn summary(&self) -> &ExtractedSummary {
        &self.summary
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn report(&self) -> &ExtractionReport {
        &self.report
    }
}

/// Run the full extraction pipeline over a document's pages.
///
/// # Examples
///
/// ```
/// # use trackplan::extract::extract_pages;
/// # use trackplan_core::fragment::TextFragment;
/// let page = vec![
///     TextFragment::new("47km Supersite Summary", 40.0, 780.0),
///     TextFragment::new("47.250km", 120.0, 640.0),
///     TextFragment::new("Home signal", 200.0, 640.0),
/// ];
/// let extraction = extract_pages(&[page]);
///
/// assert_eq!(extraction.summary().title(), "47km Supersite Summary");
/// assert_eq!(extraction.markers()[0].label(), "Home signal");
/// assert_eq!(extraction.report().page_count(), 1);
/// ```
pub fn extract_pages(pages: &[Vec<TextFragment>]) -> Extraction {
    let lines_by_page: Vec<Vec<Line>> = pages.iter().map(|page| reconstruct_lines(page)).collect();
    let corpus: Vec<Line> = lines_by_page.iter().flatten().cloned().collect();

    let summary = extract_summary(&corpus);
    let markers = extract_markers(&corpus);

    let report = ExtractionReport {
        total_fragments: pages.iter().map(Vec::len).sum(),
        lines_by_page,
    };

    info!(
        pages = report.page_count(),
        fragments = report.total_fragments(),
        lines = corpus.len(),
        markers = markers.len();
        "Extraction complete"
    );

    Extraction {
        summary,
        markers,
        report,
    }
}
