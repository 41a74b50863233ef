//! Kilometre marker detection and classification.
//!
//! Detection works one line at a time ([`match_line`]). Classification needs
//! every candidate of the document at once because a marker's side depends on
//! where it sits relative to the median line of all candidates
//! ([`classify`]). [`extract_markers`] runs both phases in order.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use trackplan_core::{
    fragment::Line,
    marker::{Icon, Marker, Side},
};

/// `47.250km`, `47.25 KM`, `1.5km`: one to three integer digits, a decimal
/// point, one to three fractional digits, optional whitespace and the unit.
static KM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,3}\.[0-9]{1,3})\s*km").expect("km pattern is a valid regex")
});

/// A detected marker whose side and icon are not yet known.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCandidate {
    km: f64,
    label: String,
    y: i64,
}

impl MarkerCandidate {
    pub fn new(km: f64, label: impl Into<String>, y: i64) -> Self {
        Self {
            km,
            label: label.into(),
            y,
        }
    }

    pub fn km(&self) -> f64 {
        self.km
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Quantized document-space y of the line the marker was found on.
    pub fn y(&self) -> i64 {
        self.y
    }
}

fn is_km_token(text: &str) -> bool {
    KM_PATTERN.is_match(text)
}

/// Picks the part right after the km part, or the one right before it when
/// the km part is last. A neighbor that is itself a km token belongs to the
/// next marker and yields an empty label.
fn neighbor_label(parts: &[String]) -> &str {
    let Some(index) = parts.iter().position(|part| is_km_token(part)) else {
        return "";
    };

    let neighbor = parts
        .get(index + 1)
        .or_else(|| index.checked_sub(1).and_then(|before| parts.get(before)))
        .map(String::as_str)
        .unwrap_or_default();

    if is_km_token(neighbor) { "" } else { neighbor }
}

/// Every part that is not a km token, joined and trimmed.
fn remainder_label(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|part| !is_km_token(part))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Detect the first kilometre token of a line and infer its label.
///
/// Returns `None` when the line carries no km token or its value is not
/// finite.
///
/// # Examples
///
/// ```
/// # use trackplan::extract::match_line;
/// # use trackplan_core::fragment::Line;
/// let line = Line::new(640, vec!["Rerail".into(), "47.250km".into(), "supersite".into()]);
/// let candidate = match_line(&line).unwrap();
/// assert_eq!(candidate.km(), 47.25);
/// assert_eq!(candidate.label(), "supersite");
/// ```
pub fn match_line(line: &Line) -> Option<MarkerCandidate> {
    let joined = line.joined();
    let captures = KM_PATTERN.captures(&joined)?;
    let km: f64 = captures.get(1)?.as_str().parse().ok()?;
    if !km.is_finite() {
        debug!(line = joined.as_str(); "Discarding km token with non-finite value");
        return None;
    }

    let neighbor = neighbor_label(line.parts());
    let label = if neighbor.is_empty() {
        remainder_label(line.parts())
    } else {
        neighbor.to_string()
    };

    Some(MarkerCandidate::new(km, label, line.y()))
}

/// Median of the candidates' y values.
///
/// The element at `floor(n / 2)` of the ascending list, so the median is
/// always an observed line position.
fn median_y(candidates: &[MarkerCandidate]) -> Option<i64> {
    let mut ys: Vec<i64> = candidates.iter().map(MarkerCandidate::y).collect();
    ys.sort_unstable();
    ys.get(ys.len() / 2).copied()
}

/// Assign side and icon to every candidate.
///
/// Candidates at or above the median y (higher on the page) go on the top
/// track, the rest on the bottom track. Output order follows input order.
pub fn classify(candidates: Vec<MarkerCandidate>) -> Vec<Marker> {
    let Some(median) = median_y(&candidates) else {
        return Vec::new();
    };
    trace!(median, candidates = candidates.len(); "Classifying marker candidates");

    candidates
        .into_iter()
        .filter_map(|candidate| {
            let side = if candidate.y >= median {
                Side::Top
            } else {
                Side::Bottom
            };
            let icon = Icon::infer(&candidate.label);
            Marker::new(candidate.km, candidate.label, side, icon)
        })
        .collect()
}

/// Detect and classify markers over a whole line corpus.
pub fn extract_markers(lines: &[Line]) -> Vec<Marker> {
    let candidates: Vec<MarkerCandidate> = lines.iter().filter_map(match_line).collect();
    debug!(lines = lines.len(), candidates = candidates.len(); "Detected marker candidates");
    classify(candidates)
}
