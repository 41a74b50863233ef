//! Editable diagram state.
//!
//! [`DiagramState`] is the single owned record that both document import and
//! hand edits write to. Every field is free text, exactly as a user would
//! type it, and a write always replaces the whole field. [`DiagramState::to_input`]
//! turns the current text into the structured [`DiagramInput`] consumed by the
//! layout engine.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use trackplan_core::marker::Marker;
use trackplan_parser::{Route, format_markers_fixed, parse_markers};

use crate::extract::Extraction;

/// Copies of `markers` whose labels hold no field separator.
fn encodable_markers(markers: &[Marker]) -> Vec<Marker> {
    markers
        .iter()
        .filter_map(|marker| {
            Marker::new(
                marker.km(),
                marker.label().replace(',', ";"),
                marker.side(),
                marker.icon(),
            )
        })
        .collect()
}

/// Free-text form state of one diagram.
///
/// Serialized as TOML so it can be kept next to the documents it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramState {
    title: String,
    /// One work item per line.
    items: String,
    from: String,
    to: String,
    segment: String,
    top_track: String,
    bottom_track: String,
    /// Markers in the `km,label,side,icon` encoding, one per line.
    markers: String,
}

impl DiagramState {
    /// A filled-in sample diagram.
    pub fn example() -> Self {
        Self {
            title: "47km Supersite Summary".to_string(),
            items: [
                "Rerail 1000m through 47km supersite including new .",
                "Maintenance tamp through supersite extents.",
                "Remove and replace weigh bridge and WILD",
                "Video Imaging/Rail BAM/WCM disconnection and reconnection",
                "Test and commissioning for all asset protection & monitoring equipment",
            ]
            .join("\n"),
            from: "WAN:P11A".to_string(),
            to: "WAS:P11B".to_string(),
            segment: "47.00km Supersite".to_string(),
            top_track: "Up Main".to_string(),
            bottom_track: "Down Main".to_string(),
            markers: [
                "46.800,Home signal,top,signal",
                "47.000,WILD,bottom,detector",
                "47.250,Weigh bridge,top,bridge",
                "47.400,Video Imaging,bottom,note",
                "47.600,Rail BAM monitor,mid,note",
                "47.850,Starting signal,top,signal",
            ]
            .join("\n"),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn items(&self) -> &str {
        &self.items
    }

    pub fn set_items(&mut self, items: impl Into<String>) {
        self.items = items.into();
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn set_from(&mut self, from: impl Into<String>) {
        self.from = from.into();
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn set_to(&mut self, to: impl Into<String>) {
        self.to = to.into();
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn set_segment(&mut self, segment: impl Into<String>) {
        self.segment = segment.into();
    }

    pub fn top_track(&self) -> &str {
        &self.top_track
    }

    pub fn set_top_track(&mut self, top_track: impl Into<String>) {
        self.top_track = top_track.into();
    }

    pub fn bottom_track(&self) -> &str {
        &self.bottom_track
    }

    pub fn set_bottom_track(&mut self, bottom_track: impl Into<String>) {
        self.bottom_track = bottom_track.into();
    }

    pub fn markers(&self) -> &str {
        &self.markers
    }

    pub fn set_markers(&mut self, markers: impl Into<String>) {
        self.markers = markers.into();
    }

    /// Replace fields with what an extraction run found.
    ///
    /// The title, items and markers are each replaced only when the run found
    /// something for them; other fields are left untouched. Commas in
    /// extracted labels become `;` so the markers text parses back into the
    /// same fields.
    pub fn apply_extraction(&mut self, extraction: &Extraction) {
        let summary = extraction.summary();
        if !summary.title().is_empty() {
            self.title = summary.title().to_string();
        }
        if !summary.items().is_empty() {
            self.items = summary.items().join("\n");
        }
        if !extraction.markers().is_empty() {
            self.markers = format_markers_fixed(&encodable_markers(extraction.markers()));
        }

        debug!(
            title_found = !summary.title().is_empty(),
            items = summary.items().len(),
            markers = extraction.markers().len();
            "Applied extraction to diagram state"
        );
    }

    /// Fill the route fields from a parsed route sentence.
    pub fn apply_route(&mut self, route: &Route) {
        info!(from = route.from(), to = route.to(); "Route set from sentence");
        self.from = route.from().to_string();
        self.to = route.to().to_string();
    }

    /// Build the structured layout input from the current text.
    ///
    /// Text fields are trimmed, items are split on line breaks with blank
    /// lines removed, and markers are parsed permissively.
    pub fn to_input(&self) -> DiagramInput {
        DiagramInput {
            title: self.title.trim().to_string(),
            items: self
                .items
                .lines()
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            from: self.from.trim().to_string(),
            to: self.to.trim().to_string(),
            segment: self.segment.trim().to_string(),
            top_track: self.top_track.trim().to_string(),
            bottom_track: self.bottom_track.trim().to_string(),
            markers: parse_markers(&self.markers),
        }
    }
}

/// Structured input of the layout engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramInput {
    title: String,
    items: Vec<String>,
    from: String,
    to: String,
    segment: String,
    top_track: String,
    bottom_track: String,
    markers: Vec<Marker>,
}

impl DiagramInput {
    /// Creates an input with the given markers and every text field empty.
    pub fn from_markers(markers: Vec<Marker>) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    pub fn with_route(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = from.into();
        self.to = to.into();
        self
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = segment.into();
        self
    }

    pub fn with_tracks(mut self, top: impl Into<String>, bottom: impl Into<String>) -> Self {
        self.top_track = top.into();
        self.bottom_track = bottom.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn top_track(&self) -> &str {
        &self.top_track
    }

    pub fn bottom_track(&self) -> &str {
        &self.bottom_track
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}
