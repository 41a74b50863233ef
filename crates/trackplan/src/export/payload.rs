//! Structured data export.
//!
//! The payload is the exchange form of a diagram: every field already
//! normalized, and the markers as structured records rather than text.
//!
//! ```json
//! {
//!   "title": "47km Supersite Summary",
//!   "items": ["Maintenance tamp through supersite extents."],
//!   "from": "WAN:P11A",
//!   "to": "WAS:P11B",
//!   "segment": "47.00km Supersite",
//!   "topTrack": "Up Main",
//!   "bottomTrack": "Down Main",
//!   "markers": [{ "km": 47.0, "label": "WILD", "side": "bottom", "icon": "detector" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use trackplan_core::marker::Marker;
use trackplan_parser::format_markers;

use crate::state::DiagramInput;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub title: String,
    pub items: Vec<String>,
    pub from: String,
    pub to: String,
    pub segment: String,
    pub top_track: String,
    pub bottom_track: String,
    pub markers: Vec<Marker>,
}

impl ExportPayload {
    pub fn from_input(input: &DiagramInput) -> Self {
        Self {
            title: input.title().to_string(),
            items: input.items().to_vec(),
            from: input.from().to_string(),
            to: input.to().to_string(),
            segment: input.segment().to_string(),
            top_track: input.top_track().to_string(),
            bottom_track: input.bottom_track().to_string(),
            markers: input.markers().to_vec(),
        }
    }

    /// Pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which only happens for maps with
    /// non-string keys and never for this type in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Markers in the manual `km,label,side,icon` encoding.
    pub fn markers_text(&self) -> String {
        format_markers(&self.markers)
    }
}

#[cfg(test)]
mod tests {
    use trackplan_parser::parse_markers;

    use super::*;
    use crate::state::DiagramState;

    #[test]
    fn test_camel_case_keys() {
        let payload = ExportPayload::from_input(&DiagramState::example().to_input());
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(value["topTrack"], "Up Main");
        assert_eq!(value["bottomTrack"], "Down Main");
        assert_eq!(value["from"], "WAN:P11A");
        assert!(value.get("top_track").is_none());
        assert_eq!(value["markers"][1]["side"], "bottom");
        assert_eq!(value["markers"][1]["icon"], "detector");
    }

    #[test]
    fn test_markers_survive_export() {
        let input = DiagramState::example().to_input();
        let payload = ExportPayload::from_input(&input);
        let back = ExportPayload::from_json(&payload.to_json().unwrap()).unwrap();

        assert_eq!(back, payload);
        assert_eq!(parse_markers(&back.markers_text()), input.markers());
    }

    #[test]
    fn test_items_are_normalized() {
        let mut state = DiagramState::default();
        state.set_items("  one \n\n two\n");
        let payload = ExportPayload::from_input(&state.to_input());
        assert_eq!(payload.items, ["one", "two"]);
    }
}
