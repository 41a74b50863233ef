//! Technology-agnostic scene description.
//!
//! The layout engine emits a [`Scene`]: a fixed canvas and an ordered list of
//! [`ScenePrimitive`]s. The order is the paint order. Exporters translate
//! primitives one to one into their target format without re-ordering them.
//!
//! # Example
//!
//! ```
//! # use trackplan_core::scene::{PrimitiveKind, ScenePrimitive};
//! let dot = ScenePrimitive::circle()
//!     .with_attr("cx", 490.0)
//!     .with_attr("cy", 280.0)
//!     .with_attr("r", 4.0);
//!
//! assert_eq!(dot.kind(), PrimitiveKind::Circle);
//! assert_eq!(dot.number("cx"), Some(490.0));
//! ```

use indexmap::IndexMap;
use serde::Serialize;

use crate::{color::Color, geometry::Size};

/// The shape family of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Rect,
    Line,
    Circle,
    Text,
}

/// An attribute value: either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f32),
    Text(String),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&Color> for AttrValue {
    fn from(color: &Color) -> Self {
        Self::Text(color.to_string())
    }
}

impl From<&AttrValue> for svg::node::Value {
    fn from(value: &AttrValue) -> Self {
        match value {
            AttrValue::Number(n) => Self::from(*n),
            AttrValue::Text(s) => Self::from(s.as_str()),
        }
    }
}

/// One drawable unit of a scene.
///
/// Attributes keep their insertion order. Text primitives carry their string
/// in [`content`](Self::content); every other property is an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePrimitive {
    kind: PrimitiveKind,
    attributes: IndexMap<String, AttrValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl ScenePrimitive {
    fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
            content: None,
        }
    }

    pub fn rect() -> Self {
        Self::new(PrimitiveKind::Rect)
    }

    pub fn line() -> Self {
        Self::new(PrimitiveKind::Line)
    }

    pub fn circle() -> Self {
        Self::new(PrimitiveKind::Circle)
    }

    /// Creates a text primitive with the given content.
    pub fn text(content: impl Into<String>) -> Self {
        let mut primitive = Self::new(PrimitiveKind::Text);
        primitive.content = Some(content.into());
        primitive
    }

    /// Sets an attribute, replacing any previous value under the same name.
    pub fn with_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Returns a numeric attribute, or `None` if it is missing or a string.
    pub fn number(&self, name: &str) -> Option<f32> {
        self.attr(name).and_then(AttrValue::as_number)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Kilometre range covered by the markers of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KmRange {
    min: f64,
    max: f64,
}

impl KmRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(self) -> f64 {
        self.min
    }

    pub fn max(self) -> f64 {
        self.max
    }

    /// Position of `km` between the two ends, `0` at `min` and `1` at `max`.
    ///
    /// A degenerate range counts as a span of `1`. Both ends are halved
    /// before subtracting so ranges near `f64::MAX` stay finite.
    pub fn fraction(self, km: f64) -> f64 {
        if self.max == self.min {
            return km - self.min;
        }
        (km / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
    }
}

/// A complete diagram description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    width: f32,
    height: f32,
    marker_count: usize,
    km_range: KmRange,
    primitives: Vec<ScenePrimitive>,
}

impl Scene {
    pub fn new(size: Size, marker_count: usize, km_range: KmRange) -> Self {
        Self {
            width: size.width(),
            height: size.height(),
            marker_count,
            km_range,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: ScenePrimitive) {
        self.primitives.push(primitive);
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    pub fn km_range(&self) -> KmRange {
        self.km_range
    }

    pub fn primitives(&self) -> &[ScenePrimitive] {
        &self.primitives
    }

    /// Iterates over the text primitives' contents in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(ScenePrimitive::content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let rect = ScenePrimitive::rect()
            .with_attr("x", 40.0)
            .with_attr("y", 210.0)
            .with_attr("fill", "#fff");

        let names: Vec<_> = rect.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, ["x", "y", "fill"]);
    }

    #[test]
    fn test_with_attr_replaces_value() {
        let line = ScenePrimitive::line().with_attr("x1", 1.0).with_attr("x1", 2.0);
        assert_eq!(line.attributes().len(), 1);
        assert_eq!(line.number("x1"), Some(2.0));
    }

    #[test]
    fn test_number_ignores_text_attributes() {
        let text = ScenePrimitive::text("Up Main").with_attr("font-size", "12");
        assert_eq!(text.number("font-size"), None);
        assert_eq!(text.attr("font-size").and_then(AttrValue::as_text), Some("12"));
        assert_eq!(text.content(), Some("Up Main"));
    }

    #[test]
    fn test_km_range_fraction() {
        let range = KmRange::new(10.0, 30.0);
        assert_eq!(range.fraction(10.0), 0.0);
        assert_eq!(range.fraction(20.0), 0.5);
        assert_eq!(range.fraction(30.0), 1.0);
    }

    #[test]
    fn test_km_range_degenerate_fraction() {
        assert_eq!(KmRange::new(50.0, 50.0).fraction(50.0), 0.0);
    }

    #[test]
    fn test_km_range_fraction_at_float_limits() {
        let range = KmRange::new(-1e308, 1e308);
        assert_eq!(range.fraction(-1e308), 0.0);
        assert_eq!(range.fraction(0.0), 0.5);
        assert_eq!(range.fraction(1e308), 1.0);
    }

    #[test]
    fn test_scene_texts_in_paint_order() {
        let mut scene = Scene::new(Size::new(980.0, 540.0), 0, KmRange::new(0.0, 0.0));
        scene.push(ScenePrimitive::text("first"));
        scene.push(ScenePrimitive::circle());
        scene.push(ScenePrimitive::text("second"));

        let texts: Vec<_> = scene.texts().collect();
        assert_eq!(texts, ["first", "second"]);
    }
}
