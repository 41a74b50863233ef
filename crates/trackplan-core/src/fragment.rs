//! Positioned text fragments and the reading-order lines built from them.
//!
//! A [`TextFragment`] is one run of text from a document text layer together
//! with its baseline position. Document space has its y axis pointing
//! **upward**, so a larger `y` is higher on the page.
//!
//! A [`Line`] is a reconstructed row: the fragments that share a quantized
//! vertical position, ordered left to right.

use serde::{Deserialize, Serialize};

/// One unit of positioned text as emitted by a document text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    text: String,
    x: f64,
    y: f64,
}

impl TextFragment {
    /// Creates a new fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trackplan_core::fragment::TextFragment;
    /// let fragment = TextFragment::new("47.250km", 212.0, 640.5);
    /// assert_eq!(fragment.text(), "47.250km");
    /// ```
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// A reading-order row of text.
///
/// `y` is the quantized document-space position shared by every part, and
/// `parts` are the trimmed fragment texts sorted by ascending x.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    y: i64,
    parts: Vec<String>,
}

impl Line {
    pub fn new(y: i64, parts: Vec<String>) -> Self {
        Self { y, parts }
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the parts joined with single spaces.
    ///
    /// ```
    /// # use trackplan_core::fragment::Line;
    /// let line = Line::new(640, vec!["Rerail".into(), "47.250km".into()]);
    /// assert_eq!(line.joined(), "Rerail 47.250km");
    /// ```
    pub fn joined(&self) -> String {
        self.parts.join(" ")
    }
}
