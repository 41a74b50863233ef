//! Configuration types for Trackplan diagram rendering.
//!
//! This module provides configuration structures that control the diagram
//! canvas and its styling. All types implement [`serde::Deserialize`] so they
//! can be loaded from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas size, margins and track positions.
//! - [`StyleConfig`] - Colors and font families.
//!
//! Every field is optional. The defaults reproduce the standard 980x540
//! diagram with tracks at y 280 and 360, so diagrams drawn from the same
//! markers always occupy the same footprint unless a config overrides it.
//!
//! # Example
//!
//! ```
//! # use trackplan::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().width(), 980.0);
//! assert!(config.style().palette().is_ok());
//! ```

use serde::Deserialize;

use trackplan_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Top edge of the frame drawn around both tracks.
pub(crate) const FRAME_TOP: f32 = 210.0;
/// Bottom edge of the frame drawn around both tracks.
pub(crate) const FRAME_BOTTOM: f32 = 470.0;

/// Fixed geometry of the diagram canvas.
///
/// The horizontal scale runs from `margin` to `width - margin`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    width: f32,
    height: f32,
    margin: f32,
    top_track_y: f32,
    bottom_track_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 980.0,
            height: 540.0,
            margin: 80.0,
            top_track_y: 280.0,
            bottom_track_y: 360.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a layout with the given canvas size and the default margin and
    /// track positions.
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the horizontal margin on both sides.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// x of the lowest kilometre.
    pub fn left(&self) -> f32 {
        self.margin
    }

    /// x of the highest kilometre.
    pub fn right(&self) -> f32 {
        self.width - self.margin
    }

    pub fn top_track_y(&self) -> f32 {
        self.top_track_y
    }

    pub fn bottom_track_y(&self) -> f32 {
        self.bottom_track_y
    }

    /// Checks that the scale and the tracks are usable.
    ///
    /// # Errors
    ///
    /// Returns a message if the scale is empty, or if the tracks share a
    /// position or leave the frame.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.height.is_finite() && self.margin.is_finite()) {
            return Err("canvas width, height and margin must be finite".to_string());
        }
        if self.right() <= self.left() {
            return Err(format!(
                "margin {} leaves no room on a canvas {} wide",
                self.margin, self.width
            ));
        }
        for (name, y) in [("top", self.top_track_y), ("bottom", self.bottom_track_y)] {
            if !(FRAME_TOP..=FRAME_BOTTOM).contains(&y) {
                return Err(format!(
                    "{name} track y {y} must lie within the frame ({FRAME_TOP} to {FRAME_BOTTOM})"
                ));
            }
        }
        if self.top_track_y == self.bottom_track_y {
            return Err("top and bottom tracks must be at distinct positions".to_string());
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Color fields hold CSS color strings. Unset fields fall back to the
/// standard palette.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color painted behind the whole canvas by exporters.
    #[serde(default)]
    background_color: Option<String>,

    /// Lines, frame strokes and label text.
    #[serde(default)]
    ink_color: Option<String>,

    /// Signal icons and the route caption.
    #[serde(default)]
    muted_color: Option<String>,

    /// Plain dot icons.
    #[serde(default)]
    accent_color: Option<String>,

    #[serde(default)]
    sans_font: Option<String>,

    #[serde(default)]
    serif_font: Option<String>,
}

/// Resolved colors and fonts used by the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub ink: Color,
    pub muted: Color,
    pub accent: Color,
    pub header_fill: Color,
    pub header_stroke: Color,
    pub highlight_fill: Color,
    pub highlight_stroke: Color,
    pub detector_fill: Color,
    pub frame_fill: Color,
    pub sans_font: String,
    pub serif_font: String,
}

fn resolve(configured: Option<&String>, default: &str, field: &str) -> Result<Color, String> {
    let value = configured.map(String::as_str).unwrap_or(default);
    Color::new(value).map_err(|err| format!("Invalid {field} in config: {err}"))
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Resolves the full drawing palette.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first configured color that cannot be parsed.
    pub fn palette(&self) -> Result<Palette, String> {
        Ok(Palette {
            ink: resolve(self.ink_color.as_ref(), "#3f3a35", "ink color")?,
            muted: resolve(self.muted_color.as_ref(), "#6d655c", "muted color")?,
            accent: resolve(self.accent_color.as_ref(), "#d96b46", "accent color")?,
            header_fill: resolve(None, "#fbcfbc", "header fill")?,
            header_stroke: resolve(None, "#b56a52", "header stroke")?,
            highlight_fill: resolve(None, "#f3c09e", "highlight fill")?,
            highlight_stroke: resolve(None, "#c47a58", "highlight stroke")?,
            detector_fill: resolve(None, "#f7b69b", "detector fill")?,
            frame_fill: resolve(None, "#ffffff", "frame fill")?,
            sans_font: self
                .sans_font
                .clone()
                .unwrap_or_else(|| "Avenir Next, Futura, Gill Sans, sans-serif".to_string()),
            serif_font: self
                .serif_font
                .clone()
                .unwrap_or_else(|| "Iowan Old Style, Palatino, serif".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_contract() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.width(), 980.0);
        assert_eq!(layout.height(), 540.0);
        assert_eq!(layout.left(), 80.0);
        assert_eq!(layout.right(), 900.0);
        assert_eq!(layout.top_track_y(), 280.0);
        assert_eq!(layout.bottom_track_y(), 360.0);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_validation_rejects_oversized_margin() {
        let layout = LayoutConfig::with_canvas(100.0, 100.0).with_margin(60.0);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_layout_validation_rejects_track_outside_frame() {
        let config: AppConfig = toml::from_str("[layout]\ntop_track_y = 100\n").unwrap();
        let err = config.layout().validate().unwrap_err();
        assert!(err.contains("top track"), "unexpected message: {err}");

        let config: AppConfig = toml::from_str("[layout]\nbottom_track_y = 471\n").unwrap();
        assert!(config.layout().validate().is_err());

        let config: AppConfig =
            toml::from_str("[layout]\ntop_track_y = 210\nbottom_track_y = 470\n").unwrap();
        assert!(config.layout().validate().is_ok());
    }

    #[test]
    fn test_layout_validation_rejects_nan_track() {
        let config: AppConfig = toml::from_str("[layout]\ntop_track_y = nan\n").unwrap();
        assert!(config.layout().validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            width = 1200

            [style]
            background_color = "white"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().width(), 1200.0);
        assert_eq!(config.layout().right(), 1120.0);
        assert_eq!(config.layout().top_track_y(), 280.0);
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout(), &LayoutConfig::default());
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_invalid_palette_color_reported() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            ink_color = "definitely-not-a-color"
            "#,
        )
        .unwrap();

        let err = config.style().palette().unwrap_err();
        assert!(err.contains("ink color"), "unexpected message: {err}");
    }

    #[test]
    fn test_custom_fonts() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            sans_font = "Inter"
            "#,
        )
        .unwrap();

        let palette = config.style().palette().unwrap();
        assert_eq!(palette.sans_font, "Inter");
        assert_eq!(palette.serif_font, "Iowan Old Style, Palatino, serif");
    }
}
