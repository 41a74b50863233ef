//! Kilometre markers.
//!
//! A [`Marker`] is the canonical unit of diagram content: a finite kilometre
//! position, a free-text label, the [`Side`] of the diagram it is drawn on and
//! the [`Icon`] used to draw it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a word does not name a [`Side`] or an [`Icon`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerFieldError {
    #[error("unknown side `{0}`, expected one of: top, bottom, mid")]
    UnknownSide(String),

    #[error("unknown icon `{0}`, expected one of: signal, detector, bridge, note")]
    UnknownIcon(String),
}

/// Vertical placement of a marker relative to the two track lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Drawn on the top track line.
    #[default]
    Top,
    /// Drawn on the bottom track line.
    Bottom,
    /// Drawn halfway between the two track lines.
    Mid,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Mid => "mid",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = MarkerFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "mid" => Ok(Self::Mid),
            other => Err(MarkerFieldError::UnknownSide(other.to_string())),
        }
    }
}

/// Icon category used to draw a marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Signal,
    Detector,
    Bridge,
    Note,
}

impl Icon {
    /// Infers an icon from a marker label.
    ///
    /// Rules are tested in priority order on the lower-cased label and the
    /// first match wins:
    ///
    /// 1. `bridge` or `creek` → [`Icon::Bridge`]
    /// 2. `detector` or `wild` → [`Icon::Detector`]
    /// 3. `imaging`, `monitor` or `weigh` → [`Icon::Note`]
    /// 4. anything else → [`Icon::Signal`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use trackplan_core::marker::Icon;
    /// assert_eq!(Icon::infer("Weigh bridge"), Icon::Bridge);
    /// assert_eq!(Icon::infer("WILD"), Icon::Detector);
    /// assert_eq!(Icon::infer("Video Imaging"), Icon::Note);
    /// assert_eq!(Icon::infer("Home signal"), Icon::Signal);
    /// ```
    pub fn infer(label: &str) -> Self {
        const RULES: [(&[&str], Icon); 3] = [
            (&["bridge", "creek"], Icon::Bridge),
            (&["detector", "wild"], Icon::Detector),
            (&["imaging", "monitor", "weigh"], Icon::Note),
        ];

        let low = label.to_lowercase();
        RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| low.contains(needle)))
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Signal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signal => "signal",
            Self::Detector => "detector",
            Self::Bridge => "bridge",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Icon {
    type Err = MarkerFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signal" => Ok(Self::Signal),
            "detector" => Ok(Self::Detector),
            "bridge" => Ok(Self::Bridge),
            "note" => Ok(Self::Note),
            other => Err(MarkerFieldError::UnknownIcon(other.to_string())),
        }
    }
}

/// A classified kilometre-position record.
///
/// `km` is always finite: every constructor path in the workspace drops
/// records whose position cannot be read as a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    km: f64,
    label: String,
    side: Side,
    icon: Icon,
}

impl Marker {
    /// Creates a new marker.
    ///
    /// Returns `None` when `km` is not finite.
    ///
    /// ```
    /// # use trackplan_core::marker::{Icon, Marker, Side};
    /// assert!(Marker::new(47.25, "Rerail", Side::Top, Icon::Signal).is_some());
    /// assert!(Marker::new(f64::NAN, "Rerail", Side::Top, Icon::Signal).is_none());
    /// ```
    pub fn new(km: f64, label: impl Into<String>, side: Side, icon: Icon) -> Option<Self> {
        km.is_finite().then(|| Self {
            km,
            label: label.into(),
            side,
            icon,
        })
    }

    pub fn km(&self) -> f64 {
        self.km
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }
}
