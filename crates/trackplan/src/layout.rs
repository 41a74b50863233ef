//! Diagram layout.
//!
//! The [`LayoutEngine`] turns a [`DiagramInput`] into a [`Scene`] on a fixed
//! canvas. Every diagram is drawn the same way, in this paint order:
//!
//! 1. the header block with the title and up to six work items,
//! 2. the frame, both track lines and their labels,
//! 3. the segment band and its rotated label,
//! 4. each marker's icon followed by its label, in input order,
//! 5. the route caption, when a route is known.
//!
//! Markers are placed horizontally by a linear km scale between the left and
//! right margins and vertically on the track named by their side.

mod frame;
mod markers;

use log::{debug, info};

use trackplan_core::{
    geometry::{Bounds, Size},
    scene::{KmRange, Scene, ScenePrimitive},
};

use crate::{
    TrackplanError,
    config::{LayoutConfig, Palette},
    state::DiagramInput,
};

/// Places diagram primitives on the canvas described by a [`LayoutConfig`].
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    layout: LayoutConfig,
    palette: Palette,
}

impl LayoutEngine {
    pub fn new(layout: LayoutConfig, palette: Palette) -> Self {
        Self { layout, palette }
    }

    /// Lay out one diagram.
    ///
    /// # Errors
    ///
    /// Returns [`TrackplanError::NoMarkers`] when the input has no marker.
    /// Nothing is emitted in that case.
    pub fn layout(&self, input: &DiagramInput) -> Result<Scene, TrackplanError> {
        let Some(km_range) = km_range(input) else {
            debug!("Layout requested without markers");
            return Err(TrackplanError::NoMarkers);
        };

        let size = Size::new(self.layout.width(), self.layout.height());
        let mut scene = Scene::new(size, input.markers().len(), km_range);

        frame::push_header(&mut scene, &self.layout, &self.palette, input);
        frame::push_tracks(&mut scene, &self.layout, &self.palette, input);
        frame::push_segment(&mut scene, &self.layout, &self.palette, input);
        for marker in input.markers() {
            markers::push_marker(&mut scene, &self.layout, &self.palette, km_range, marker);
        }
        frame::push_caption(&mut scene, &self.layout, &self.palette, input);

        info!(
            markers = scene.marker_count(),
            primitives = scene.primitives().len();
            "Rendered {} markers from {:.2} to {:.2} km",
            scene.marker_count(),
            km_range.min(),
            km_range.max()
        );

        Ok(scene)
    }
}

/// A rect primitive covering `bounds`.
fn bounded_rect(bounds: Bounds) -> ScenePrimitive {
    ScenePrimitive::rect()
        .with_attr("x", bounds.min_x())
        .with_attr("y", bounds.min_y())
        .with_attr("width", bounds.width())
        .with_attr("height", bounds.height())
}

/// Smallest and largest km over all markers, or `None` without markers.
fn km_range(input: &DiagramInput) -> Option<KmRange> {
    let mut kms = input.markers().iter().map(|marker| marker.km());
    let first = kms.next()?;
    let (min, max) = kms.fold((first, first), |(min, max), km| (min.min(km), max.max(km)));
    Some(KmRange::new(min, max))
}
