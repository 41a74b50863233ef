//! Marker placement and icon geometry.

use log::trace;

use trackplan_core::{
    geometry::{Bounds, Point, Size},
    marker::{Icon, Marker, Side},
    scene::{KmRange, Scene, ScenePrimitive},
};

use super::bounded_rect;
use crate::config::{LayoutConfig, Palette};

const SIGNAL_RADIUS: f32 = 6.0;
const SIGNAL_STUB: (f32, f32) = (8.0, 22.0);
const DETECTOR_SIDE: f32 = 16.0;
const BRIDGE_HALF_WIDTH: f32 = 10.0;
const BRIDGE_RISE: f32 = 60.0;
const BRIDGE_HEIGHT: f32 = 120.0;
const DOT_RADIUS: f32 = 4.0;

const LABEL_ABOVE: f32 = 14.0;
const LABEL_BELOW: f32 = 22.0;

/// Horizontal position of a km value on the linear scale.
///
/// A range whose ends coincide has a span of `1`, so its markers land on the
/// left margin.
pub(super) fn marker_x(km: f64, range: KmRange, left: f32, right: f32) -> f32 {
    left + (range.fraction(km) * f64::from(right - left)) as f32
}

/// Vertical position of the track a marker is drawn on.
pub(super) fn marker_y(side: Side, layout: &LayoutConfig) -> f32 {
    match side {
        Side::Top => layout.top_track_y(),
        Side::Bottom => layout.bottom_track_y(),
        Side::Mid => (layout.top_track_y() + layout.bottom_track_y()) / 2.0,
    }
}

fn icon_primitives(
    icon: Icon,
    point: Point,
    layout: &LayoutConfig,
    palette: &Palette,
) -> Vec<ScenePrimitive> {
    match icon {
        Icon::Signal => {
            let stub_start = point.add_point(Point::new(SIGNAL_STUB.0, 0.0));
            let stub_end = point.add_point(Point::new(SIGNAL_STUB.1, 0.0));
            vec![
                ScenePrimitive::circle()
                    .with_attr("cx", point.x())
                    .with_attr("cy", point.y())
                    .with_attr("r", SIGNAL_RADIUS)
                    .with_attr("fill", &palette.muted),
                ScenePrimitive::line()
                    .with_attr("x1", stub_start.x())
                    .with_attr("y1", stub_start.y())
                    .with_attr("x2", stub_end.x())
                    .with_attr("y2", stub_end.y())
                    .with_attr("stroke", &palette.muted)
                    .with_attr("stroke-width", 2.0),
            ]
        }
        Icon::Detector => vec![
            bounded_rect(Bounds::new_from_center(
                point,
                Size::new(DETECTOR_SIDE, DETECTOR_SIDE),
            ))
            .with_attr("fill", &palette.detector_fill)
            .with_attr("stroke", &palette.header_stroke)
            .with_attr("stroke-width", 1.5),
        ],
        // Bridges span the whole structure whatever their side.
        Icon::Bridge => vec![
            bounded_rect(Bounds::new_from_top_left(
                Point::new(point.x() - BRIDGE_HALF_WIDTH, layout.top_track_y() - BRIDGE_RISE),
                Size::new(2.0 * BRIDGE_HALF_WIDTH, BRIDGE_HEIGHT),
            ))
            .with_attr("fill", &palette.highlight_fill)
            .with_attr("stroke", &palette.highlight_stroke)
            .with_attr("stroke-width", 1.5),
        ],
        Icon::Note => vec![
            ScenePrimitive::circle()
                .with_attr("cx", point.x())
                .with_attr("cy", point.y())
                .with_attr("r", DOT_RADIUS)
                .with_attr("fill", &palette.accent),
        ],
    }
}

/// Label text: the km to two decimals followed by the label.
fn label_text(marker: &Marker) -> String {
    format!("{:.2} {}", marker.km(), marker.label())
        .trim()
        .to_string()
}

/// Push one marker's icon primitives and its label.
pub(super) fn push_marker(
    scene: &mut Scene,
    layout: &LayoutConfig,
    palette: &Palette,
    range: KmRange,
    marker: &Marker,
) {
    let point = Point::new(
        marker_x(marker.km(), range, layout.left(), layout.right()),
        marker_y(marker.side(), layout),
    );
    trace!(km = marker.km(), x = point.x(), y = point.y(); "Placing marker");

    for primitive in icon_primitives(marker.icon(), point, layout, palette) {
        scene.push(primitive);
    }

    let label_y = match marker.side() {
        Side::Bottom => point.y() + LABEL_BELOW,
        Side::Top | Side::Mid => point.y() - LABEL_ABOVE,
    };
    scene.push(
        ScenePrimitive::text(label_text(marker))
            .with_attr("x", point.x())
            .with_attr("y", label_y)
            .with_attr("text-anchor", "middle")
            .with_attr("font-size", 10.0)
            .with_attr("font-family", palette.serif_font.as_str())
            .with_attr("fill", &palette.ink),
    );
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use trackplan_core::{geometry::Size, scene::PrimitiveKind};

    use super::*;
    use crate::config::StyleConfig;

    fn place(marker: Marker) -> Scene {
        let layout = LayoutConfig::default();
        let palette = StyleConfig::default().palette().unwrap();
        let mut scene = Scene::new(Size::new(980.0, 540.0), 1, KmRange::new(0.0, 10.0));
        push_marker(&mut scene, &layout, &palette, KmRange::new(0.0, 10.0), &marker);
        scene
    }

    #[test]
    fn test_marker_x_scale() {
        let range = KmRange::new(10.0, 30.0);
        assert_approx_eq!(f32, marker_x(20.0, range, 80.0, 900.0), 490.0);
        assert_approx_eq!(f32, marker_x(10.0, range, 80.0, 900.0), 80.0);
        assert_approx_eq!(f32, marker_x(30.0, range, 80.0, 900.0), 900.0);
    }

    #[test]
    fn test_marker_x_degenerate_range() {
        let range = KmRange::new(50.0, 50.0);
        assert_approx_eq!(f32, marker_x(50.0, range, 80.0, 900.0), 80.0);
        assert_approx_eq!(f32, marker_x(50.0, range, 15.0, 40.0), 15.0);
    }

    #[test]
    fn test_marker_x_extreme_range_stays_finite() {
        let range = KmRange::new(-1e308, 1e308);
        assert_approx_eq!(f32, marker_x(-1e308, range, 80.0, 900.0), 80.0);
        assert_approx_eq!(f32, marker_x(1e308, range, 80.0, 900.0), 900.0);
    }

    #[test]
    fn test_mid_side_between_tracks() {
        assert_approx_eq!(f32, marker_y(Side::Mid, &LayoutConfig::default()), 320.0);
    }

    #[test]
    fn test_signal_icon() {
        let scene = place(Marker::new(5.0, "Home", Side::Top, Icon::Signal).unwrap());
        let primitives = scene.primitives();
        assert_eq!(primitives.len(), 3);

        assert_eq!(primitives[0].kind(), PrimitiveKind::Circle);
        assert_approx_eq!(f32, primitives[0].number("cx").unwrap(), 490.0);
        assert_approx_eq!(f32, primitives[0].number("r").unwrap(), 6.0);

        assert_eq!(primitives[1].kind(), PrimitiveKind::Line);
        assert_approx_eq!(f32, primitives[1].number("x1").unwrap(), 498.0);
        assert_approx_eq!(f32, primitives[1].number("x2").unwrap(), 512.0);

        assert_eq!(primitives[2].content(), Some("5.00 Home"));
    }

    #[test]
    fn test_detector_icon_centered() {
        let scene = place(Marker::new(0.0, "WILD", Side::Bottom, Icon::Detector).unwrap());
        let square = &scene.primitives()[0];
        assert_eq!(square.kind(), PrimitiveKind::Rect);
        assert_approx_eq!(f32, square.number("x").unwrap(), 72.0);
        assert_approx_eq!(f32, square.number("y").unwrap(), 352.0);
        assert_approx_eq!(f32, square.number("width").unwrap(), 16.0);
    }

    #[test]
    fn test_bridge_ignores_side() {
        for side in [Side::Top, Side::Bottom, Side::Mid] {
            let scene = place(Marker::new(10.0, "Weigh bridge", side, Icon::Bridge).unwrap());
            let bar = &scene.primitives()[0];
            assert_approx_eq!(f32, bar.number("y").unwrap(), 220.0);
            assert_approx_eq!(f32, bar.number("height").unwrap(), 120.0);
            assert_approx_eq!(f32, bar.number("x").unwrap(), 890.0);
        }
    }

    #[test]
    fn test_note_icon_is_plain_dot() {
        let scene = place(Marker::new(0.0, "", Side::Mid, Icon::Note).unwrap());
        let dot = &scene.primitives()[0];
        assert_eq!(dot.kind(), PrimitiveKind::Circle);
        assert_approx_eq!(f32, dot.number("r").unwrap(), 4.0);
        assert_approx_eq!(f32, dot.number("cy").unwrap(), 320.0);
    }

    #[test]
    fn test_label_text_rounds_and_trims() {
        let marker = Marker::new(47.256, "", Side::Top, Icon::Signal).unwrap();
        assert_eq!(label_text(&marker), "47.26");

        let marker = Marker::new(47.0, "Rerail", Side::Top, Icon::Signal).unwrap();
        assert_eq!(label_text(&marker), "47.00 Rerail");
    }
}
