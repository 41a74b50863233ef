//! Fixed-position primitives framing the markers.

use trackplan_core::{
    geometry::{Bounds, Point, Size},
    scene::{Scene, ScenePrimitive},
};

use super::bounded_rect;
use crate::{
    config::{FRAME_BOTTOM, FRAME_TOP, LayoutConfig, Palette},
    state::DiagramInput,
};

/// Work items drawn in the header beyond this count are dropped.
const MAX_HEADER_ITEMS: usize = 6;

const HEADER_X: f32 = 120.0;
const HEADER_Y: f32 = 24.0;
const HEADER_HEIGHT: f32 = 140.0;
const TITLE_Y: f32 = 54.0;
const ITEM_X: f32 = 150.0;
const ITEM_Y: f32 = 80.0;
const ITEM_SPACING: f32 = 18.0;

const FRAME_INSET: f32 = 40.0;

const SEGMENT_HALF_WIDTH: f32 = 26.0;
const SEGMENT_RISE: f32 = 50.0;
const SEGMENT_HEIGHT: f32 = 160.0;
const SEGMENT_LABEL_DROP: f32 = 40.0;

const CAPTION_INSET: f32 = 110.0;
const CAPTION_Y: f32 = 230.0;

fn or_default<'a>(text: &'a str, default: &'a str) -> &'a str {
    if text.is_empty() { default } else { text }
}

/// Header block, title and the first work items.
pub(super) fn push_header(
    scene: &mut Scene,
    layout: &LayoutConfig,
    palette: &Palette,
    input: &DiagramInput,
) {
    let header = Bounds::new_from_top_left(
        Point::new(HEADER_X, HEADER_Y),
        Size::new(layout.width() - 2.0 * HEADER_X, HEADER_HEIGHT),
    );
    scene.push(
        bounded_rect(header)
            .with_attr("rx", 6.0)
            .with_attr("fill", &palette.header_fill)
            .with_attr("stroke", &palette.header_stroke)
            .with_attr("stroke-width", 2.0),
    );

    scene.push(
        ScenePrimitive::text(or_default(input.title(), "Track Summary"))
            .with_attr("x", layout.width() / 2.0)
            .with_attr("y", TITLE_Y)
            .with_attr("text-anchor", "middle")
            .with_attr("font-size", 20.0)
            .with_attr("font-family", palette.sans_font.as_str()),
    );

    for (index, item) in input.items().iter().take(MAX_HEADER_ITEMS).enumerate() {
        scene.push(
            ScenePrimitive::text(format!("\u{25A1} {item}"))
                .with_attr("x", ITEM_X)
                .with_attr("y", ITEM_Y + index as f32 * ITEM_SPACING)
                .with_attr("font-size", 13.0)
                .with_attr("font-family", palette.serif_font.as_str()),
        );
    }
}

/// Frame, both track lines and the track names.
pub(super) fn push_tracks(
    scene: &mut Scene,
    layout: &LayoutConfig,
    palette: &Palette,
    input: &DiagramInput,
) {
    let frame = Bounds::new_from_top_left(
        Point::new(FRAME_INSET, FRAME_TOP),
        Size::new(layout.width() - 2.0 * FRAME_INSET, FRAME_BOTTOM - FRAME_TOP),
    );
    scene.push(
        bounded_rect(frame)
            .with_attr("fill", &palette.frame_fill)
            .with_attr("stroke", &palette.ink)
            .with_attr("stroke-width", 2.0),
    );

    for y in [layout.top_track_y(), layout.bottom_track_y()] {
        scene.push(
            ScenePrimitive::line()
                .with_attr("x1", layout.left())
                .with_attr("y1", y)
                .with_attr("x2", layout.right())
                .with_attr("y2", y)
                .with_attr("stroke", &palette.ink)
                .with_attr("stroke-width", 2.0),
        );
    }

    let labels = [
        (or_default(input.top_track(), "Top Track"), layout.top_track_y() - 14.0),
        (or_default(input.bottom_track(), "Bottom Track"), layout.bottom_track_y() + 24.0),
    ];
    for (label, y) in labels {
        scene.push(
            ScenePrimitive::text(label)
                .with_attr("x", layout.left())
                .with_attr("y", y)
                .with_attr("font-size", 12.0)
                .with_attr("font-family", palette.sans_font.as_str()),
        );
    }
}

/// Highlight band across both tracks at the horizontal center.
pub(super) fn push_segment(
    scene: &mut Scene,
    layout: &LayoutConfig,
    palette: &Palette,
    input: &DiagramInput,
) {
    let center = (layout.left() + layout.right()) / 2.0;
    let top = layout.top_track_y();

    let band = Bounds::new_from_top_left(
        Point::new(center - SEGMENT_HALF_WIDTH, top - SEGMENT_RISE),
        Size::new(2.0 * SEGMENT_HALF_WIDTH, SEGMENT_HEIGHT),
    );
    scene.push(
        bounded_rect(band)
            .with_attr("fill", &palette.highlight_fill)
            .with_attr("stroke", &palette.highlight_stroke)
            .with_attr("stroke-width", 1.5),
    );

    let label_y = top + SEGMENT_LABEL_DROP;
    scene.push(
        ScenePrimitive::text(or_default(input.segment(), "Segment"))
            .with_attr("x", center)
            .with_attr("y", label_y)
            .with_attr("text-anchor", "middle")
            .with_attr("font-size", 11.0)
            .with_attr("font-family", palette.sans_font.as_str())
            .with_attr("transform", format!("rotate(90 {center} {label_y})")),
    );
}

/// `Between <from> and <to>` caption, only when either end is known.
pub(super) fn push_caption(
    scene: &mut Scene,
    layout: &LayoutConfig,
    palette: &Palette,
    input: &DiagramInput,
) {
    if input.from().is_empty() && input.to().is_empty() {
        return;
    }

    let caption = format!(
        "Between {} and {}",
        or_default(input.from(), "?"),
        or_default(input.to(), "?")
    );
    scene.push(
        ScenePrimitive::text(caption)
            .with_attr("x", layout.width() - CAPTION_INSET)
            .with_attr("y", CAPTION_Y)
            .with_attr("text-anchor", "end")
            .with_attr("font-size", 11.0)
            .with_attr("font-family", palette.sans_font.as_str())
            .with_attr("fill", &palette.muted),
    );
}
