use std::io::Write;

use log::{debug, error};
use svg::{
    Document, Node,
    node::element::{Circle, Line, Rectangle, Text},
};

use trackplan_core::{
    color::Color,
    scene::{PrimitiveKind, Scene, ScenePrimitive},
};

use crate::export;

/// Renders scenes as standalone SVG documents
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    background: Option<Color>,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the whole canvas with `color` before any primitive
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Build the SVG document for a scene
    pub fn render_document(&self, scene: &Scene) -> Document {
        let size = scene.size();
        let mut document = Document::new()
            .set("viewBox", (0, 0, size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        if let Some(color) = &self.background {
            document = document.add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", color)
                    .set("fill-opacity", color.alpha()),
            );
        }

        for primitive in scene.primitives() {
            document = document.add(render_primitive(primitive));
        }

        debug!(primitives = scene.primitives().len(); "SVG document rendered");
        document
    }

    /// Render a scene to an SVG string
    pub fn render_to_string(&self, scene: &Scene) -> String {
        self.render_document(scene).to_string()
    }
}

fn with_attributes<N: Node>(mut node: N, primitive: &ScenePrimitive) -> N {
    for (name, value) in primitive.attributes() {
        node.assign(name.as_str(), value);
    }
    node
}

fn render_primitive(primitive: &ScenePrimitive) -> Box<dyn Node> {
    match primitive.kind() {
        PrimitiveKind::Rect => Box::new(with_attributes(Rectangle::new(), primitive)),
        PrimitiveKind::Line => Box::new(with_attributes(Line::new(), primitive)),
        PrimitiveKind::Circle => Box::new(with_attributes(Circle::new(), primitive)),
        PrimitiveKind::Text => Box::new(with_attributes(
            Text::new(primitive.content().unwrap_or_default()),
            primitive,
        )),
    }
}

impl export::Exporter for SvgExporter {
    fn export_scene(&self, scene: &Scene, writer: &mut dyn Write) -> Result<(), export::Error> {
        let document = self.render_document(scene);

        if let Err(err) = write!(writer, "{document}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}
