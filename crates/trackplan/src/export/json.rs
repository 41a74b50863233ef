use std::io::Write;

use log::debug;

use trackplan_core::scene::Scene;

use crate::export;

/// Writes the scene description itself as pretty-printed JSON, for
/// renderers that consume primitives directly
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneJsonExporter;

impl export::Exporter for SceneJsonExporter {
    fn export_scene(&self, scene: &Scene, writer: &mut dyn Write) -> Result<(), export::Error> {
        serde_json::to_writer_pretty(&mut *writer, scene)?;
        writeln!(writer)?;
        debug!(primitives = scene.primitives().len(); "Scene JSON written");
        Ok(())
    }
}
