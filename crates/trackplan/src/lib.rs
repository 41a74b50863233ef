//! Trackplan - Kilometre marker extraction and track diagram layout.
//!
//! Reads the text layer of track possession documents, pulls out the summary
//! title, the bulleted work items and the kilometre markers, and lays the
//! markers out on a two-track schematic that can be exported as SVG.

pub mod config;
pub mod export;
pub mod extract;

mod error;
mod layout;
mod state;

pub use trackplan_core::{color, fragment, geometry, marker, scene};

pub use error::TrackplanError;
pub use layout::LayoutEngine;
pub use state::{DiagramInput, DiagramState};

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, payload::ExportPayload};
use extract::{Extraction, FragmentSource};
use scene::Scene;

/// Builder for importing, laying out and rendering track diagrams.
///
/// This provides an API for the whole pipeline: document import into an
/// editable [`DiagramState`], layout of its [`DiagramInput`] into a
/// [`Scene`], and rendering or export of the result.
///
/// # Examples
///
/// ```rust
/// use trackplan::{DiagramState, TrackplanBuilder, config::AppConfig};
///
/// let builder = TrackplanBuilder::new(AppConfig::default());
///
/// // Start from the bundled sample diagram
/// let state = DiagramState::example();
///
/// // Lay it out and render it to SVG
/// let scene = builder.layout(&state.to_input()).expect("Failed to lay out");
/// let svg = builder.render_svg(&scene).expect("Failed to render");
/// assert!(svg.contains("47km Supersite Summary"));
/// ```
#[derive(Default)]
pub struct TrackplanBuilder {
    config: AppConfig,
}

impl TrackplanBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Import a document's text layer into `state`.
    ///
    /// The source is read in full before any field changes. On success the
    /// title, items and markers found replace the matching fields of
    /// `state`; fields with no finding keep their value.
    ///
    /// # Errors
    ///
    /// Returns `TrackplanError::Acquisition` if the source cannot be read.
    /// `state` is untouched in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trackplan::{DiagramState, TrackplanBuilder, extract::PageFragments, fragment::TextFragment};
    ///
    /// let source = PageFragments::new(vec![vec![
    ///     TextFragment::new("48.125km", 40.0, 300.0),
    ///     TextFragment::new("WILD", 120.0, 300.0),
    /// ]]);
    /// let mut state = DiagramState::default();
    ///
    /// let extraction = TrackplanBuilder::default()
    ///     .import(&source, &mut state)
    ///     .expect("Failed to import");
    ///
    /// assert_eq!(extraction.markers().len(), 1);
    /// assert_eq!(state.markers(), "48.125,WILD,top,detector");
    /// ```
    pub fn import(
        &self,
        source: &dyn FragmentSource,
        state: &mut DiagramState,
    ) -> Result<Extraction, TrackplanError> {
        info!(source = source.name(); "Importing document");

        let pages = source.pages()?;
        debug!(pages = pages.len(); "Document text layer acquired");

        let extraction = extract::extract_pages(&pages);
        trace!(summary:? = extraction.summary(); "Extracted summary");

        state.apply_extraction(&extraction);
        info!(
            title_found = !extraction.summary().title().is_empty(),
            items = extraction.summary().items().len(),
            markers = extraction.markers().len();
            "Document imported"
        );

        Ok(extraction)
    }

    /// Lay out a diagram on the configured canvas.
    ///
    /// # Errors
    ///
    /// Returns `TrackplanError::NoMarkers` when the input has no marker and
    /// `TrackplanError::Config` for an invalid layout or style configuration.
    pub fn layout(&self, input: &DiagramInput) -> Result<Scene, TrackplanError> {
        let layout = *self.config.layout();
        layout.validate().map_err(TrackplanError::Config)?;
        let palette = self
            .config
            .style()
            .palette()
            .map_err(TrackplanError::Config)?;

        let scene = LayoutEngine::new(layout, palette).layout(input)?;
        trace!(primitives:? = scene.primitives(); "Scene laid out");
        Ok(scene)
    }

    /// Render a scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `TrackplanError::Config` for an invalid background color.
    pub fn render_svg(&self, scene: &Scene) -> Result<String, TrackplanError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(TrackplanError::Config)?;

        let exporter = export::svg::SvgExporter::new().with_background(background);
        let svg = exporter.render_to_string(scene);

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render the scene description as JSON.
    ///
    /// # Errors
    ///
    /// Returns `TrackplanError::Export` if serialization fails.
    pub fn render_scene_json(&self, scene: &Scene) -> Result<String, TrackplanError> {
        let mut buffer = Vec::new();
        export::json::SceneJsonExporter.export_scene(scene, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(err.to_string()).into())
    }

    /// Export the structured data payload of a diagram as JSON.
    ///
    /// # Errors
    ///
    /// Returns `TrackplanError::Export` if serialization fails.
    pub fn export_payload(&self, state: &DiagramState) -> Result<String, TrackplanError> {
        let payload = ExportPayload::from_input(&state.to_input());
        let json = payload.to_json().map_err(export::Error::Json)?;
        debug!(markers = payload.markers.len(); "Payload exported");
        Ok(json)
    }
}
