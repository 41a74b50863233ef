//! CLI logic for the Trackplan diagram tool.
//!
//! This module contains the core CLI logic: one function per subcommand, each
//! reading and writing state files around a [`TrackplanBuilder`] call.

pub mod error_adapter;

mod args;
mod config;
mod state_file;

pub use args::{Args, Command, OutputFormat};

use std::{fs, path::Path};

use log::{Level, info, log, warn};

use trackplan::{DiagramState, TrackplanBuilder, TrackplanError, extract};

/// Run the Trackplan CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TrackplanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Documents without a readable text layer
/// - Diagrams without markers
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), TrackplanError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = TrackplanBuilder::new(app_config);

    match &args.command {
        Command::Import {
            input,
            state,
            dump_page,
        } => import(&builder, input, state, *dump_page),
        Command::Render {
            state,
            output,
            format,
            route,
        } => render(&builder, state, output, *format, route.as_deref()),
        Command::Export { state, output } => export(&builder, state, output),
        Command::Example { output } => {
            state_file::save_state(output, &DiagramState::example())?;
            info!(output_file = output.display().to_string(); "Sample state written");
            Ok(())
        }
    }
}

fn import(
    builder: &TrackplanBuilder,
    input: &Path,
    state_path: &Path,
    dump_page: Option<usize>,
) -> Result<(), TrackplanError> {
    info!(
        input_path = input.display().to_string(),
        state_path = state_path.display().to_string();
        "Importing document"
    );

    let source = extract::open_source(input)?;
    let mut state = state_file::load_or_default(state_path)?;
    let extraction = builder.import(source.as_ref(), &mut state)?;

    let report = extraction.report();
    info!(
        pages = report.page_count(),
        fragments = report.total_fragments(),
        average_per_page = report.average_fragments_per_page();
        "Document text layer summary"
    );

    if let Some(page) = dump_page {
        match page.checked_sub(1).filter(|index| *index < report.page_count()) {
            Some(index) => println!("{}", report.text_dump(index)),
            None => warn!(page, pages = report.page_count(); "No such page to dump"),
        }
    }

    state_file::save_state(state_path, &state)?;
    let marker_count = extraction.markers().len();
    log!(
        import_log_level(marker_count),
        markers = marker_count,
        state_path = state_path.display().to_string();
        "{}",
        import_message(marker_count)
    );

    Ok(())
}

/// An import that finds no marker is worth a warning: the state keeps its
/// previous markers text.
fn import_log_level(marker_count: usize) -> Level {
    if marker_count == 0 { Level::Warn } else { Level::Info }
}

fn import_message(marker_count: usize) -> String {
    match marker_count {
        0 => "Document imported, but no km markers detected".to_string(),
        count => format!("Imported {count} markers"),
    }
}

fn render(
    builder: &TrackplanBuilder,
    state_path: &Path,
    output: &Path,
    format: OutputFormat,
    route: Option<&str>,
) -> Result<(), TrackplanError> {
    info!(
        state_path = state_path.display().to_string(),
        output_path = output.display().to_string();
        "Rendering diagram"
    );

    let mut state = state_file::load_state(state_path)?;
    if let Some(sentence) = route {
        match trackplan_parser::parse_route_sentence(sentence) {
            Some(route) => state.apply_route(&route),
            None => warn!(sentence; "No `between <from> and <to>` route in sentence"),
        }
    }

    let scene = builder.layout(&state.to_input())?;
    let rendered = match format {
        OutputFormat::Svg => builder.render_svg(&scene)?,
        OutputFormat::Json => builder.render_scene_json(&scene)?,
    };

    fs::write(output, rendered)?;

    info!(output_file = output.display().to_string(); "Diagram exported successfully");
    Ok(())
}

fn export(
    builder: &TrackplanBuilder,
    state_path: &Path,
    output: &Path,
) -> Result<(), TrackplanError> {
    let state = state_file::load_state(state_path)?;
    let json = builder.export_payload(&state)?;
    fs::write(output, json)?;

    info!(output_file = output.display().to_string(); "Track data exported successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_without_markers_warns() {
        assert_eq!(import_log_level(0), Level::Warn);
        assert_eq!(import_message(0), "Document imported, but no km markers detected");
    }

    #[test]
    fn test_import_with_markers_is_info() {
        assert_eq!(import_log_level(3), Level::Info);
        assert_eq!(import_message(3), "Imported 3 markers");
    }
}
