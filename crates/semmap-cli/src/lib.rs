//! CLI logic for the semmap tool.
//!
//! This module contains the core CLI logic: load configuration, read the
//! drawn diagram, build the semantic map and write it out.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info};

use semmap::{MapBuilder, SemmapError};

/// Run the semmap CLI application
///
/// This function processes the input SVG through the semmap pipeline
/// and writes the restructured SVG to the output file. Missing parent
/// directories of the output path are created.
///
/// # Errors
///
/// Returns `SemmapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input markup
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SemmapError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing map"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = MapBuilder::new(app_config);
    let document = builder.parse(&source)?;
    let map = builder.build_semantic_map(&document);
    let svg = builder.render_svg(map.document())?;

    let output = Path::new(&args.output);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!(dir = parent.display().to_string(); "Creating output directory");
        fs::create_dir_all(parent)?;
    }
    fs::write(output, svg)?;

    info!(
        "Created {} interactive nodes and {} legend items",
        map.interactive_count(),
        map.legend_count()
    );
    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
