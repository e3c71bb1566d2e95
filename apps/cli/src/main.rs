// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Convert an SVG floor plan into a triangle scene
//!
//! Reads the path/rect outlines of a named group, centers the scene about
//! the origin, triangulates every outline, and writes either delimited
//! rows or a Maya MEL script.
//!
//! Usage:
//!   svgplan <input.svg> [options]

use std::env;
use std::fs;
use std::io::{self, Write};

use svgplan_core::{read_floor_plan, SvgError};
use svgplan_export::{scene_rows, write_mel, WallOptions};
use svgplan_geometry::{center_scene, triangulate, PolygonShape};

const DEFAULT_GROUP: &str = "gFloorPlan";

enum OutputFormat {
    Rows,
    Mel,
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Rows => "rows",
            OutputFormat::Mel => "mel",
        }
    }
}

fn print_usage() {
    println!(
        r#"svgplan - Convert SVG floor plans to triangle scenes

USAGE:
    svgplan <input.svg> [OPTIONS]

ARGUMENTS:
    <input.svg>    Inkscape SVG containing the floor-plan group

OPTIONS:
    --group <id>        Group id to read (default: gFloorPlan)
    --format <fmt>      Output format: rows | mel (default: rows)
    --output <path>     Write to a file instead of stdout
    --wall-size <f>     Wall height and depth for mel output (default: 0.25)
    -h, --help          Show this help

EXAMPLES:
    # Triangle rows to stdout
    svgplan floorplan.svg

    # Maya script for the drawing's layer1 group
    svgplan floorplan.svg --group layer1 --format mel --output floorplan.mel
"#
    );
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let input_path = &args[1];

    // Parse options
    let mut group_id = DEFAULT_GROUP.to_string();
    let mut format = OutputFormat::Rows;
    let mut output_path: Option<String> = None;
    let mut wall_size: f64 = 0.25;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--group" => {
                i += 1;
                group_id = args[i].clone();
            }
            "--format" => {
                i += 1;
                format = match args[i].as_str() {
                    "rows" => OutputFormat::Rows,
                    "mel" => OutputFormat::Mel,
                    other => {
                        eprintln!("Unknown format: {}", other);
                        std::process::exit(1);
                    }
                };
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--wall-size" => {
                i += 1;
                wall_size = args[i].parse().expect("Invalid wall size value");
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Step 1: Read the document
    eprintln!("[1/4] Reading {}", input_path);
    let svg = fs::read_to_string(input_path).unwrap_or_else(|e| {
        eprintln!("Error: Cannot read '{}': {}", input_path, e);
        std::process::exit(1);
    });

    // Step 2: Extract shapes
    eprintln!("[2/4] Extracting group '{}'...", group_id);
    let mut shapes = match read_floor_plan(&svg, &group_id) {
        Ok(shapes) => shapes,
        Err(SvgError::GroupNotFound(id)) => {
            // A plan without the group is an empty scene, not a failure
            eprintln!("warning: no '{}' group in {}", id, input_path);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!("  {} shapes", shapes.len());

    // Step 3: Center the scene
    eprintln!("[3/4] Centering scene...");
    match center_scene(&mut shapes) {
        Some(extent) => eprintln!(
            "  Extent {:.2} x {:.2}, center was ({:.2}, {:.2})",
            extent.width(),
            extent.height(),
            extent.center().x,
            extent.center().y
        ),
        None => eprintln!("  Nothing to center"),
    }

    warn_on_stalled(&shapes);

    // Step 4: Export
    let target = output_path.as_deref().unwrap_or("stdout");
    eprintln!("[4/4] Writing {} ({})", target, format.name());

    let mut out: Box<dyn Write> = match &output_path {
        Some(path) => {
            let file = fs::File::create(path).unwrap_or_else(|e| {
                eprintln!("Error: Cannot create '{}': {}", path, e);
                std::process::exit(1);
            });
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };

    if let Err(e) = export(&mut out, &shapes, &format, wall_size) {
        eprintln!("Error: Cannot write output: {}", e);
        std::process::exit(1);
    }
}

fn export<W: Write>(
    out: &mut W,
    shapes: &[PolygonShape],
    format: &OutputFormat,
    wall_size: f64,
) -> io::Result<()> {
    match format {
        OutputFormat::Rows => {
            for row in scene_rows(shapes) {
                writeln!(out, "{}", row)?;
            }
            Ok(())
        }
        OutputFormat::Mel => {
            let options = WallOptions {
                height: wall_size,
                depth: wall_size,
            };
            write_mel(out, shapes, &options)
        }
    }
}

/// A stalled triangulation yields fewer than n-2 triangles; report which
/// shapes degraded before the export runs.
fn warn_on_stalled(shapes: &[PolygonShape]) {
    for shape in shapes {
        let n = shape.points().len();
        if n < 3 {
            continue;
        }
        let produced = triangulate(shape).len();
        if produced < n - 2 {
            eprintln!(
                "warning: shape '{}' ({} vertices) produced {} of {} triangles",
                shape_name(shape),
                n,
                produced,
                n - 2
            );
        }
    }
}

fn shape_name(shape: &PolygonShape) -> &str {
    if !shape.label.is_empty() {
        &shape.label
    } else if !shape.id.is_empty() {
        &shape.id
    } else {
        "unnamed"
    }
}
