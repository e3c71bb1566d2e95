// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Maya MEL emission
//!
//! Writes a degree-1 boundary curve per shape and one wall cube per edge:
//! `polyCube` sized to the edge, moved to its midpoint, yawed to align
//! with it. Plan y maps to Maya z; elevation stays at 0.

use std::io;
use std::io::Write;

use svgplan_geometry::{wall_segments, PolygonShape};

/// Wall cross-section applied to every cube.
#[derive(Debug, Clone, Copy)]
pub struct WallOptions {
    pub height: f64,
    pub depth: f64,
}

impl Default for WallOptions {
    fn default() -> Self {
        Self {
            height: 0.25,
            depth: 0.25,
        }
    }
}

/// Write the MEL scene for all shapes. Empty shapes are skipped.
pub fn write_mel<W: Write>(
    out: &mut W,
    shapes: &[PolygonShape],
    options: &WallOptions,
) -> io::Result<()> {
    for shape in shapes {
        if shape.is_empty() {
            continue;
        }
        write_shape(out, shape, options)?;
    }
    Ok(())
}

fn write_shape<W: Write>(
    out: &mut W,
    shape: &PolygonShape,
    options: &WallOptions,
) -> io::Result<()> {
    let mut curve = format!("curve -name curve_{} -d 1 ", shape.label);
    for p in shape.points() {
        curve.push_str(&format!("-p {:.6} {:.6} {:.6} ", p.x, 0.0, p.y));
    }
    for knot in 0..shape.points().len() {
        curve.push_str(&format!("-k {} ", knot));
    }
    writeln!(out, "{};", curve.trim_end())?;

    for segment in wall_segments(shape.points()) {
        writeln!(
            out,
            "polyCube -w {:.6} -h {:.6} -d {:.6} -sx 1 -sy 1 -sz 1 -ax 0 1 0 -cuv 4 -ch 1;",
            segment.length, options.height, options.depth
        )?;
        writeln!(
            out,
            "move -a {:.6} {:.6} {:.6};",
            segment.center.x, 0.0, segment.center.y
        )?;
        writeln!(out, "rotate -a {:.6} {:.6} {:.6};", 0.0, segment.angle_deg, 0.0)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgplan_geometry::{Point2, StyleMap};

    fn square_shape(label: &str) -> PolygonShape {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        PolygonShape::new(points, StyleMap::default(), label.to_string(), String::new())
    }

    fn render(shapes: &[PolygonShape]) -> String {
        let mut buffer = Vec::new();
        write_mel(&mut buffer, shapes, &WallOptions::default()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_curve_command_lists_points_and_knots() {
        let script = render(&[square_shape("room")]);
        let curve = script.lines().next().unwrap();
        assert!(curve.starts_with("curve -name curve_room -d 1 "));
        assert!(curve.contains("-p 0.000000 0.000000 0.000000 "));
        assert!(curve.contains("-p 1.000000 0.000000 1.000000 "));
        assert!(curve.contains("-k 0 "));
        assert!(curve.ends_with("-k 3;"));
    }

    #[test]
    fn test_one_cube_per_edge() {
        let script = render(&[square_shape("room")]);
        // 4 points form an open chain of 3 edges
        assert_eq!(script.matches("polyCube").count(), 3);
        assert_eq!(script.matches("\nmove").count(), 3);
        assert_eq!(script.matches("\nrotate").count(), 3);
    }

    #[test]
    fn test_cube_placement_for_first_edge() {
        let script = render(&[square_shape("room")]);
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(
            lines[1],
            "polyCube -w 1.000000 -h 0.250000 -d 0.250000 -sx 1 -sy 1 -sz 1 -ax 0 1 0 -cuv 4 -ch 1;"
        );
        assert_eq!(lines[2], "move -a 0.500000 0.000000 0.000000;");
        assert_eq!(lines[3], "rotate -a 0.000000 180.000000 0.000000;");
    }

    #[test]
    fn test_wall_size_options_reach_the_cubes() {
        let mut buffer = Vec::new();
        let options = WallOptions {
            height: 2.5,
            depth: 0.1,
        };
        write_mel(&mut buffer, &[square_shape("w")], &options).unwrap();
        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("-h 2.500000 -d 0.100000"));
    }

    #[test]
    fn test_empty_shapes_are_skipped() {
        let empty = PolygonShape::new(
            Vec::new(),
            StyleMap::default(),
            "ghost".to_string(),
            String::new(),
        );
        assert!(render(&[empty]).is_empty());
    }
}
