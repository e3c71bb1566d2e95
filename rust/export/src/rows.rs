// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Delimited row format
//!
//! One line per filled shape: the fill color, the triangle list, a `/`
//! separator, then the outline with its first point repeated to close it.
//! Coordinates are fixed to two decimals and every coordinate pair carries
//! a trailing space, the separator included.

use rayon::prelude::*;
use svgplan_geometry::{triangulate_points, PolygonShape};

/// Rows for every exportable shape, in input order.
///
/// Shapes triangulate independently, so the scene fans out across worker
/// threads; each row is still assembled sequentially.
pub fn scene_rows(shapes: &[PolygonShape]) -> Vec<String> {
    shapes.par_iter().filter_map(shape_row).collect()
}

/// The row for one shape, or `None` when the shape is skipped: no points,
/// or an explicit `fill:none`.
pub fn shape_row(shape: &PolygonShape) -> Option<String> {
    let color = shape.fill_color();
    if color == "none" || shape.is_empty() {
        return None;
    }

    // The triangulator sees the outline reversed; the outline section
    // keeps drawing order.
    let mut reversed = shape.points().to_vec();
    reversed.reverse();
    let triangles = triangulate_points(&reversed);

    let mut line = String::new();
    for triangle in &triangles {
        for v in triangle.vertices() {
            line.push_str(&format!("{:.2},{:.2} ", v.x, v.y));
        }
    }

    line.push_str("/ ");
    for p in shape.points() {
        line.push_str(&format!("{:.2},{:.2} ", p.x, p.y));
    }
    let first = shape.points()[0];
    line.push_str(&format!("{:.2},{:.2} ", first.x, first.y));

    Some(format!("{} {}", color, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgplan_geometry::{Point2, StyleMap};

    fn shape(coords: &[(f64, f64)], fill: Option<&str>) -> PolygonShape {
        let points = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let mut style = StyleMap::default();
        if let Some(fill) = fill {
            style.insert("fill".to_string(), fill.to_string());
        }
        PolygonShape::new(points, style, String::new(), String::new())
    }

    const SQUARE: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

    #[test]
    fn test_square_row_layout() {
        let row = shape_row(&shape(SQUARE, Some("#ff0000"))).unwrap();
        assert_eq!(
            row,
            "#ff0000 0.00,1.00 1.00,1.00 1.00,0.00 0.00,1.00 1.00,0.00 0.00,0.00 \
             / 0.00,0.00 1.00,0.00 1.00,1.00 0.00,1.00 0.00,0.00 "
        );
    }

    #[test]
    fn test_row_ends_with_trailing_space() {
        let row = shape_row(&shape(SQUARE, None)).unwrap();
        assert!(row.ends_with(' '));
    }

    #[test]
    fn test_missing_fill_defaults_to_black() {
        let row = shape_row(&shape(SQUARE, None)).unwrap();
        assert!(row.starts_with("#000000 "));
    }

    #[test]
    fn test_fill_none_is_skipped() {
        assert_eq!(shape_row(&shape(SQUARE, Some("none"))), None);
    }

    #[test]
    fn test_empty_shape_is_skipped() {
        assert_eq!(shape_row(&shape(&[], Some("#123456"))), None);
    }

    #[test]
    fn test_outline_section_closes_the_loop() {
        let row = shape_row(&shape(SQUARE, None)).unwrap();
        let outline = row.split('/').nth(1).unwrap();
        let pairs: Vec<&str> = outline.split_whitespace().collect();
        assert_eq!(pairs.len(), SQUARE.len() + 1);
        assert_eq!(pairs.first(), pairs.last());
    }

    #[test]
    fn test_scene_rows_keep_input_order_and_skip() {
        let shapes = vec![
            shape(SQUARE, Some("#111111")),
            shape(SQUARE, Some("none")),
            shape(&[], Some("#222222")),
            shape(SQUARE, Some("#333333")),
        ];
        let rows = scene_rows(&shapes);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("#111111 "));
        assert!(rows[1].starts_with("#333333 "));
    }
}
