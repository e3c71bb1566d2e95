// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall extrusion parameters
//!
//! Derives, per outline edge, what a 3D authoring tool needs to stand a
//! wall box on it: midpoint, length, and yaw. Plan y becomes the depth
//! axis of the target scene, so the yaw is measured in the xz plane.

use nalgebra::Point2;

/// Placement of one wall box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSegment {
    /// Edge midpoint in plan coordinates.
    pub center: Point2<f64>,
    /// Edge length; the box's long dimension.
    pub length: f64,
    /// Rotation about the vertical axis, in degrees.
    pub angle_deg: f64,
}

/// Wall placements for consecutive point pairs of an open chain.
///
/// An outline of n points yields n-1 segments; fewer than 2 points yield
/// none. Zero-length edges are kept and come back with length 0 and yaw
/// 90 degrees.
pub fn wall_segments(points: &[Point2<f64>]) -> Vec<WallSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    points
        .windows(2)
        .map(|pair| {
            let p0 = pair[0];
            let p1 = pair[1];
            let dx = p1.x - p0.x;
            let dz = p1.y - p0.y;

            WallSegment {
                center: Point2::new((p0.x + p1.x) * 0.5, (p0.y + p1.y) * 0.5),
                length: (dx * dx + dz * dz).sqrt(),
                angle_deg: dx.atan2(dz).to_degrees() + 90.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_count_is_edges_of_open_chain() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(wall_segments(&points).len(), 3);
        assert!(wall_segments(&points[..1]).is_empty());
        assert!(wall_segments(&[]).is_empty());
    }

    #[test]
    fn test_horizontal_edge_yaw() {
        let segments = wall_segments(&[Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)]);
        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0].length, 2.0);
        assert_eq!(segments[0].center, Point2::new(1.0, 0.0));
        assert_relative_eq!(segments[0].angle_deg, 180.0);
    }

    #[test]
    fn test_vertical_edge_yaw() {
        let segments = wall_segments(&[Point2::new(0.0, 0.0), Point2::new(0.0, 2.0)]);
        assert_relative_eq!(segments[0].angle_deg, 90.0);
        assert_relative_eq!(segments[0].length, 2.0);
        assert_eq!(segments[0].center, Point2::new(0.0, 1.0));
    }

    #[test]
    fn test_diagonal_edge() {
        let segments = wall_segments(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_relative_eq!(segments[0].length, std::f64::consts::SQRT_2);
        assert_relative_eq!(segments[0].angle_deg, 135.0);
    }
}
